//! Public IP discovery core.
//!
//! Three discoverers find the caller's externally visible address, each
//! behind the same [`traits::Discoverer`] contract:
//!
//! - [`stun::StunDiscoverer`] sends a STUN binding request and reads the
//!   reflexive address out of the response.
//! - [`dns::DnsDiscoverer`] queries resolvers that answer a special domain
//!   with the querying client's own address.
//! - [`http::HttpDiscoverer`] fetches IP-echo endpoints whose response body
//!   is the caller's address.
//!
//! Every discoverer walks its configured candidate list strictly in
//! sequence. STUN and DNS interleave address families per server (IPv6
//! first, then IPv4 for the same server when either family is acceptable);
//! HTTP instead runs a full IPv6 pass over all endpoints before the IPv4
//! pass. A connection forced to one family never falls back to the other at
//! the transport layer, and a discovered address whose family does not match
//! the request is a failure, never a different kind of success.
//!
//! Per-attempt errors are traced and swallowed; an exhausted candidate list
//! reduces to the uniform [`errors::DiscoveryError::NoIpDiscovered`].

pub mod constants;
pub mod dns;
pub mod errors;
pub mod functions;
pub mod http;
pub mod impls;
pub mod stun;
pub mod traits;
pub mod types;
