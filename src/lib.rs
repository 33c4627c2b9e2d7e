//! Public IP address discovery.
//!
//! `wanip` finds the caller's externally visible IP address by asking
//! outside services through three protocols: STUN binding requests, DNS
//! queries against resolvers that echo the requester's address, and HTTPS
//! GETs to IP-echo endpoints. Methods and their candidate servers are tried
//! strictly in sequence with per-family fallback; the first validated
//! address wins, and an exhausted chain reduces to a single uniform
//! failure.
//!
//! # Example
//!
//! ```no_run
//! use wanip::{Client, IpVersion, Method};
//!
//! # async fn example() -> Result<(), wanip::DiscoveryError> {
//! let client = Client::new();
//!
//! // Either family, any method.
//! let ip = client.discover().await?;
//! println!("public IP: {}", ip);
//!
//! // IPv4 over STUN only.
//! let ip = client
//!     .discover_with_method(Method::Stun, IpVersion::V4)
//!     .await?;
//! println!("public IPv4 via STUN: {}", ip);
//! # Ok(())
//! # }
//! ```
//!
//! Deadlines compose from the outside: wrap any discovery call in
//! `tokio::time::timeout` to bound the whole fallback chain, while each
//! individual attempt stays bounded by the configured per-request timeout.
//! Dropping the future cancels discovery between and within attempts.

// Project modules
pub mod client;
pub mod discovery;
pub mod settings;

// Re-exports
pub use client::types::Client;
pub use discovery::errors::DiscoveryError;
pub use discovery::traits::Discoverer;
pub use discovery::types::{IpVersion, Method};
pub use settings::errors::SettingsError;
pub use settings::types::{DnsServerEntry, DnsSettings, HttpSettings, Settings, StunSettings};
