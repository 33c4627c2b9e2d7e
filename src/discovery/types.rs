/// IP version a discovery call is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    /// Either IPv4 or IPv6, whichever a candidate answers with first.
    Any,
    /// IPv4 addresses only.
    V4,
    /// IPv6 addresses only.
    V6,
}

/// Discovery method identifier, used as the lookup key in the client's
/// discoverer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// STUN binding request against a STUN server.
    Stun,
    /// DNS query against a resolver that echoes the caller's address.
    Dns,
    /// HTTPS GET against an IP-echo endpoint.
    Http,
}
