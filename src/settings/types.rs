// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{
    default_dns_port, default_dns_servers, default_http_endpoints, default_request_timeout,
    default_stun_servers,
};

/// Immutable snapshot of the discovery configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Per-request timeout in seconds, applied to each individual network
    /// attempt.
    #[serde(default = "default_request_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub stun: StunSettings,

    #[serde(default)]
    pub dns: DnsSettings,

    #[serde(default)]
    pub http: HttpSettings,
}

/// Settings specific to STUN discovery.
#[derive(Debug, Deserialize, Clone)]
pub struct StunSettings {
    /// STUN servers as host:port pairs, tried in list order.
    #[serde(default = "default_stun_servers")]
    pub servers: Vec<String>,
}

/// Settings specific to DNS discovery.
#[derive(Debug, Deserialize, Clone)]
pub struct DnsSettings {
    /// Resolver/domain pairs, tried in list order.
    #[serde(default = "default_dns_servers")]
    pub servers: Vec<DnsServerEntry>,
}

/// A resolver paired with a domain name whose answer, when queried against
/// that resolver, is the querying client's own address.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DnsServerEntry {
    /// Resolver host to dial.
    pub resolver: String,
    /// Domain name to look up.
    pub domain: String,
    /// Resolver port.
    #[serde(default = "default_dns_port")]
    pub port: u16,
}

/// Settings specific to HTTP discovery.
#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    /// IP-echo endpoints as URLs, tried in list order.
    #[serde(default = "default_http_endpoints")]
    pub endpoints: Vec<String>,
}
