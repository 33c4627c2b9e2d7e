// 3rd party crates
use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("request timeout must be greater than 0")]
    InvalidTimeout,

    #[error("STUN server list is empty")]
    NoStunServers,

    #[error("DNS server list is empty")]
    NoDnsServers,

    #[error("HTTP endpoint list is empty")]
    NoHttpEndpoints,

    #[error("invalid DNS server entry {resolver:?}/{domain:?}: resolver and domain must be non-empty")]
    InvalidDnsServer { resolver: String, domain: String },
}
