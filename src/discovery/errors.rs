// 3rd party crates
use hickory_resolver::error::ResolveError;
use thiserror::Error;

// Current module imports
use super::types::IpVersion;

/// Failure of a single (candidate, family) attempt. These never reach the
/// caller; discoverers trace them and advance to the next candidate.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("network error from {service}: {error}")]
    Network {
        service: String,
        error: std::io::Error,
    },

    #[error("{service} has no {version} address")]
    NoFamilyAddress { service: String, version: IpVersion },

    #[error("request to {service} failed: {error}")]
    Request {
        service: String,
        error: reqwest::Error,
    },

    #[error("DNS lookup via {service} failed: {error}")]
    Lookup {
        service: String,
        error: ResolveError,
    },

    #[error("STUN exchange with {service} failed: {error}")]
    Stun {
        service: String,
        error: bytecodec::Error,
    },

    #[error("invalid response from {service}: {response}")]
    InvalidResponse { service: String, response: String },

    #[error("IP version mismatch from {service}: expected {expected}, got {got}")]
    VersionMismatch {
        service: String,
        expected: IpVersion,
        got: IpVersion,
    },

    #[error("request to {service} timed out")]
    Timeout { service: String },
}

/// Errors surfaced by the discovery entry points.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Every configured candidate was exhausted without a usable address.
    #[error("no public IP could be discovered")]
    NoIpDiscovered,

    /// The requested method has no registered discoverer.
    #[error("unsupported discovery method: {0}")]
    UnsupportedMethod(String),

    /// The requested IP version is not a valid version value.
    #[error("unsupported IP version: {0}")]
    UnsupportedIpVersion(String),

    /// The caller-supplied deadline expired before any candidate answered.
    #[error("discovery timed out")]
    Timeout,
}
