// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::DiscoveryError;
use super::types::IpVersion;

/// Contract implemented by every discovery method.
///
/// A discoverer owns its slice of the settings (the per-request timeout and
/// its own candidate list), keeps no state between calls, and walks its
/// candidates strictly in sequence. A successful result is always an
/// address matching the requested `version` when `version` is not
/// [`IpVersion::Any`]; exhausting every candidate reduces to
/// [`DiscoveryError::NoIpDiscovered`].
#[async_trait]
pub trait Discoverer: Send + Sync {
    /// Attempts to find the public IP restricted to `version`.
    async fn discover(&self, version: IpVersion) -> Result<IpAddr, DiscoveryError>;
}
