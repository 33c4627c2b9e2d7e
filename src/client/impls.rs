// Standard library
use std::collections::HashMap;
use std::net::IpAddr;

// 3rd party crates
use tracing::debug;

// Project imports
use crate::discovery::constants::METHOD_PRIORITY;
use crate::discovery::dns::DnsDiscoverer;
use crate::discovery::errors::DiscoveryError;
use crate::discovery::http::HttpDiscoverer;
use crate::discovery::stun::StunDiscoverer;
use crate::discovery::traits::Discoverer;
use crate::discovery::types::{IpVersion, Method};
use crate::settings::types::Settings;

// Current module imports
use super::types::Client;

impl Client {
    /// Creates a client with the built-in default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates a client from a settings snapshot, consumed by value. Each
    /// discoverer takes its own slice of the settings.
    pub fn with_settings(settings: Settings) -> Self {
        let request_timeout = settings.request_timeout();

        let mut discoverers: HashMap<Method, Box<dyn Discoverer>> = HashMap::new();
        discoverers.insert(
            Method::Stun,
            Box::new(StunDiscoverer::new(request_timeout, settings.stun)),
        );
        discoverers.insert(
            Method::Dns,
            Box::new(DnsDiscoverer::new(request_timeout, settings.dns)),
        );
        discoverers.insert(
            Method::Http,
            Box::new(HttpDiscoverer::new(request_timeout, settings.http)),
        );

        Self { discoverers }
    }

    /// Discovers the public IP using a specific method.
    pub async fn discover_with_method(
        &self,
        method: Method,
        version: IpVersion,
    ) -> Result<IpAddr, DiscoveryError> {
        let discoverer = self.discoverers.get(&method).ok_or_else(|| {
            debug!("unsupported discovery method: {}", method);
            DiscoveryError::UnsupportedMethod(method.to_string())
        })?;

        discoverer.discover(version).await
    }

    /// Tries every method in priority order (STUN, DNS, HTTP) until one
    /// finds an address of the requested version.
    pub async fn discover_with_version(
        &self,
        version: IpVersion,
    ) -> Result<IpAddr, DiscoveryError> {
        for method in METHOD_PRIORITY {
            match self.discover_with_method(method, version).await {
                Ok(ip) => return Ok(ip),
                Err(err) => debug!("method {} failed: {}", method, err),
            }
        }

        debug!("all discovery methods failed");
        Err(DiscoveryError::NoIpDiscovered)
    }

    /// Discovers the public IP of either family using every method in
    /// order.
    pub async fn discover(&self) -> Result<IpAddr, DiscoveryError> {
        self.discover_with_version(IpVersion::Any).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
