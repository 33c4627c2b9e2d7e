// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfig, Protocol, ResolverConfig, ResolverOpts,
};
use hickory_resolver::TokioAsyncResolver;
use tracing::debug;

// Project imports
use crate::settings::types::{DnsServerEntry, DnsSettings};

// Current module imports
use super::errors::{AttemptError, DiscoveryError};
use super::functions::{lookup_for_version, validate_version};
use super::traits::Discoverer;
use super::types::IpVersion;

/// Discovers the public IP by querying resolvers that answer a special
/// domain with the querying client's own address.
pub struct DnsDiscoverer {
    request_timeout: Duration,
    settings: DnsSettings,
}

impl DnsDiscoverer {
    pub fn new(request_timeout: Duration, settings: DnsSettings) -> Self {
        Self {
            request_timeout,
            settings,
        }
    }

    /// Queries `entry.domain` against `entry.resolver`, with the resolver
    /// dialed over `version` only.
    async fn try_server(
        &self,
        entry: &DnsServerEntry,
        version: IpVersion,
    ) -> Result<IpAddr, AttemptError> {
        let service = entry.to_string();

        let resolver_addr = lookup_for_version(
            &service,
            &format!("{}:{}", entry.resolver, entry.port),
            version,
            self.request_timeout,
        )
        .await?;

        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(resolver_addr, Protocol::Udp));

        let mut opts = ResolverOpts::default();
        opts.timeout = self.request_timeout;
        opts.attempts = 1;
        opts.ip_strategy = match version {
            IpVersion::V6 => LookupIpStrategy::Ipv6Only,
            _ => LookupIpStrategy::Ipv4Only,
        };

        let resolver = TokioAsyncResolver::tokio(config, opts);
        let lookup = resolver
            .lookup_ip(entry.domain.as_str())
            .await
            .map_err(|error| AttemptError::Lookup {
                service: service.clone(),
                error,
            })?;

        let ip = lookup
            .iter()
            .next()
            .ok_or_else(|| AttemptError::InvalidResponse {
                service: service.clone(),
                response: "empty answer set".to_string(),
            })?;

        validate_version(&service, ip, version)
    }
}

#[async_trait]
impl Discoverer for DnsDiscoverer {
    async fn discover(&self, version: IpVersion) -> Result<IpAddr, DiscoveryError> {
        for entry in &self.settings.servers {
            // Try IPv6 first if version is Any or V6
            if matches!(version, IpVersion::Any | IpVersion::V6) {
                match self.try_server(entry, IpVersion::V6).await {
                    Ok(ip) => return Ok(ip),
                    Err(err) => {
                        debug!("IPv6 DNS query failed for {}: {}", entry, err);
                        if version == IpVersion::V6 {
                            continue;
                        }
                    }
                }
            }

            // Try IPv4 if version is Any or V4
            if matches!(version, IpVersion::Any | IpVersion::V4) {
                match self.try_server(entry, IpVersion::V4).await {
                    Ok(ip) => return Ok(ip),
                    Err(err) => debug!("IPv4 DNS query failed for {}: {}", entry, err),
                }
            }
        }

        debug!("all DNS servers failed to discover an IP");
        Err(DiscoveryError::NoIpDiscovered)
    }
}
