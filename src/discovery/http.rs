// Standard library
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use tracing::debug;

// Project imports
use crate::settings::types::HttpSettings;

// Current module imports
use super::errors::{AttemptError, DiscoveryError};
use super::functions::validate_version;
use super::traits::Discoverer;
use super::types::IpVersion;

/// Discovers the public IP from endpoints that echo the caller's address
/// in the response body.
pub struct HttpDiscoverer {
    request_timeout: Duration,
    settings: HttpSettings,
}

impl HttpDiscoverer {
    pub fn new(request_timeout: Duration, settings: HttpSettings) -> Self {
        Self {
            request_timeout,
            settings,
        }
    }

    /// Builds a client whose connections are pinned to one address family,
    /// TLS handshake included, by binding the local side to that family's
    /// unspecified address.
    fn family_client(&self, version: IpVersion) -> Result<reqwest::Client, reqwest::Error> {
        let local: IpAddr = match version {
            IpVersion::V6 => Ipv6Addr::UNSPECIFIED.into(),
            _ => Ipv4Addr::UNSPECIFIED.into(),
        };

        reqwest::Client::builder()
            .local_address(local)
            .timeout(self.request_timeout)
            .connect_timeout(self.request_timeout)
            .build()
    }

    async fn try_endpoint(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        version: IpVersion,
    ) -> Result<IpAddr, AttemptError> {
        let request = |error| AttemptError::Request {
            service: endpoint.to_string(),
            error,
        };

        let body = client
            .get(endpoint)
            .send()
            .await
            .map_err(request)?
            .text()
            .await
            .map_err(request)?;

        let trimmed = body.trim();
        let ip: IpAddr = trimmed.parse().map_err(|_| AttemptError::InvalidResponse {
            service: endpoint.to_string(),
            response: trimmed.to_string(),
        })?;

        validate_version(endpoint, ip, version)
    }

    /// One pass over every endpoint, all forced to the same family.
    async fn try_pass(&self, version: IpVersion) -> Option<IpAddr> {
        let client = match self.family_client(version) {
            Ok(client) => client,
            Err(err) => {
                debug!("failed to build {} HTTP client: {}", version, err);
                return None;
            }
        };

        for endpoint in &self.settings.endpoints {
            match self.try_endpoint(&client, endpoint, version).await {
                Ok(ip) => return Some(ip),
                Err(err) => debug!("{} request failed for {}: {}", version, endpoint, err),
            }
        }
        None
    }
}

#[async_trait]
impl Discoverer for HttpDiscoverer {
    async fn discover(&self, version: IpVersion) -> Result<IpAddr, DiscoveryError> {
        // Unlike STUN and DNS, the whole endpoint list is walked once per
        // family, the IPv6 pass before the IPv4 pass.
        if matches!(version, IpVersion::Any | IpVersion::V6) {
            if let Some(ip) = self.try_pass(IpVersion::V6).await {
                return Ok(ip);
            }
        }

        if matches!(version, IpVersion::Any | IpVersion::V4) {
            if let Some(ip) = self.try_pass(IpVersion::V4).await {
                return Ok(ip);
            }
        }

        debug!("all HTTP endpoints failed to discover an IP");
        Err(DiscoveryError::NoIpDiscovered)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Minimal IP-echo endpoint: answers every request with `body`.
    async fn spawn_http_server(body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = stream.read(&mut buf).await;
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        addr
    }

    fn discoverer(endpoints: Vec<String>) -> HttpDiscoverer {
        HttpDiscoverer::new(Duration::from_secs(1), HttpSettings { endpoints })
    }

    #[tokio::test]
    async fn body_whitespace_is_trimmed() {
        let addr = spawn_http_server("  198.51.100.9\n").await;

        let http = discoverer(vec![format!("http://{}", addr)]);
        let ip = http.discover(IpVersion::V4).await.unwrap();
        assert_eq!(ip, "198.51.100.9".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn non_address_body_falls_back_to_the_next_endpoint() {
        let bad = spawn_http_server("<html>not an ip</html>").await;
        let good = spawn_http_server("198.51.100.9").await;

        let http = discoverer(vec![format!("http://{}", bad), format!("http://{}", good)]);
        let ip = http.discover(IpVersion::V4).await.unwrap();
        assert_eq!(ip, "198.51.100.9".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn v4_only_rejects_an_ipv6_body() {
        let addr = spawn_http_server("2001:db8::1").await;

        let http = discoverer(vec![format!("http://{}", addr)]);
        let err = http.discover(IpVersion::V4).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::NoIpDiscovered));
    }

    #[tokio::test]
    async fn any_reaches_the_ipv4_pass_after_the_ipv6_pass() {
        // The endpoint only listens on IPv4, so the full IPv6 pass fails
        // and the IPv4 pass must produce the result.
        let addr = spawn_http_server("198.51.100.9").await;

        let http = discoverer(vec![format!("http://{}", addr)]);
        let ip = http.discover(IpVersion::Any).await.unwrap();
        assert_eq!(ip, "198.51.100.9".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn exhausted_endpoints_reduce_to_no_ip_discovered() {
        let addr = spawn_http_server("<html>not an ip</html>").await;

        let http = discoverer(vec![format!("http://{}", addr)]);
        let err = http.discover(IpVersion::V4).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::NoIpDiscovered));
    }
}
