// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use bytecodec::{DecodeExt, EncodeExt};
use stun_codec::rfc5389::attributes::XorMappedAddress;
use stun_codec::rfc5389::methods::BINDING;
use stun_codec::rfc5389::Attribute;
use stun_codec::{Message, MessageClass, MessageDecoder, MessageEncoder, TransactionId};
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::debug;

// Project imports
use crate::settings::types::StunSettings;

// Current module imports
use super::constants::STUN_RECV_BUFFER;
use super::errors::{AttemptError, DiscoveryError};
use super::functions::{lookup_for_version, validate_version};
use super::traits::Discoverer;
use super::types::IpVersion;

/// Discovers the public IP by sending a STUN binding request and reading
/// the reflexive address out of the XOR-MAPPED-ADDRESS attribute.
pub struct StunDiscoverer {
    request_timeout: Duration,
    settings: StunSettings,
}

impl StunDiscoverer {
    pub fn new(request_timeout: Duration, settings: StunSettings) -> Self {
        Self {
            request_timeout,
            settings,
        }
    }

    /// Runs one binding exchange with `server`, forced to `version`.
    async fn try_server(&self, server: &str, version: IpVersion) -> Result<IpAddr, AttemptError> {
        let network = |error| AttemptError::Network {
            service: server.to_string(),
            error,
        };

        let remote = lookup_for_version(server, server, version, self.request_timeout).await?;

        let bind_addr = match version {
            IpVersion::V6 => "[::]:0",
            _ => "0.0.0.0:0",
        };
        let socket = UdpSocket::bind(bind_addr).await.map_err(network)?;
        socket.connect(remote).await.map_err(network)?;

        let transaction_id = TransactionId::new(rand::random());
        let request = Message::<Attribute>::new(MessageClass::Request, BINDING, transaction_id);
        let bytes = MessageEncoder::<Attribute>::default()
            .encode_into_bytes(request)
            .map_err(|error| AttemptError::Stun {
                service: server.to_string(),
                error,
            })?;

        socket.send(&bytes).await.map_err(network)?;

        let mut buf = vec![0u8; STUN_RECV_BUFFER];
        let read = timeout(self.request_timeout, socket.recv(&mut buf))
            .await
            .map_err(|_| AttemptError::Timeout {
                service: server.to_string(),
            })?
            .map_err(network)?;

        let response = MessageDecoder::<Attribute>::default()
            .decode_from_bytes(&buf[..read])
            .map_err(|error| AttemptError::Stun {
                service: server.to_string(),
                error,
            })?
            .map_err(|broken| AttemptError::InvalidResponse {
                service: server.to_string(),
                response: format!("broken STUN message: {:?}", broken),
            })?;

        if response.transaction_id() != transaction_id {
            return Err(AttemptError::InvalidResponse {
                service: server.to_string(),
                response: "transaction id does not match the request".to_string(),
            });
        }

        let mapped = response.get_attribute::<XorMappedAddress>().ok_or_else(|| {
            AttemptError::InvalidResponse {
                service: server.to_string(),
                response: "missing XOR-MAPPED-ADDRESS attribute".to_string(),
            }
        })?;

        validate_version(server, mapped.address().ip(), version)
    }
}

#[async_trait]
impl Discoverer for StunDiscoverer {
    async fn discover(&self, version: IpVersion) -> Result<IpAddr, DiscoveryError> {
        for server in &self.settings.servers {
            // Try IPv6 first if version is Any or V6
            if matches!(version, IpVersion::Any | IpVersion::V6) {
                match self.try_server(server, IpVersion::V6).await {
                    Ok(ip) => return Ok(ip),
                    Err(err) => {
                        debug!("IPv6 STUN attempt failed for {}: {}", server, err);
                        if version == IpVersion::V6 {
                            continue;
                        }
                    }
                }
            }

            // Try IPv4 if version is Any or V4
            if matches!(version, IpVersion::Any | IpVersion::V4) {
                match self.try_server(server, IpVersion::V4).await {
                    Ok(ip) => return Ok(ip),
                    Err(err) => debug!("IPv4 STUN attempt failed for {}: {}", server, err),
                }
            }
        }

        debug!("all STUN servers failed to discover an IP");
        Err(DiscoveryError::NoIpDiscovered)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    /// Minimal binding responder: answers every request with a success
    /// response carrying `mapped` as the XOR-mapped address.
    async fn spawn_stun_server(bind: &str, mapped: SocketAddr) -> SocketAddr {
        let socket = UdpSocket::bind(bind).await.unwrap();
        let addr = socket.local_addr().unwrap();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                let Ok((read, peer)) = socket.recv_from(&mut buf).await else {
                    break;
                };
                let request = MessageDecoder::<Attribute>::default()
                    .decode_from_bytes(&buf[..read])
                    .unwrap()
                    .unwrap();

                let mut response = Message::<Attribute>::new(
                    MessageClass::SuccessResponse,
                    BINDING,
                    request.transaction_id(),
                );
                response.add_attribute(Attribute::XorMappedAddress(XorMappedAddress::new(mapped)));
                let bytes = MessageEncoder::<Attribute>::default()
                    .encode_into_bytes(response)
                    .unwrap();
                let _ = socket.send_to(&bytes, peer).await;
            }
        });

        addr
    }

    fn discoverer(servers: Vec<String>) -> StunDiscoverer {
        StunDiscoverer::new(Duration::from_secs(1), StunSettings { servers })
    }

    #[tokio::test]
    async fn unreachable_server_falls_back_to_the_next_one() {
        let mapped: SocketAddr = "203.0.113.7:3478".parse().unwrap();
        let addr = spawn_stun_server("127.0.0.1:0", mapped).await;

        let stun = discoverer(vec!["127.0.0.1:9".to_string(), addr.to_string()]);
        let ip = stun.discover(IpVersion::V4).await.unwrap();
        assert_eq!(ip, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn any_falls_through_to_ipv4_on_the_same_server() {
        // 127.0.0.1 has no IPv6 address, so the IPv6 attempt fails and the
        // IPv4 attempt for the same server must produce the result.
        let mapped: SocketAddr = "203.0.113.7:3478".parse().unwrap();
        let addr = spawn_stun_server("127.0.0.1:0", mapped).await;

        let stun = discoverer(vec![addr.to_string()]);
        let ip = stun.discover(IpVersion::Any).await.unwrap();
        assert_eq!(ip, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn v6_only_never_accepts_an_ipv4_mapped_address() {
        // Well-formed response over IPv6 whose mapped address is IPv4.
        let mapped: SocketAddr = "203.0.113.7:3478".parse().unwrap();
        let addr = spawn_stun_server("[::1]:0", mapped).await;

        let stun = discoverer(vec![addr.to_string()]);
        let err = stun.discover(IpVersion::V6).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::NoIpDiscovered));
    }

    #[tokio::test]
    async fn exhausted_servers_reduce_to_no_ip_discovered() {
        let stun = discoverer(vec!["127.0.0.1:9".to_string()]);
        let err = stun.discover(IpVersion::V4).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::NoIpDiscovered));
    }

    #[tokio::test]
    async fn an_outer_deadline_cuts_the_fallback_chain_short() {
        // A server that never answers keeps each attempt waiting on its own
        // timeout; an outer deadline must abort the chain promptly instead
        // of letting every remaining candidate run.
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = silent.local_addr().unwrap();
        let stun = discoverer(vec![addr.to_string(), addr.to_string()]);

        let started = std::time::Instant::now();
        let result = tokio::time::timeout(
            Duration::from_millis(100),
            stun.discover(IpVersion::V4),
        )
        .await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_millis(900));
    }
}
