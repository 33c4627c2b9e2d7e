// Standard library
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

// 3rd party crates
use tokio::net::lookup_host;
use tokio::time::timeout;

// Current module imports
use super::errors::AttemptError;
use super::types::IpVersion;

/// Checks that a discovered address matches the family that was requested.
/// A mismatch fails the attempt even though the exchange itself succeeded.
pub(crate) fn validate_version(
    service: &str,
    ip: IpAddr,
    expected: IpVersion,
) -> Result<IpAddr, AttemptError> {
    let got = match ip {
        IpAddr::V4(_) => IpVersion::V4,
        IpAddr::V6(_) => IpVersion::V6,
    };

    if expected == IpVersion::Any || got == expected {
        Ok(ip)
    } else {
        Err(AttemptError::VersionMismatch {
            service: service.to_string(),
            expected,
            got,
        })
    }
}

/// Resolves `target` (host:port) to a socket address of the requested
/// family. There is no cross-family fallback here: a host with no address
/// of the requested family fails the attempt.
pub(crate) async fn lookup_for_version(
    service: &str,
    target: &str,
    version: IpVersion,
    request_timeout: Duration,
) -> Result<SocketAddr, AttemptError> {
    let mut addrs = timeout(request_timeout, lookup_host(target))
        .await
        .map_err(|_| AttemptError::Timeout {
            service: service.to_string(),
        })?
        .map_err(|error| AttemptError::Network {
            service: service.to_string(),
            error,
        })?;

    addrs
        .find(|addr| match version {
            IpVersion::V4 => addr.is_ipv4(),
            IpVersion::V6 => addr.is_ipv6(),
            IpVersion::Any => true,
        })
        .ok_or_else(|| AttemptError::NoFamilyAddress {
            service: service.to_string(),
            version,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_family_passes_through() {
        let v4: IpAddr = "203.0.113.7".parse().unwrap();
        let v6: IpAddr = "2001:db8::1".parse().unwrap();

        assert_eq!(validate_version("svc", v4, IpVersion::V4).unwrap(), v4);
        assert_eq!(validate_version("svc", v6, IpVersion::V6).unwrap(), v6);
        assert_eq!(validate_version("svc", v4, IpVersion::Any).unwrap(), v4);
        assert_eq!(validate_version("svc", v6, IpVersion::Any).unwrap(), v6);
    }

    #[test]
    fn mismatched_family_is_an_error() {
        let v4: IpAddr = "203.0.113.7".parse().unwrap();

        let err = validate_version("svc", v4, IpVersion::V6).unwrap_err();
        assert!(matches!(
            err,
            AttemptError::VersionMismatch {
                expected: IpVersion::V6,
                got: IpVersion::V4,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn lookup_filters_by_family() {
        let timeout = Duration::from_secs(1);

        let addr = lookup_for_version("svc", "127.0.0.1:80", IpVersion::V4, timeout)
            .await
            .unwrap();
        assert!(addr.is_ipv4());

        let err = lookup_for_version("svc", "127.0.0.1:80", IpVersion::V6, timeout)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AttemptError::NoFamilyAddress {
                version: IpVersion::V6,
                ..
            }
        ));
    }
}
