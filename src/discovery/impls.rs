// Standard library
use std::fmt;
use std::str::FromStr;

// Current module imports
use super::errors::DiscoveryError;
use super::types::{IpVersion, Method};

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::Any => write!(f, "any"),
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

impl FromStr for IpVersion {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(IpVersion::V4),
            "6" | "v6" | "ipv6" => Ok(IpVersion::V6),
            "any" => Ok(IpVersion::Any),
            other => Err(DiscoveryError::UnsupportedIpVersion(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Stun => write!(f, "stun"),
            Method::Dns => write!(f, "dns"),
            Method::Http => write!(f, "http"),
        }
    }
}

impl FromStr for Method {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stun" => Ok(Method::Stun),
            "dns" => Ok(Method::Dns),
            "http" => Ok(Method::Http),
            other => Err(DiscoveryError::UnsupportedMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_version_parses_the_cli_spellings() {
        assert_eq!("4".parse::<IpVersion>().unwrap(), IpVersion::V4);
        assert_eq!("v6".parse::<IpVersion>().unwrap(), IpVersion::V6);
        assert_eq!("IPv4".parse::<IpVersion>().unwrap(), IpVersion::V4);
        assert_eq!("any".parse::<IpVersion>().unwrap(), IpVersion::Any);
    }

    #[test]
    fn unknown_ip_version_is_unsupported() {
        assert!(matches!(
            "5".parse::<IpVersion>(),
            Err(DiscoveryError::UnsupportedIpVersion(value)) if value == "5"
        ));
    }

    #[test]
    fn method_parses_its_names() {
        assert_eq!("stun".parse::<Method>().unwrap(), Method::Stun);
        assert_eq!("DNS".parse::<Method>().unwrap(), Method::Dns);
        assert_eq!("http".parse::<Method>().unwrap(), Method::Http);
    }

    #[test]
    fn unknown_method_is_unsupported() {
        assert!(matches!(
            "icmp".parse::<Method>(),
            Err(DiscoveryError::UnsupportedMethod(value)) if value == "icmp"
        ));
    }
}
