// Project imports
use super::types::DnsServerEntry;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Standard DNS port used when a server entry does not name one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// STUN servers tried in order.
pub const DEFAULT_STUN_SERVERS: [&str; 3] = [
    "stun.l.google.com:19302",
    "stun1.l.google.com:19302",
    "global.stun.twilio.com:3478",
];

/// Resolver/domain pairs whose answer is the querying client's address.
pub const DEFAULT_DNS_SERVERS: [(&str, &str); 4] = [
    ("resolver1.opendns.com", "myip.opendns.com"),
    ("resolver2.opendns.com", "myip.opendns.com"),
    ("ns1.google.com", "o-o.myaddr.l.google.com"),
    ("ns1-1.akamaitech.net", "whoami.akamai.net"),
];

/// HTTPS endpoints that echo the caller's address in the response body.
pub const DEFAULT_HTTP_ENDPOINTS: [&str; 3] = [
    "https://api.ipify.org",
    "https://ifconfig.me",
    "https://icanhazip.com",
];

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Timeout for each individual network attempt, in seconds
timeout = 5

# STUN servers, tried in order
[stun]
servers = [
    "stun.l.google.com:19302",
    "stun1.l.google.com:19302",
    "global.stun.twilio.com:3478",
]

# Resolvers that answer the configured domain with the caller's address
[[dns.servers]]
resolver = "resolver1.opendns.com"
domain = "myip.opendns.com"

[[dns.servers]]
resolver = "resolver2.opendns.com"
domain = "myip.opendns.com"

[[dns.servers]]
resolver = "ns1.google.com"
domain = "o-o.myaddr.l.google.com"

[[dns.servers]]
resolver = "ns1-1.akamaitech.net"
domain = "whoami.akamai.net"

# Endpoints that echo the caller's address in the response body
[http]
endpoints = [
    "https://api.ipify.org",
    "https://ifconfig.me",
    "https://icanhazip.com",
]
"#;

pub fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

pub fn default_dns_port() -> u16 {
    DEFAULT_DNS_PORT
}

pub fn default_stun_servers() -> Vec<String> {
    DEFAULT_STUN_SERVERS.iter().map(|s| s.to_string()).collect()
}

pub fn default_dns_servers() -> Vec<DnsServerEntry> {
    DEFAULT_DNS_SERVERS
        .iter()
        .map(|(resolver, domain)| DnsServerEntry {
            resolver: (*resolver).to_string(),
            domain: (*domain).to_string(),
            port: DEFAULT_DNS_PORT,
        })
        .collect()
}

pub fn default_http_endpoints() -> Vec<String> {
    DEFAULT_HTTP_ENDPOINTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
