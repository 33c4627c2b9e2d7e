// Standard library
use std::fmt;
use std::path::Path;
use std::time::Duration;

// 3rd party crates
use config::{Config, File};

// Current module imports
use super::constants::{
    default_dns_servers, default_http_endpoints, default_request_timeout, default_stun_servers,
};
use super::errors::SettingsError;
use super::types::{DnsServerEntry, DnsSettings, HttpSettings, Settings, StunSettings};

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: default_request_timeout(),
            stun: StunSettings::default(),
            dns: DnsSettings::default(),
            http: HttpSettings::default(),
        }
    }
}

impl Default for StunSettings {
    fn default() -> Self {
        Self {
            servers: default_stun_servers(),
        }
    }
}

impl Default for DnsSettings {
    fn default() -> Self {
        Self {
            servers: default_dns_servers(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            endpoints: default_http_endpoints(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Fields absent from the file fall
    /// back to the built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// The per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Rejects settings no discovery call could succeed with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.timeout == 0 {
            return Err(SettingsError::InvalidTimeout);
        }
        if self.stun.servers.is_empty() {
            return Err(SettingsError::NoStunServers);
        }
        if self.dns.servers.is_empty() {
            return Err(SettingsError::NoDnsServers);
        }
        if self.http.endpoints.is_empty() {
            return Err(SettingsError::NoHttpEndpoints);
        }
        for entry in &self.dns.servers {
            if entry.resolver.is_empty() || entry.domain.is_empty() {
                return Err(SettingsError::InvalidDnsServer {
                    resolver: entry.resolver.clone(),
                    domain: entry.domain.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for DnsServerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resolver, self.domain)
    }
}
