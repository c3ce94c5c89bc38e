use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::public_ip::PublicIpConfig;
use super::server::ServerConfig;

/// Main configuration structure for dnsrpc
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer synthesis configuration
    #[serde(default)]
    pub dns: DnsConfig,

    /// Public-IP providers and cache
    #[serde(default)]
    pub public_ip: PublicIpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsrpc.toml in current directory
    /// 3. /etc/dnsrpc/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dnsrpc.toml").exists() {
            Self::from_file("dnsrpc.toml")?
        } else if std::path::Path::new("/etc/dnsrpc/config.toml").exists() {
            Self::from_file("/etc/dnsrpc/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.public_ip.cache_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "public_ip.cache_ttl_secs must be greater than 0".to_string(),
            ));
        }

        if self.public_ip.provider_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "public_ip.provider_timeout_secs must be greater than 0".to_string(),
            ));
        }

        let providers = self
            .public_ip
            .ipv4_providers
            .iter()
            .chain(self.public_ip.ipv6_providers.iter());
        for url in providers {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "Provider '{}' must be an http:// or https:// URL",
                    url
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
