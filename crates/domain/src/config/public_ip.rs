use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ip_family::IpFamily;

/// Public-IP lookup services and the cache in front of them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicIpConfig {
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,

    /// Tried in order until one returns a valid IPv4 address.
    #[serde(default = "default_ipv4_providers")]
    pub ipv4_providers: Vec<String>,

    /// Tried in order until one returns a valid IPv6 address.
    #[serde(default = "default_ipv6_providers")]
    pub ipv6_providers: Vec<String>,
}

impl PublicIpConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn providers(&self, family: IpFamily) -> &[String] {
        match family {
            IpFamily::V4 => &self.ipv4_providers,
            IpFamily::V6 => &self.ipv6_providers,
        }
    }
}

impl Default for PublicIpConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            provider_timeout_secs: default_provider_timeout_secs(),
            ipv4_providers: default_ipv4_providers(),
            ipv6_providers: default_ipv6_providers(),
        }
    }
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_provider_timeout_secs() -> u64 {
    5
}

fn default_ipv4_providers() -> Vec<String> {
    vec![
        "https://ipv4.icanhazip.com".to_string(),
        "https://api.ipify.org".to_string(),
        "https://v4.ident.me".to_string(),
        "https://ipecho.net/plain".to_string(),
    ]
}

fn default_ipv6_providers() -> Vec<String> {
    vec![
        "https://ipv6.icanhazip.com".to_string(),
        "https://v6.ident.me".to_string(),
    ]
}
