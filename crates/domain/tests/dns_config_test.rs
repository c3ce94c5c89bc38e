use dnsrpc_domain::config::public_ip::PublicIpConfig;
use dnsrpc_domain::{Config, ConfigError, IpFamily};
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 20000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.tcp_timeout_secs, 10);
    assert_eq!(config.dns.answer_ttl, 0);
    assert_eq!(config.public_ip.cache_ttl(), Duration::from_secs(300));
    assert_eq!(config.public_ip.provider_timeout(), Duration::from_secs(5));
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_provider_order() {
    let config = PublicIpConfig::default();

    assert_eq!(
        config.providers(IpFamily::V4),
        &[
            "https://ipv4.icanhazip.com",
            "https://api.ipify.org",
            "https://v4.ident.me",
            "https://ipecho.net/plain",
        ]
    );
    assert_eq!(
        config.providers(IpFamily::V6),
        &["https://ipv6.icanhazip.com", "https://v6.ident.me"]
    );
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [server]
        dns_port = 5353

        [public_ip]
        ipv6_providers = []
        "#,
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert!(config.public_ip.ipv6_providers.is_empty());
    assert_eq!(config.public_ip.ipv4_providers.len(), 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[server\ndns_port = 1");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validation_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validation_rejects_zero_cache_ttl() {
    let mut config = Config::default();
    config.public_ip.cache_ttl_secs = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validation_rejects_non_http_provider() {
    let mut config = Config::default();
    config.public_ip.ipv4_providers = vec!["ftp://example.com".to_string()];
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_listen_address_brackets_ipv6() {
    let mut config = Config::default();
    assert_eq!(config.server.listen_address(), "127.0.0.1:20000");

    config.server.bind_address = "::".to_string();
    assert_eq!(config.server.listen_address(), "[::]:20000");
}
