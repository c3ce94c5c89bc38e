use dnsrpc_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

const QUERY_FORMS: &[(&str, &str)] = &[
    ("24.cidr", "TXT"),
    ("24.mask.cidr", "A"),
    ("time", "TXT"),
    ("time", "A"),
    ("ip", "A"),
    ("ip", "AAAA"),
    ("ip", "TXT"),
    ("myip", "A"),
    ("myip", "AAAA"),
    ("myip", "TXT"),
    ("b64.hello", "TXT"),
    ("d64.aGVsbG8", "TXT"),
];

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn log_banner(config: &Config) {
    let server = &config.server;
    info!("Supported queries:");
    for (name, record_type) in QUERY_FORMS {
        info!(
            "  dig @{} -p {} {} {} +short",
            server.bind_address, server.dns_port, name, record_type
        );
    }
}
