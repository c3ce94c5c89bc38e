use dnsrpc_application::ports::Clock;
use dnsrpc_application::services::PublicIpCache;
use dnsrpc_application::use_cases::HandleDnsQueryUseCase;
use dnsrpc_domain::{Config, IpFamily};
use dnsrpc_infrastructure::public_ip::HttpIpProvider;
use dnsrpc_infrastructure::system::SystemClock;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let public_ip_config = &config.public_ip;
        let client = HttpIpProvider::build_client(public_ip_config.provider_timeout())?;

        for family in [IpFamily::V4, IpFamily::V6] {
            let providers = public_ip_config.providers(family);
            if providers.is_empty() {
                warn!(family = %family, "No public IP providers configured");
            } else {
                info!(family = %family, providers = providers.len(), "Public IP providers configured");
            }
        }

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let public_ip = Arc::new(PublicIpCache::new(
            HttpIpProvider::from_urls(public_ip_config.providers(IpFamily::V4), &client),
            HttpIpProvider::from_urls(public_ip_config.providers(IpFamily::V6), &client),
            public_ip_config.cache_ttl(),
            public_ip_config.provider_timeout(),
            Arc::clone(&clock),
        ));

        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(
            public_ip,
            clock,
            config.dns.answer_ttl,
        ));

        Ok(Self { handler_use_case })
    }
}
