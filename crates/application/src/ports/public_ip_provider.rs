use async_trait::async_trait;
use dnsrpc_domain::{DomainError, IpFamily};
use std::net::IpAddr;

/// A third-party service that reports the address this host is seen from.
#[async_trait]
pub trait PublicIpProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_public_ip(&self, family: IpFamily) -> Result<IpAddr, DomainError>;
}
