use async_trait::async_trait;
use dnsrpc_application::ports::PublicIpProvider;
use dnsrpc_domain::{DomainError, IpFamily};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("dnsrpc/", env!("CARGO_PKG_VERSION"));
const MAX_BODY_PREVIEW: usize = 64;

/// Public-IP lookup service answering `GET <url>` with the address as plain text.
pub struct HttpIpProvider {
    url: String,
    client: reqwest::Client,
}

impl HttpIpProvider {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// One provider per URL, in configuration order, sharing `client`.
    pub fn from_urls(urls: &[String], client: &reqwest::Client) -> Vec<Arc<dyn PublicIpProvider>> {
        urls.iter()
            .map(|url| Arc::new(Self::new(url.as_str(), client.clone())) as Arc<dyn PublicIpProvider>)
            .collect()
    }

    pub fn build_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
        reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("HTTP client: {}", e)))
    }

    fn request_failed(&self, reason: impl Into<String>) -> DomainError {
        DomainError::ProviderRequestFailed {
            provider: self.url.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl PublicIpProvider for HttpIpProvider {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_public_ip(&self, family: IpFamily) -> Result<IpAddr, DomainError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::ProviderTimeout {
                    provider: self.url.clone(),
                }
            } else {
                self.request_failed(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(self.request_failed(format!("HTTP {}", response.status().as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.request_failed(format!("read error: {}", e)))?;

        let addr = parse_ip_response(&body, family)?;
        debug!(provider = %self.url, family = %family, ip = %addr, "Public IP fetched");
        Ok(addr)
    }
}

/// Parses a provider body: a single address of `family`, surrounding
/// whitespace ignored.
pub fn parse_ip_response(body: &str, family: IpFamily) -> Result<IpAddr, DomainError> {
    family.parse_address(body).ok_or_else(|| {
        let preview: String = body.trim().chars().take(MAX_BODY_PREVIEW).collect();
        DomainError::InvalidIpAddress(format!("expected {} address, got '{}'", family, preview))
    })
}
