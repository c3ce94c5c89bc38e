use crate::ip_family::IpFamily;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Request to {provider} failed: {reason}")]
    ProviderRequestFailed { provider: String, reason: String },

    #[error("Timeout waiting for {provider}")]
    ProviderTimeout { provider: String },

    #[error("No public {0} address available")]
    UpstreamUnavailable(IpFamily),

    #[error("Internal error: {0}")]
    Internal(String),
}
