pub mod http_provider;

pub use http_provider::{parse_ip_response, HttpIpProvider};
