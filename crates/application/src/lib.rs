//! dnsrpc Application Layer
pub mod handlers;
pub mod ports;
pub mod services;
pub mod use_cases;
