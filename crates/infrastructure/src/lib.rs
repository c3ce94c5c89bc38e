//! dnsrpc Infrastructure Layer
pub mod dns;
pub mod public_ip;
pub mod system;
