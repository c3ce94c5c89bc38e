//! Per-command handlers.
//!
//! Handlers never fail past their own boundary: every failure is a
//! [`HandlerResult::Error`](dnsrpc_domain::HandlerResult::Error).
pub mod base64_codec;
pub mod cidr;
pub mod client_ip;
pub mod public_ip;
pub mod time;
