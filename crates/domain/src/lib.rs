//! dnsrpc Domain Layer
pub mod command;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod handler_result;
pub mod ip_family;

pub use command::{Command, CommandFamily};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsAnswer, RecordData, RecordType, ResourceRecord, ResponseOutcome};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use handler_result::HandlerResult;
pub use ip_family::IpFamily;
