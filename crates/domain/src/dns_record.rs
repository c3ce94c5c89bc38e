mod record;
mod record_type;

pub use record::{DnsAnswer, RecordData, ResourceRecord, ResponseOutcome};
pub use record_type::RecordType;
