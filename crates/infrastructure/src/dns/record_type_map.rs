//! Mapping from `hickory_proto::rr::RecordType` to `dnsrpc_domain::RecordType`.

use dnsrpc_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Returns `None` for types the responder does not answer.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            _ => None,
        }
    }
}
