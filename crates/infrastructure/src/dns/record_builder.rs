use dnsrpc_domain::{RecordData, ResourceRecord};
use hickory_proto::rr::rdata::{A, AAAA, TXT};
use hickory_proto::rr::{Name, RData, Record};

/// Longest character-string a TXT record can carry.
pub const MAX_TXT_CHUNK: usize = 255;

pub struct RecordBuilder;

impl RecordBuilder {
    /// Builds the wire record. The owner name is taken from the question so
    /// its bytes are echoed exactly as received.
    pub fn build(owner: &Name, record: &ResourceRecord) -> Record {
        let rdata = match &record.data {
            RecordData::A(v4) => RData::A(A(*v4)),
            RecordData::AAAA(v6) => RData::AAAA(AAAA(*v6)),
            RecordData::TXT(text) => RData::TXT(TXT::new(split_txt(text))),
        };
        Record::from_rdata(owner.clone(), record.ttl, rdata)
    }

    pub fn build_all(owner: &Name, records: &[ResourceRecord]) -> Vec<Record> {
        records
            .iter()
            .map(|record| Self::build(owner, record))
            .collect()
    }
}

/// Splits text into character-strings of at most [`MAX_TXT_CHUNK`] bytes
/// without cutting a UTF-8 sequence.
pub fn split_txt(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut chunks = Vec::with_capacity(text.len() / MAX_TXT_CHUNK + 1);
    let mut rest = text;
    while !rest.is_empty() {
        let mut end = rest.len().min(MAX_TXT_CHUNK);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk.to_string());
        rest = tail;
    }
    chunks
}
