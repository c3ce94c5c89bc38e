use dnsrpc_domain::{
    Command, CommandFamily, DnsAnswer, HandlerResult, RecordData, RecordType, ResourceRecord,
};
use std::sync::Arc;
use tracing::debug;

/// Turns a handler result into resource records for the requested type.
pub struct ResponseSynthesizer {
    answer_ttl: u32,
}

impl ResponseSynthesizer {
    pub fn new(answer_ttl: u32) -> Self {
        Self { answer_ttl }
    }

    /// Record types each command family can answer.
    pub fn supports(family: CommandFamily, record_type: RecordType) -> bool {
        use RecordType::{A, AAAA, TXT};
        match family {
            CommandFamily::Cidr => record_type == TXT,
            CommandFamily::CidrMask => record_type == A,
            CommandFamily::Time => matches!(record_type, A | TXT),
            CommandFamily::PublicIp | CommandFamily::ClientIp => true,
            CommandFamily::Base64 => record_type == TXT,
            CommandFamily::Unknown => false,
        }
    }

    pub fn synthesize(
        &self,
        name: &Arc<str>,
        command: &Command,
        record_type: RecordType,
        result: HandlerResult,
    ) -> DnsAnswer {
        if command.is_unknown() {
            return DnsAnswer::nx_domain();
        }
        if !Self::supports(command.family(), record_type) {
            return DnsAnswer::no_data();
        }

        if let HandlerResult::Error(reason) = &result {
            debug!(
                domain = %name,
                command = command.family().as_str(),
                record_type = %record_type,
                reason = %reason,
                "Handler failed, answering NODATA"
            );
            return DnsAnswer::no_data();
        }

        match encode(result, record_type) {
            Some(data) => DnsAnswer::answered(vec![ResourceRecord::new(
                Arc::clone(name),
                self.answer_ttl,
                data,
            )]),
            None => DnsAnswer::no_data(),
        }
    }
}

fn encode(result: HandlerResult, record_type: RecordType) -> Option<RecordData> {
    match (result, record_type) {
        (HandlerResult::Text(text), RecordType::TXT) => Some(RecordData::TXT(text)),
        (HandlerResult::Count(count), RecordType::TXT) => Some(RecordData::TXT(count.to_string())),
        (HandlerResult::Ipv4(v4), RecordType::A) => Some(RecordData::A(v4)),
        (HandlerResult::Ipv4(v4), RecordType::TXT) => Some(RecordData::TXT(v4.to_string())),
        (HandlerResult::Ipv6(v6), RecordType::AAAA) => Some(RecordData::AAAA(v6)),
        (HandlerResult::Ipv6(v6), RecordType::TXT) => Some(RecordData::TXT(v6.to_string())),
        (HandlerResult::IpPair { v4, .. }, RecordType::A) => v4.map(RecordData::A),
        (HandlerResult::IpPair { v6, .. }, RecordType::AAAA) => v6.map(RecordData::AAAA),
        (HandlerResult::IpPair { v4, v6 }, RecordType::TXT) => {
            let parts: Vec<String> = v4
                .map(|v4| format!("IPv4: {}", v4))
                .into_iter()
                .chain(v6.map(|v6| format!("IPv6: {}", v6)))
                .collect();
            (!parts.is_empty()).then(|| RecordData::TXT(parts.join(", ")))
        }
        _ => None,
    }
}
