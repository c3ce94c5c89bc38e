use dnsrpc_domain::{HandlerResult, RecordType};
use std::net::IpAddr;

/// Echoes the caller's source address in the encoding the record type asks for.
pub fn handle_client_ip(client_ip: IpAddr, record_type: RecordType) -> HandlerResult {
    let client_ip = client_ip.to_canonical();
    match (record_type, client_ip) {
        (RecordType::TXT, addr) => HandlerResult::Text(addr.to_string()),
        (RecordType::A, IpAddr::V4(v4)) => HandlerResult::Ipv4(v4),
        (RecordType::AAAA, IpAddr::V6(v6)) => HandlerResult::Ipv6(v6),
        (rt, addr) => HandlerResult::error(format!("client {} has no {} address", addr, rt)),
    }
}
