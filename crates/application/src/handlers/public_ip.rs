use crate::services::PublicIpCache;
use dnsrpc_domain::{HandlerResult, IpFamily, RecordType};

/// Looks up the host's public address for the requested record type.
///
/// `A` and `AAAA` consult only their own family; `TXT` fetches both
/// concurrently and reports whichever succeeded.
pub async fn handle_public_ip(cache: &PublicIpCache, record_type: RecordType) -> HandlerResult {
    match record_type {
        RecordType::A => cache.get_public_ip(IpFamily::V4).await,
        RecordType::AAAA => cache.get_public_ip(IpFamily::V6).await,
        RecordType::TXT => {
            let (v4, v6) = tokio::join!(
                cache.get_public_ip(IpFamily::V4),
                cache.get_public_ip(IpFamily::V6)
            );
            combine(v4, v6)
        }
    }
}

fn combine(v4: HandlerResult, v6: HandlerResult) -> HandlerResult {
    let v4 = match v4 {
        HandlerResult::Ipv4(addr) => Some(addr),
        _ => None,
    };
    let v6 = match v6 {
        HandlerResult::Ipv6(addr) => Some(addr),
        _ => None,
    };

    if v4.is_none() && v6.is_none() {
        return HandlerResult::error("no public address available");
    }
    HandlerResult::IpPair { v4, v6 }
}
