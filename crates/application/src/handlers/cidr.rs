use dnsrpc_domain::command::MAX_PREFIX;
use dnsrpc_domain::HandlerResult;
use std::net::Ipv4Addr;

/// Usable host addresses in an IPv4 subnet of the given prefix length.
///
/// `/31` is a point-to-point link (RFC 3021) with two usable addresses and
/// `/32` is a single host. Returns `None` for prefixes above 32.
pub fn usable_ips(prefix: u8) -> Option<u64> {
    match prefix {
        32 => Some(1),
        31 => Some(2),
        p if p < 31 => Some((1u64 << (32 - p)) - 2),
        _ => None,
    }
}

pub fn subnet_mask(prefix: u8) -> Option<Ipv4Addr> {
    if prefix > MAX_PREFIX {
        return None;
    }
    let bits = u32::MAX.checked_shl(32 - prefix as u32).unwrap_or(0);
    Some(Ipv4Addr::from(bits))
}

/// Inverse of [`subnet_mask`]; `None` when the mask bits are not contiguous.
pub fn prefix_len(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if bits.checked_shl(ones).unwrap_or(0) != 0 {
        return None;
    }
    Some(ones as u8)
}

pub fn handle_count(prefix: u8) -> HandlerResult {
    match usable_ips(prefix) {
        Some(count) => HandlerResult::Count(count),
        None => HandlerResult::error(format!("prefix /{} out of range", prefix)),
    }
}

pub fn handle_mask(prefix: u8) -> HandlerResult {
    match subnet_mask(prefix) {
        Some(mask) => HandlerResult::Ipv4(mask),
        None => HandlerResult::error(format!("prefix /{} out of range", prefix)),
    }
}
