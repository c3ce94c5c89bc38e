use chrono::{DateTime, Local, Timelike};
use dnsrpc_domain::HandlerResult;
use std::net::Ipv4Addr;

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn handle_time(now: DateTime<Local>) -> HandlerResult {
    HandlerResult::Text(now.format(TIME_FORMAT).to_string())
}

/// `127.0.0.<second-of-minute>`.
pub fn handle_time_ip(now: DateTime<Local>) -> HandlerResult {
    let second = now.second() as u8;
    HandlerResult::Ipv4(Ipv4Addr::new(127, 0, 0, second))
}
