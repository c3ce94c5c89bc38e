use std::net::{Ipv4Addr, Ipv6Addr};

/// Typed output of a command handler, consumed by the response synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResult {
    Text(String),
    Count(u64),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    /// Both public addresses; at least one side is present.
    IpPair {
        v4: Option<Ipv4Addr>,
        v6: Option<Ipv6Addr>,
    },
    Error(String),
}

impl HandlerResult {
    pub fn error(reason: impl Into<String>) -> Self {
        HandlerResult::Error(reason.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, HandlerResult::Error(_))
    }
}
