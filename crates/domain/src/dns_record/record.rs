use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    TXT(String),
}

/// A synthesized answer entry. Never cached or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    NoError,
    /// The name exists but has no record of the requested type.
    NoData,
    NxDomain,
}

impl ResponseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseOutcome::NoError => "NOERROR",
            ResponseOutcome::NoData => "NODATA",
            ResponseOutcome::NxDomain => "NXDOMAIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub outcome: ResponseOutcome,
    pub records: Vec<ResourceRecord>,
}

impl DnsAnswer {
    /// An empty record list degrades to NODATA so `NoError` always carries answers.
    pub fn answered(records: Vec<ResourceRecord>) -> Self {
        if records.is_empty() {
            return Self::no_data();
        }
        Self {
            outcome: ResponseOutcome::NoError,
            records,
        }
    }

    pub fn no_data() -> Self {
        Self {
            outcome: ResponseOutcome::NoData,
            records: Vec::new(),
        }
    }

    pub fn nx_domain() -> Self {
        Self {
            outcome: ResponseOutcome::NxDomain,
            records: Vec::new(),
        }
    }
}
