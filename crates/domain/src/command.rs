//! Query-name grammar.
//!
//! The queried name is the command surface of the responder:
//!
//! ```text
//! <n>.cidr          usable host count for prefix n      (TXT)
//! <n>.mask.cidr     dotted-quad netmask for prefix n    (A)
//! time              local time / 127.0.0.<second>       (TXT, A)
//! ip                public address of this host         (A, AAAA, TXT)
//! myip              source address of the caller        (A, AAAA, TXT)
//! b64.<text...>     base64 encoding of text             (TXT)
//! d64.<data...>     base64 decoding of data             (TXT)
//! ```
//!
//! Keywords match case-insensitively. Argument labels keep their case and are
//! rejoined with `.` in their original order.

use crate::dns_record::RecordType;

const CIDR_LABEL: &str = "cidr";
const MASK_LABEL: &str = "mask";
const TIME_LABEL: &str = "time";
const PUBLIC_IP_LABEL: &str = "ip";
const CLIENT_IP_LABEL: &str = "myip";
const BASE64_ENCODE_LABEL: &str = "b64";
const BASE64_DECODE_LABEL: &str = "d64";

pub const MAX_PREFIX: u8 = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Cidr { prefix: u8 },
    CidrMask { prefix: u8 },
    Time,
    TimeIp,
    PublicIp,
    ClientIp,
    Base64Encode { text: String },
    Base64Decode { data: String },
    Unknown,
}

/// Groups commands by the row they occupy in the record-type compatibility matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandFamily {
    Cidr,
    CidrMask,
    Time,
    PublicIp,
    ClientIp,
    Base64,
    Unknown,
}

impl CommandFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandFamily::Cidr => "cidr",
            CommandFamily::CidrMask => "mask",
            CommandFamily::Time => "time",
            CommandFamily::PublicIp => "ip",
            CommandFamily::ClientIp => "myip",
            CommandFamily::Base64 => "base64",
            CommandFamily::Unknown => "unknown",
        }
    }
}

impl Command {
    /// Total parse: every label sequence maps to exactly one command.
    pub fn parse(labels: &[&str]) -> Self {
        if let Some(command) = parse_cidr(labels) {
            return command;
        }

        match labels {
            [single] if is_keyword(single, TIME_LABEL) => Command::Time,
            [single] if is_keyword(single, PUBLIC_IP_LABEL) => Command::PublicIp,
            [single] if is_keyword(single, CLIENT_IP_LABEL) => Command::ClientIp,
            [keyword, args @ ..] if !args.is_empty() && is_keyword(keyword, BASE64_ENCODE_LABEL) => {
                Command::Base64Encode {
                    text: args.join("."),
                }
            }
            [keyword, args @ ..] if !args.is_empty() && is_keyword(keyword, BASE64_DECODE_LABEL) => {
                Command::Base64Decode {
                    data: args.join("."),
                }
            }
            _ => Command::Unknown,
        }
    }

    /// Resolves record-type dependent intent: `time` asked as `A` is the fake-address path.
    pub fn for_record_type(self, record_type: RecordType) -> Self {
        match (self, record_type) {
            (Command::Time, RecordType::A) => Command::TimeIp,
            (command, _) => command,
        }
    }

    pub fn family(&self) -> CommandFamily {
        match self {
            Command::Cidr { .. } => CommandFamily::Cidr,
            Command::CidrMask { .. } => CommandFamily::CidrMask,
            Command::Time | Command::TimeIp => CommandFamily::Time,
            Command::PublicIp => CommandFamily::PublicIp,
            Command::ClientIp => CommandFamily::ClientIp,
            Command::Base64Encode { .. } | Command::Base64Decode { .. } => CommandFamily::Base64,
            Command::Unknown => CommandFamily::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Command::Unknown)
    }
}

fn parse_cidr(labels: &[&str]) -> Option<Command> {
    match labels {
        [prefix, cidr] if is_keyword(cidr, CIDR_LABEL) => {
            parse_prefix(prefix).map(|prefix| Command::Cidr { prefix })
        }
        [prefix, mask, cidr] if is_keyword(mask, MASK_LABEL) && is_keyword(cidr, CIDR_LABEL) => {
            parse_prefix(prefix).map(|prefix| Command::CidrMask { prefix })
        }
        _ => None,
    }
}

fn is_keyword(label: &str, keyword: &str) -> bool {
    label.eq_ignore_ascii_case(keyword)
}

fn parse_prefix(label: &str) -> Option<u8> {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    label
        .parse::<u8>()
        .ok()
        .filter(|prefix| *prefix <= MAX_PREFIX)
}
