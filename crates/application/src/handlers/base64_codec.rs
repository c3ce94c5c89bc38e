use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use dnsrpc_domain::HandlerResult;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

pub fn encode(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// Decodes standard or URL-safe base64, padded or not. Dots are label
/// separators, not payload, and are dropped before decoding.
pub fn decode(input: &str) -> Result<Vec<u8>, String> {
    let compact: String = input.chars().filter(|c| *c != '.').collect();
    if compact.is_empty() {
        return Err("empty base64 payload".to_string());
    }

    let engine = if compact.contains(['-', '_']) {
        &URL_SAFE_LENIENT
    } else {
        &STANDARD_LENIENT
    };
    engine.decode(compact.as_bytes()).map_err(|e| e.to_string())
}

pub fn handle_encode(text: &str) -> HandlerResult {
    HandlerResult::Text(encode(text.as_bytes()))
}

pub fn handle_decode(data: &str) -> HandlerResult {
    match decode(data) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => HandlerResult::Text(text),
            Err(_) => HandlerResult::error("decoded payload is not valid UTF-8"),
        },
        Err(reason) => HandlerResult::error(format!("invalid base64: {}", reason)),
    }
}
