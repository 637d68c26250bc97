use base64::engine::general_purpose::STANDARD;
use base64::engine::Engine as _;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeBase64Error;

impl fmt::Display for DecodeBase64Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode base64 string")
    }
}

impl std::error::Error for DecodeBase64Error {}

/// Encode bytes with the standard padded alphabet (`+`, `/`, `=`).
pub fn base64_encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard padded base64 string into raw bytes.
///
/// ASCII whitespace (including line breaks inserted by MIME style encoders) is skipped, the
/// same way the Android `Base64.DEFAULT` decoder treats it.
pub fn base64_decode_bytes(input: &str) -> Result<Vec<u8>, DecodeBase64Error> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|_err| DecodeBase64Error)
}
