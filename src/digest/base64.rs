//! Base64 text encoding
//!
//! Standard alphabet with `=` padding, so any standard decoder can
//! round-trip the output back to the original UTF-8 bytes.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// Encode the UTF-8 bytes of `text`
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a standard Base64 string back to bytes
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}
