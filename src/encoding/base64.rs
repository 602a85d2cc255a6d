//! Base64 encoding and decoding
//!
//! Thin wrappers around the standard (padded) Base64 alphabet for text and
//! raw byte payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{CipherError, Result};

/// Encode a string as standard Base64 with padding.
///
/// # Example
///
/// ```
/// use cipherlab::encoding::base64::encode;
///
/// assert_eq!(encode("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
/// ```
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a standard Base64 string back to text.
///
/// Fails when the input is not valid Base64 or the decoded bytes are not
/// valid UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    let bytes = decode_bytes(encoded)?;
    String::from_utf8(bytes).map_err(|e| CipherError::DecodeError(e.to_string()))
}

/// Encode raw bytes as standard Base64 with padding.
pub fn encode_bytes(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a standard Base64 string to raw bytes.
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| CipherError::DecodeError(e.to_string()))
}
