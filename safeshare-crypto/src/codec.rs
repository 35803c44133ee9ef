//! Content codec: text and binary content to engine bytes, and back.
//!
//! Binary content is shipped through the engine as base64 text so a file
//! and a note travel in the same payload shape. File metadata (name,
//! media type) never enters the payload.

use crate::error::{CryptoError, CryptoResult};
use base64::{engine::general_purpose::STANDARD, Engine};

/// UTF-8 encodes a string.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes back into a string.
pub fn decode_text(bytes: Vec<u8>) -> CryptoResult<String> {
    String::from_utf8(bytes).map_err(|e| {
        CryptoError::Encoding(format!(
            "payload is not valid UTF-8 (at byte {})",
            e.utf8_error().valid_up_to()
        ))
    })
}

/// Binary content is already bytes; passed through unchanged.
pub fn encode_binary(blob: Vec<u8>) -> Vec<u8> {
    blob
}

/// Maps arbitrary bytes to printable text (standard base64).
pub fn transport_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Inverse of [`transport_encode`].
pub fn transport_decode(text: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CryptoError::Encoding(format!("invalid transport encoding: {e}")))
}
