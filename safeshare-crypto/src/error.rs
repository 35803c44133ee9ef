//! Error types for the encryption engine and codec.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur during key handling, encryption or decoding.
///
/// `Authentication` is intentionally a unit variant: callers must not be
/// able to tell a wrong key from a corrupted payload.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed (wrong key or tampered data)")]
    Authentication,

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid key encoding")]
    InvalidKeyEncoding,

    #[error("encoding error: {0}")]
    Encoding(String),
}
