//! Per-share key generation and the exported key form.

use crate::error::{CryptoError, CryptoResult};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::RngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a share key in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// A 256-bit symmetric key for one share.
///
/// Zeroized on drop. The `Debug` impl never prints key material.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey {
    bytes: [u8; KEY_SIZE],
}

impl EncryptionKey {
    /// Wraps raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Generates a fresh key from the thread-local CSPRNG.
pub fn generate_key() -> EncryptionKey {
    let mut bytes = [0u8; KEY_SIZE];
    rand::rng().fill_bytes(&mut bytes);
    EncryptionKey { bytes }
}

/// Exports a key as standard base64.
///
/// This is the only form in which a key ever leaves the engine.
pub fn export_key(key: &EncryptionKey) -> String {
    STANDARD.encode(key.bytes)
}

/// Imports a key previously produced by [`export_key`].
///
/// Surrounding whitespace is ignored since keys are usually pasted by hand.
/// The input is never echoed back in the error.
pub fn import_key(exported: &str) -> CryptoResult<EncryptionKey> {
    let mut decoded = STANDARD
        .decode(exported.trim())
        .map_err(|_| CryptoError::InvalidKeyEncoding)?;

    if decoded.len() != KEY_SIZE {
        let actual = decoded.len();
        decoded.zeroize();
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual,
        });
    }

    let mut bytes = [0u8; KEY_SIZE];
    bytes.copy_from_slice(&decoded);
    decoded.zeroize();
    Ok(EncryptionKey { bytes })
}
