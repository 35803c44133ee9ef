//! ChaCha20-Poly1305 authenticated encryption for share payloads.

use crate::codec;
use crate::error::{CryptoError, CryptoResult};
use crate::key::EncryptionKey;
use base64::{engine::general_purpose::STANDARD, Engine};
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Nonce size in bytes (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// An encrypted payload: the nonce plus ciphertext-with-tag.
///
/// Meaningless without the matching key. `ciphertext.len()` is always
/// the plaintext length plus [`TAG_SIZE`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
}

impl EncryptedPayload {
    /// Encodes as `base64(nonce || ciphertext)`.
    pub fn to_base64(&self) -> String {
        let mut bytes = Vec::with_capacity(NONCE_SIZE + self.ciphertext.len());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        STANDARD.encode(bytes)
    }

    /// Decodes the form produced by [`EncryptedPayload::to_base64`].
    ///
    /// Malformed input fails the same way a tampered payload does.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|_| CryptoError::Authentication)?;

        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::Authentication);
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..NONCE_SIZE]);
        Ok(Self {
            nonce,
            ciphertext: bytes[NONCE_SIZE..].to_vec(),
        })
    }
}

/// Encrypts `plaintext` under `key` with a fresh random nonce.
pub fn encrypt(key: &EncryptionKey, plaintext: &[u8]) -> CryptoResult<EncryptedPayload> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));

    let mut nonce = [0u8; NONCE_SIZE];
    rand::rng().fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| CryptoError::Encryption(format!("AEAD seal failed: {e}")))?;

    Ok(EncryptedPayload { nonce, ciphertext })
}

/// Decrypts and authenticates a payload.
///
/// Every failure maps to [`CryptoError::Authentication`]; the AEAD tag
/// check is constant-time.
pub fn decrypt(key: &EncryptionKey, payload: &EncryptedPayload) -> CryptoResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    cipher
        .decrypt(Nonce::from_slice(&payload.nonce), payload.ciphertext.as_ref())
        .map_err(|_| CryptoError::Authentication)
}

/// Encrypts a UTF-8 string.
pub fn encrypt_string(key: &EncryptionKey, text: &str) -> CryptoResult<EncryptedPayload> {
    encrypt(key, &codec::encode_text(text))
}

/// Decrypts a payload produced by [`encrypt_string`].
pub fn decrypt_string(key: &EncryptionKey, payload: &EncryptedPayload) -> CryptoResult<String> {
    codec::decode_text(decrypt(key, payload)?)
}
