//! Encryption engine and content codec for SafeShare.
//!
//! Provides per-share encryption using:
//! - A fresh random 256-bit key for every share
//! - ChaCha20-Poly1305 for authenticated encryption
//! - Base64 for the exported key form and for binary transport
//!
//! # Architecture
//!
//! Every share gets its own key. The key is generated, used once to
//! encrypt the share payload, exported to text and handed back to the
//! caller. Nothing in this crate stores it.
//!
//! Decryption failures are deliberately uniform: a wrong key, a flipped
//! nonce bit and a truncated ciphertext all surface as
//! [`CryptoError::Authentication`] with the same message.

mod cipher;
pub mod codec;
mod error;
mod key;

pub use cipher::{
    decrypt, decrypt_string, encrypt, encrypt_string, EncryptedPayload, NONCE_SIZE, TAG_SIZE,
};
pub use codec::{
    decode_text, encode_binary, encode_text, transport_decode, transport_encode,
};
pub use error::{CryptoError, CryptoResult};
pub use key::{export_key, generate_key, import_key, EncryptionKey, KEY_SIZE};
