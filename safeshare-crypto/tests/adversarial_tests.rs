//! Adversarial tests for ChaCha20-Poly1305 share encryption.
//!
//! Wrong-key decryption, ciphertext tampering, nonce corruption and
//! truncation must all fail the same way, with no hint of which part was
//! wrong.

use safeshare_crypto::{
    decrypt, decrypt_string, encrypt, encrypt_string, export_key, generate_key, import_key,
    CryptoError, EncryptedPayload, EncryptionKey, KEY_SIZE, NONCE_SIZE,
};

fn assert_auth_failure(result: Result<Vec<u8>, CryptoError>) {
    match result {
        Err(CryptoError::Authentication) => {}
        other => panic!("expected CryptoError::Authentication, got: {other:?}"),
    }
}

// ── Wrong Key ──

#[test]
fn decrypt_with_wrong_key_returns_authentication_error() {
    let key_a = generate_key();
    let key_b = generate_key();

    let encrypted = encrypt(&key_a, b"share content that must not leak").unwrap();
    assert_auth_failure(decrypt(&key_b, &encrypted));
}

#[test]
fn unrelated_but_well_formed_exported_key_fails() {
    let key = generate_key();
    let encrypted = encrypt_string(&key, "for the right recipient only").unwrap();

    let unrelated = export_key(&generate_key());
    let imported = import_key(&unrelated).unwrap();
    assert!(matches!(
        decrypt_string(&imported, &encrypted),
        Err(CryptoError::Authentication)
    ));
}

#[test]
fn all_zero_key_cannot_open_real_payload() {
    let key = generate_key();
    let encrypted = encrypt(&key, b"not for zero keys").unwrap();
    let zero = EncryptionKey::from_bytes([0u8; KEY_SIZE]);
    assert_auth_failure(decrypt(&zero, &encrypted));
}

// ── Ciphertext Tampering ──

#[test]
fn every_byte_position_tampering_detected() {
    let key = generate_key();
    let encrypted = encrypt(&key, b"test data for position tampering").unwrap();

    for i in 0..encrypted.ciphertext.len() {
        let mut tampered = encrypted.clone();
        tampered.ciphertext[i] ^= 0xFF;
        assert_auth_failure(decrypt(&key, &tampered));
    }
}

#[test]
fn appended_bytes_detected() {
    let key = generate_key();
    let mut encrypted = encrypt(&key, b"original data").unwrap();
    encrypted.ciphertext.push(0x00);
    assert_auth_failure(decrypt(&key, &encrypted));
}

#[test]
fn swapped_ciphertexts_not_interchangeable() {
    let key = generate_key();
    let enc_a = encrypt(&key, b"message A").unwrap();
    let enc_b = encrypt(&key, b"message B").unwrap();

    let franken = EncryptedPayload {
        nonce: enc_a.nonce,
        ciphertext: enc_b.ciphertext.clone(),
    };
    assert_auth_failure(decrypt(&key, &franken));
}

// ── Nonce Tampering ──

#[test]
fn every_nonce_bit_flip_detected() {
    let key = generate_key();
    let encrypted = encrypt(&key, b"nonce-critical data").unwrap();

    for i in 0..NONCE_SIZE {
        let mut tampered = encrypted.clone();
        tampered.nonce[i] ^= 0x01;
        assert_auth_failure(decrypt(&key, &tampered));
    }
}

// ── Truncation ──

#[test]
fn truncated_ciphertext_fails() {
    let key = generate_key();
    let mut encrypted = encrypt(&key, b"data that will be truncated").unwrap();
    encrypted.ciphertext.truncate(5);
    assert_auth_failure(decrypt(&key, &encrypted));
}

#[test]
fn empty_ciphertext_fails() {
    let key = generate_key();
    let mut encrypted = encrypt(&key, b"will be emptied").unwrap();
    encrypted.ciphertext.clear();
    assert_auth_failure(decrypt(&key, &encrypted));
}

// ── Boundary Conditions ──

#[test]
fn encrypt_decrypt_empty_plaintext() {
    let key = generate_key();
    let encrypted = encrypt(&key, b"").unwrap();
    assert!(decrypt(&key, &encrypted).unwrap().is_empty());
}

#[test]
fn encrypt_decrypt_large_plaintext() {
    let key = generate_key();
    let large = vec![0xAB; 1024 * 1024];
    let encrypted = encrypt(&key, &large).unwrap();
    assert_eq!(decrypt(&key, &encrypted).unwrap(), large);
}

#[test]
fn encrypt_produces_fresh_nonce_each_time() {
    let key = generate_key();
    let plaintext = b"same plaintext encrypted twice";

    let enc_a = encrypt(&key, plaintext).unwrap();
    let enc_b = encrypt(&key, plaintext).unwrap();

    assert_ne!(enc_a.nonce, enc_b.nonce, "nonces should differ");
    assert_ne!(enc_a.ciphertext, enc_b.ciphertext, "ciphertexts should differ");

    assert_eq!(decrypt(&key, &enc_a).unwrap(), plaintext);
    assert_eq!(decrypt(&key, &enc_b).unwrap(), plaintext);
}

// ── Serialization ──

#[test]
fn encrypted_payload_json_roundtrip() {
    let key = generate_key();
    let encrypted = encrypt(&key, b"serialize me").unwrap();

    let json = serde_json::to_vec(&encrypted).unwrap();
    let deserialized: EncryptedPayload = serde_json::from_slice(&json).unwrap();

    assert_eq!(decrypt(&key, &deserialized).unwrap(), b"serialize me");
}

#[test]
fn invalid_base64_payload_is_authentication_failure() {
    let err = EncryptedPayload::from_base64("not-valid-base64!!!").unwrap_err();
    assert!(matches!(err, CryptoError::Authentication));
}
