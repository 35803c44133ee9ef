//! Share lifecycle error types.

use crate::types::ShareId;
use safeshare_crypto::CryptoError;
use thiserror::Error;

/// Result type for share operations.
pub type ShareResult<T> = Result<T, ShareError>;

/// Result type for repository collaborators.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result type for identity collaborators.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Errors that can occur in share lifecycle operations.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Wrong key or tampered payload. Carries no detail on purpose.
    #[error("decryption failed (wrong key or tampered data)")]
    DecryptionAuthentication,

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("share not found: {0}")]
    NotFound(ShareId),

    #[error("unknown sender: {0}")]
    UnknownSender(String),

    #[error("content decoding failed: {0}")]
    Codec(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ShareError {
    /// Whether retrying the same call can succeed.
    ///
    /// Only collaborator faults are transient. A failed decryption will
    /// fail identically on every retry with the same key.
    pub fn is_retryable(&self) -> bool {
        match self {
            ShareError::Repository(e) => e.is_transient(),
            ShareError::Identity(e) => e.is_transient(),
            _ => false,
        }
    }
}

impl From<CryptoError> for ShareError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Authentication => ShareError::DecryptionAuthentication,
            CryptoError::Encryption(msg) => ShareError::Encryption(msg),
            // A key that cannot be imported is just another wrong key.
            CryptoError::InvalidKeyLength { .. } | CryptoError::InvalidKeyEncoding => {
                ShareError::DecryptionAuthentication
            }
            CryptoError::Encoding(msg) => ShareError::Codec(msg),
        }
    }
}

impl From<RepositoryError> for ShareError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ShareError::NotFound(id),
            other => ShareError::Repository(other),
        }
    }
}

/// Errors reported by a share repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Network or store fault; the write either fully happened or not at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("record not found: {0}")]
    NotFound(ShareId),

    #[error("write rejected: {0}")]
    Rejected(String),
}

impl RepositoryError {
    pub fn is_transient(&self) -> bool {
        matches!(self, RepositoryError::Unavailable(_))
    }
}

/// Errors reported by an identity collaborator.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity service unavailable: {0}")]
    Unavailable(String),

    #[error("profile rejected: {0}")]
    Rejected(String),
}

impl IdentityError {
    pub fn is_transient(&self) -> bool {
        matches!(self, IdentityError::Unavailable(_))
    }
}
