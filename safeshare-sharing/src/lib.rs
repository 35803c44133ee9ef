//! Zero-knowledge share lifecycle for SafeShare.
//!
//! A sender's content is encrypted under a fresh per-share key before it
//! reaches the store, so the store operator never sees plaintext or key.
//!
//! - [`ShareManager`] orchestrates create, list, open and retire
//! - [`ShareRepository`] is the contract for the external record store
//! - [`IdentityProvider`] is the contract for the external profile store
//! - [`memory`] holds in-memory implementations of both
//!
//! # Plaintext metadata
//!
//! File names and media types are stored unencrypted next to the payload
//! so listings can show them without a key. They are visible to the store
//! operator; only the content itself is protected.

pub mod config;
pub mod error;
pub mod identity;
pub mod memory;
pub mod repository;
pub mod sharing;
pub mod types;
pub mod validation;

pub use config::ShareConfig;
pub use error::{IdentityError, RepositoryError, ShareError, ShareResult};
pub use identity::IdentityProvider;
pub use memory::{InMemoryIdentityProvider, InMemoryShareRepository};
pub use repository::ShareRepository;
pub use sharing::ShareManager;
pub use types::*;
