//! Identity collaborator contract.

use crate::error::IdentityResult;
use crate::types::UserProfile;
use async_trait::async_trait;

/// Profile lookup and registration, backed by an external identity issuer.
///
/// Used only to attribute shares to a sender. Nothing returned here is
/// ever used as key material.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn get_profile(&self, id: &str) -> IdentityResult<Option<UserProfile>>;

    /// Creates or replaces the profile for `id`.
    async fn create_profile(&self, id: &str, name: &str, email: &str) -> IdentityResult<()>;
}
