//! Shared helpers for share lifecycle integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use safeshare_sharing::error::RepositoryResult;
use safeshare_sharing::{
    InMemoryIdentityProvider, InMemoryShareRepository, NewShareRecord, RepositoryError,
    ShareField, ShareId, ShareManager, ShareRecord, ShareRepository, UserIdentity,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Manager over fresh in-memory collaborators, plus handles to both.
pub fn in_memory_manager() -> (ShareManager, InMemoryShareRepository, InMemoryIdentityProvider) {
    let repo = InMemoryShareRepository::new();
    let identities = InMemoryIdentityProvider::new();
    let manager = ShareManager::new(Arc::new(repo.clone()), Arc::new(identities.clone()));
    (manager, repo, identities)
}

pub fn alice() -> UserIdentity {
    UserIdentity {
        id: "uid-alice".into(),
        display_name: "Alice".into(),
        email: "alice@example.com".into(),
    }
}

pub fn bob() -> UserIdentity {
    UserIdentity {
        id: "uid-bob".into(),
        display_name: "Bob".into(),
        email: "a@b.com".into(),
    }
}

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Repository that fails every call with a transient fault while `down` is set.
#[derive(Default)]
pub struct FlakyRepository {
    inner: InMemoryShareRepository,
    down: AtomicBool,
}

impl FlakyRepository {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(RepositoryError::Unavailable("connection reset".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ShareRepository for FlakyRepository {
    async fn insert(&self, record: NewShareRecord) -> RepositoryResult<ShareId> {
        self.check()?;
        self.inner.insert(record).await
    }

    async fn query_by_field(
        &self,
        field: ShareField,
        value: &str,
        exclude_deleted: bool,
    ) -> RepositoryResult<Vec<ShareRecord>> {
        self.check()?;
        self.inner.query_by_field(field, value, exclude_deleted).await
    }

    async fn get(&self, id: &ShareId) -> RepositoryResult<Option<ShareRecord>> {
        self.check()?;
        self.inner.get(id).await
    }

    async fn mark_deleted(&self, id: &ShareId) -> RepositoryResult<()> {
        self.check()?;
        self.inner.mark_deleted(id).await
    }
}

/// Repository that ignores `exclude_deleted` and returns oldest first.
#[derive(Default)]
pub struct LaxRepository {
    pub inner: InMemoryShareRepository,
}

#[async_trait]
impl ShareRepository for LaxRepository {
    async fn insert(&self, record: NewShareRecord) -> RepositoryResult<ShareId> {
        self.inner.insert(record).await
    }

    async fn query_by_field(
        &self,
        field: ShareField,
        value: &str,
        _exclude_deleted: bool,
    ) -> RepositoryResult<Vec<ShareRecord>> {
        let mut records = self.inner.query_by_field(field, value, false).await?;
        records.reverse();
        Ok(records)
    }

    async fn get(&self, id: &ShareId) -> RepositoryResult<Option<ShareRecord>> {
        self.inner.get(id).await
    }

    async fn mark_deleted(&self, id: &ShareId) -> RepositoryResult<()> {
        self.inner.mark_deleted(id).await
    }
}

/// Repository whose reads return every payload with one ciphertext bit flipped.
#[derive(Default)]
pub struct TamperingRepository {
    pub inner: InMemoryShareRepository,
}

#[async_trait]
impl ShareRepository for TamperingRepository {
    async fn insert(&self, record: NewShareRecord) -> RepositoryResult<ShareId> {
        self.inner.insert(record).await
    }

    async fn query_by_field(
        &self,
        field: ShareField,
        value: &str,
        exclude_deleted: bool,
    ) -> RepositoryResult<Vec<ShareRecord>> {
        self.inner.query_by_field(field, value, exclude_deleted).await
    }

    async fn get(&self, id: &ShareId) -> RepositoryResult<Option<ShareRecord>> {
        Ok(self.inner.get(id).await?.map(|mut record| {
            record.payload.ciphertext[0] ^= 0x01;
            record
        }))
    }

    async fn mark_deleted(&self, id: &ShareId) -> RepositoryResult<()> {
        self.inner.mark_deleted(id).await
    }
}
