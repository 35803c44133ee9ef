//! In-memory collaborators (for tests and local demos).

use crate::error::{IdentityResult, RepositoryError, RepositoryResult};
use crate::identity::IdentityProvider;
use crate::repository::ShareRepository;
use crate::types::{sort_newest_first, NewShareRecord, ShareField, ShareId, ShareRecord, UserProfile};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory share repository.
///
/// Ids are UUIDv7 strings, so they sort by creation time. Clones share the
/// same underlying map. Not persistent; data is lost on drop.
#[derive(Clone, Default)]
pub struct InMemoryShareRepository {
    records: Arc<RwLock<HashMap<ShareId, ShareRecord>>>,
}

impl InMemoryShareRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, deleted ones included.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ShareRepository for InMemoryShareRepository {
    async fn insert(&self, record: NewShareRecord) -> RepositoryResult<ShareId> {
        let id = ShareId::new(Uuid::now_v7().to_string());
        let record = record.into_record(id.clone());
        self.records.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn query_by_field(
        &self,
        field: ShareField,
        value: &str,
        exclude_deleted: bool,
    ) -> RepositoryResult<Vec<ShareRecord>> {
        let mut matches: Vec<ShareRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| field.value_of(r) == value)
            .filter(|r| !(exclude_deleted && r.deleted))
            .cloned()
            .collect();
        sort_newest_first(&mut matches);
        Ok(matches)
    }

    async fn get(&self, id: &ShareId) -> RepositoryResult<Option<ShareRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn mark_deleted(&self, id: &ShareId) -> RepositoryResult<()> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        record.deleted = true;
        Ok(())
    }
}

/// In-memory identity provider keyed by user id.
#[derive(Clone, Default)]
pub struct InMemoryIdentityProvider {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn get_profile(&self, id: &str) -> IdentityResult<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(id).cloned())
    }

    async fn create_profile(&self, id: &str, name: &str, email: &str) -> IdentityResult<()> {
        let profile = UserProfile {
            id: id.to_string(),
            display_name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.profiles.write().await.insert(id.to_string(), profile);
        Ok(())
    }
}
