//! Share repository contract.
//!
//! Any persistent store can back the share manager as long as it provides
//! atomic inserts, field queries and soft deletion. The manager only ever
//! sees typed [`ShareRecord`]s, never the store's raw representation.

use crate::error::RepositoryResult;
use crate::types::{NewShareRecord, ShareField, ShareId, ShareRecord};
use async_trait::async_trait;

/// Persistence for encrypted share records.
///
/// Implementations must give read-your-writes: a record inserted by a
/// caller is visible to that caller's next query. Eventual consistency
/// across callers is acceptable.
#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Stores a new record and returns its assigned id.
    ///
    /// Atomic: either the whole record (payload included) becomes visible
    /// or none of it does.
    async fn insert(&self, record: NewShareRecord) -> RepositoryResult<ShareId>;

    /// Returns records whose `field` equals `value`, newest first, ties by
    /// id descending. Soft-deleted records are skipped when
    /// `exclude_deleted` is set.
    async fn query_by_field(
        &self,
        field: ShareField,
        value: &str,
        exclude_deleted: bool,
    ) -> RepositoryResult<Vec<ShareRecord>>;

    /// Fetches one record by id, deleted or not.
    async fn get(&self, id: &ShareId) -> RepositoryResult<Option<ShareRecord>>;

    /// Flips `deleted` to true. Marking an already-deleted record is a no-op.
    ///
    /// Returns `RepositoryError::NotFound` for an unknown id.
    async fn mark_deleted(&self, id: &ShareId) -> RepositoryResult<()>;
}
