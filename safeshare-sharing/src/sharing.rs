//! Share workflow: create, list, open, retire.
//!
//! Orchestrates the share lifecycle by coordinating the content codec,
//! the encryption engine and the injected repository. Create runs
//! codec-encode -> encrypt -> persist; open runs decrypt -> codec-decode.
//!
//! The exported key leaves this module exactly once, in the
//! [`CreatedShare`] returned by `create_share`. It is never stored, cached
//! or logged here.

use crate::config::ShareConfig;
use crate::error::{ShareError, ShareResult};
use crate::identity::IdentityProvider;
use crate::repository::ShareRepository;
use crate::types::*;
use crate::validation;
use chrono::Utc;
use safeshare_crypto as crypto;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrates zero-knowledge share workflows.
#[derive(Clone)]
pub struct ShareManager {
    repository: Arc<dyn ShareRepository>,
    identities: Arc<dyn IdentityProvider>,
    config: ShareConfig,
}

impl ShareManager {
    pub fn new(
        repository: Arc<dyn ShareRepository>,
        identities: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            repository,
            identities,
            config: ShareConfig::default(),
        }
    }

    /// Builds a manager with an explicit, validated configuration.
    pub fn with_config(
        repository: Arc<dyn ShareRepository>,
        identities: Arc<dyn IdentityProvider>,
        config: ShareConfig,
    ) -> ShareResult<Self> {
        config.validate()?;
        Ok(Self {
            repository,
            identities,
            config,
        })
    }

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Registers (or replaces) a sender profile with the identity collaborator.
    pub async fn register_profile(&self, id: &str, name: &str, email: &str) -> ShareResult<()> {
        validation::validate_display_name(name)?;
        validation::validate_email(email)?;
        self.identities.create_profile(id, name, email).await?;
        info!("registered profile {id}");
        Ok(())
    }

    /// Looks up a profile; `None` when the user has not registered one.
    pub async fn profile(&self, id: &str) -> ShareResult<Option<UserProfile>> {
        Ok(self.identities.get_profile(id).await?)
    }

    /// Encrypts `content` under a fresh key and stores it for `recipient_email`.
    ///
    /// Returns the share id and the exported key. The key is not persisted
    /// anywhere, so this is the only chance to obtain it.
    pub async fn create_share(
        &self,
        sender: &UserIdentity,
        recipient_email: &str,
        content_type: ContentType,
        content: ShareContent,
    ) -> ShareResult<CreatedShare> {
        validation::validate_email(recipient_email)?;
        validation::validate_content(content_type, &content, &self.config)?;

        let (plaintext, file_name, file_type) = encode_content(content);

        let key = crypto::generate_key();
        let payload = crypto::encrypt(&key, &plaintext)?;
        let exported_key = crypto::export_key(&key);
        drop(key);

        let record = NewShareRecord {
            sender_id: sender.id.clone(),
            sender_name: sender.display_name.clone(),
            recipient_email: recipient_email.to_string(),
            content_type,
            payload,
            created_at: Utc::now(),
            deleted: false,
            file_name,
            file_type,
        };

        let share_id = self.repository.insert(record).await?;
        info!("created {content_type} share {share_id} from {}", sender.id);

        Ok(CreatedShare {
            share_id,
            exported_key,
        })
    }

    /// Like [`ShareManager::create_share`], resolving the sender by id first.
    pub async fn create_share_as(
        &self,
        sender_id: &str,
        recipient_email: &str,
        content_type: ContentType,
        content: ShareContent,
    ) -> ShareResult<CreatedShare> {
        let profile = self
            .identities
            .get_profile(sender_id)
            .await?
            .ok_or_else(|| ShareError::UnknownSender(sender_id.to_string()))?;

        self.create_share(&profile.identity(), recipient_email, content_type, content)
            .await
    }

    /// Live shares sent by `sender_id`, newest first.
    pub async fn list_sent(&self, sender_id: &str) -> ShareResult<Vec<ShareRecord>> {
        self.list(ShareField::SenderId, sender_id).await
    }

    /// Live shares addressed to `recipient_email`, newest first.
    pub async fn list_received(&self, recipient_email: &str) -> ShareResult<Vec<ShareRecord>> {
        self.list(ShareField::RecipientEmail, recipient_email).await
    }

    /// Fetches sent and received listings concurrently.
    pub async fn list_all(&self, user: &UserIdentity) -> ShareResult<ShareLists> {
        let (sent, received) =
            tokio::try_join!(self.list_sent(&user.id), self.list_received(&user.email))?;
        Ok(ShareLists { sent, received })
    }

    async fn list(&self, field: ShareField, value: &str) -> ShareResult<Vec<ShareRecord>> {
        let mut records = self.repository.query_by_field(field, value, true).await?;
        // Listings never carry retired shares, whatever the store returns.
        records.retain(|r| !r.deleted);
        sort_newest_first(&mut records);
        debug!("listed {} shares by {}", records.len(), field.name());
        Ok(records)
    }

    /// Decrypts a record with the exported key its sender handed out.
    ///
    /// Pure: the record is not modified and nothing is persisted. A wrong
    /// or unreadable key and a corrupted payload all fail with
    /// [`ShareError::DecryptionAuthentication`].
    pub fn open_share(&self, record: &ShareRecord, exported_key: &str) -> ShareResult<OpenedContent> {
        let plaintext = crypto::import_key(exported_key)
            .and_then(|key| crypto::decrypt(&key, &record.payload))
            .map_err(|_| {
                warn!("failed to open share {}", record.id);
                ShareError::DecryptionAuthentication
            })?;
        decode_content(record, plaintext)
    }

    /// Fetches a live record by id, then opens it.
    pub async fn open_share_by_id(
        &self,
        id: &ShareId,
        exported_key: &str,
    ) -> ShareResult<OpenedContent> {
        let record = self.fetch(id).await?;
        self.open_share(&record, exported_key)
    }

    /// Fetches a live record by id without decrypting it.
    pub async fn fetch(&self, id: &ShareId) -> ShareResult<ShareRecord> {
        match self.repository.get(id).await? {
            Some(record) if !record.deleted => Ok(record),
            _ => Err(ShareError::NotFound(id.clone())),
        }
    }

    /// Soft-deletes a share. Retiring an already-retired share is a no-op.
    pub async fn retire(&self, id: &ShareId) -> ShareResult<()> {
        self.repository.mark_deleted(id).await?;
        debug!("retire requested for share {id}");
        Ok(())
    }
}

/// Turns share content into engine bytes plus plaintext file metadata.
///
/// Files travel as base64 text so every payload decodes as UTF-8 first.
/// Empty names and media types are dropped rather than stored.
fn encode_content(content: ShareContent) -> (Vec<u8>, Option<String>, Option<String>) {
    match content {
        ShareContent::Text(text) => (crypto::encode_text(&text), None, None),
        ShareContent::File(file) => {
            let bytes = crypto::encode_binary(file.bytes);
            let transport = crypto::transport_encode(&bytes);
            (
                crypto::encode_text(&transport),
                non_empty(file.name),
                non_empty(file.media_type),
            )
        }
    }
}

fn decode_content(record: &ShareRecord, plaintext: Vec<u8>) -> ShareResult<OpenedContent> {
    let text = crypto::decode_text(plaintext)?;
    match record.content_type {
        ContentType::Note | ContentType::Link => Ok(OpenedContent::Text(text)),
        ContentType::File => Ok(OpenedContent::File(OpenedFile {
            file_name: record.file_name.clone(),
            file_type: record.file_type.clone(),
            bytes: crypto::transport_decode(&text)?,
        })),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
