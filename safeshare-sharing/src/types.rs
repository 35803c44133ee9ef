//! Share records and the values passed across the lifecycle API.

use chrono::{DateTime, Utc};
use safeshare_crypto::EncryptedPayload;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type assumed for opened files that were stored without one.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// File name assumed for opened files that were stored without one.
pub const DEFAULT_FILE_NAME: &str = "decrypted-file";

/// Repository-assigned share identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareId(String);

impl ShareId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShareId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ShareId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of content carried by a share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Note,
    Link,
    File,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Note => "note",
            ContentType::Link => "link",
            ContentType::File => "file",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted, encrypted share.
///
/// The key is never a field. `file_name` and `file_type` are plaintext
/// metadata, readable by the store operator; listing UIs depend on them
/// being available without the key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub id: ShareId,
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_email: String,
    pub content_type: ContentType,
    pub payload: EncryptedPayload,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

/// A share record before the repository has assigned an id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewShareRecord {
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_email: String,
    pub content_type: ContentType,
    pub payload: EncryptedPayload,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl NewShareRecord {
    /// Attaches the repository-assigned id.
    pub fn into_record(self, id: ShareId) -> ShareRecord {
        ShareRecord {
            id,
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            recipient_email: self.recipient_email,
            content_type: self.content_type,
            payload: self.payload,
            created_at: self.created_at,
            deleted: self.deleted,
            file_name: self.file_name,
            file_type: self.file_type,
        }
    }
}

/// Record fields a repository must be able to query on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareField {
    SenderId,
    RecipientEmail,
}

impl ShareField {
    /// Stored field name.
    pub fn name(&self) -> &'static str {
        match self {
            ShareField::SenderId => "sender_id",
            ShareField::RecipientEmail => "recipient_email",
        }
    }

    /// Reads this field from a record.
    pub fn value_of<'a>(&self, record: &'a ShareRecord) -> &'a str {
        match self {
            ShareField::SenderId => &record.sender_id,
            ShareField::RecipientEmail => &record.recipient_email,
        }
    }
}

/// Orders records newest first, ties broken by id descending.
pub fn sort_newest_first(records: &mut [ShareRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// A file attached to a share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAttachment {
    pub name: String,
    /// Declared media type; browsers report an empty string when unknown.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Content handed to `create_share`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareContent {
    /// Note or link text.
    Text(String),
    File(FileAttachment),
}

impl ShareContent {
    pub fn text(s: impl Into<String>) -> Self {
        ShareContent::Text(s.into())
    }

    pub fn file(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        ShareContent::File(FileAttachment {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        })
    }

    /// Size of the raw content in bytes.
    pub fn len(&self) -> usize {
        match self {
            ShareContent::Text(s) => s.len(),
            ShareContent::File(f) => f.bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A decrypted file with its plaintext metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenedFile {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl OpenedFile {
    pub fn file_name_or_default(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    pub fn media_type_or_default(&self) -> &str {
        self.file_type.as_deref().unwrap_or(DEFAULT_MEDIA_TYPE)
    }
}

/// Decrypted share content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenedContent {
    Text(String),
    File(OpenedFile),
}

impl OpenedContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OpenedContent::Text(s) => Some(s),
            OpenedContent::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&OpenedFile> {
        match self {
            OpenedContent::Text(_) => None,
            OpenedContent::File(f) => Some(f),
        }
    }
}

/// Result of a successful create: the share id and the exported key.
///
/// This is the only time the key is observable. `Debug` redacts it so the
/// value can be logged safely by callers that log whole results.
#[derive(Clone, PartialEq, Eq)]
pub struct CreatedShare {
    pub share_id: ShareId,
    pub exported_key: String,
}

impl fmt::Debug for CreatedShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatedShare")
            .field("share_id", &self.share_id)
            .field("exported_key", &"[REDACTED]")
            .finish()
    }
}

/// Sender or recipient attribution. Never used as key material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

/// A stored user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Both listings for one user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShareLists {
    pub sent: Vec<ShareRecord>,
    pub received: Vec<ShareRecord>,
}
