//! Input validation for shares and profiles.

use crate::config::ShareConfig;
use crate::error::{ShareError, ShareResult};
use crate::types::{ContentType, ShareContent};
use regex_lite::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex_lite::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Checks that `email` is a syntactically plausible address.
pub fn validate_email(email: &str) -> ShareResult<()> {
    let pattern = EMAIL_PATTERN
        .as_ref()
        .map_err(|e| ShareError::Config(format!("email pattern: {e}")))?;

    if pattern.is_match(email) {
        Ok(())
    } else {
        Err(ShareError::Validation("invalid recipient email".to_string()))
    }
}

pub fn validate_display_name(name: &str) -> ShareResult<()> {
    if name.trim().is_empty() {
        return Err(ShareError::Validation("display name is empty".to_string()));
    }
    Ok(())
}

/// Checks that `content` matches `content_type` and fits the configured limits.
///
/// Text must contain something other than whitespace. A file only has to
/// be attached; a zero-byte file is a valid share.
pub fn validate_content(
    content_type: ContentType,
    content: &ShareContent,
    config: &ShareConfig,
) -> ShareResult<()> {
    match (content_type, content) {
        (ContentType::Note | ContentType::Link, ShareContent::Text(text)) => {
            if text.trim().is_empty() {
                return Err(ShareError::Validation(format!(
                    "{content_type} content is empty"
                )));
            }
        }
        (ContentType::File, ShareContent::File(file)) => {
            if file.name.len() > config.max_file_name_bytes {
                return Err(ShareError::Validation(format!(
                    "file name exceeds {} bytes",
                    config.max_file_name_bytes
                )));
            }
        }
        (ContentType::File, ShareContent::Text(_)) => {
            return Err(ShareError::Validation(
                "file share requires an attached file".to_string(),
            ));
        }
        (_, ShareContent::File(_)) => {
            return Err(ShareError::Validation(format!(
                "{content_type} share cannot carry a file"
            )));
        }
    }

    if content.len() > config.max_content_bytes {
        return Err(ShareError::Validation(format!(
            "content is {} bytes, limit is {}",
            content.len(),
            config.max_content_bytes
        )));
    }
    Ok(())
}
