//! Share lifecycle configuration.

use crate::error::{ShareError, ShareResult};
use serde::{Deserialize, Serialize};

/// Configuration for the share manager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Largest accepted content (text bytes or raw file bytes).
    pub max_content_bytes: usize,

    /// Longest accepted file name, in bytes.
    pub max_file_name_bytes: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            max_content_bytes: 10 * 1024 * 1024, // 10 MiB
            max_file_name_bytes: 255,
        }
    }
}

impl ShareConfig {
    /// Parses a JSON config document; missing fields take defaults.
    pub fn from_json(json: &str) -> ShareResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ShareError::Config(format!("unparseable config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ShareResult<()> {
        if self.max_content_bytes == 0 {
            return Err(ShareError::Config(
                "max_content_bytes must be greater than zero".to_string(),
            ));
        }
        if self.max_file_name_bytes == 0 {
            return Err(ShareError::Config(
                "max_file_name_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
