use crate::artifact::{DEFAULT_FILE_NAME, PNG_MEDIA_TYPE};
use crate::{Result, ShareError};
use serde::{Deserialize, Serialize};

/// Title shown by the platform share sheet.
pub const DEFAULT_TITLE: &str = "Ma fréquence stationR";

/// Fixed metadata attached to every share request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Title of the share request.
    pub title: String,
    /// File name of the shared artifact.
    pub file_name: String,
    /// Media type of the shared artifact.
    pub media_type: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            media_type: PNG_MEDIA_TYPE.to_string(),
        }
    }
}

impl ShareConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| ShareError::Config(e.to_string()))
    }
}
