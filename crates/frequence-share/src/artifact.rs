use chrono::{DateTime, Utc};

/// File name given to shared images.
pub const DEFAULT_FILE_NAME: &str = "ma_frequence.png";

/// Media type of shared images.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// An in-memory file handed to the platform share facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareableArtifact {
    file_name: String,
    media_type: String,
    last_modified: DateTime<Utc>,
    bytes: Vec<u8>,
}

impl ShareableArtifact {
    /// File name presented to the share target.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type of the content.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Time the artifact was built.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Last-modified time in milliseconds since the Unix epoch.
    pub fn last_modified_millis(&self) -> i64 {
        self.last_modified.timestamp_millis()
    }

    /// Raw file content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the artifact and return its content.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builder for [`ShareableArtifact`].
///
/// Unset fields fall back to `ma_frequence.png`, `image/png` and the time
/// [`build`](Self::build) is called.
#[derive(Debug, Default, Clone)]
pub struct ArtifactBuilder {
    file_name: Option<String>,
    media_type: Option<String>,
    last_modified: Option<DateTime<Utc>>,
    bytes: Vec<u8>,
}

impl ArtifactBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Pin the last-modified time instead of using the build time.
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Set the content as raw bytes.
    pub fn with_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bytes = bytes.into();
        self
    }

    /// Assemble the artifact.
    pub fn build(self) -> ShareableArtifact {
        ShareableArtifact {
            file_name: self
                .file_name
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            media_type: self
                .media_type
                .unwrap_or_else(|| PNG_MEDIA_TYPE.to_string()),
            last_modified: self.last_modified.unwrap_or_else(Utc::now),
            bytes: self.bytes,
        }
    }
}
