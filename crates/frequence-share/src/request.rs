use crate::artifact::ShareableArtifact;

/// A title plus the files to share, as handed to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    title: String,
    files: Vec<ShareableArtifact>,
}

impl ShareRequest {
    /// Create a request carrying exactly one file.
    pub fn single(title: impl Into<String>, artifact: ShareableArtifact) -> Self {
        Self {
            title: title.into(),
            files: vec![artifact],
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn files(&self) -> &[ShareableArtifact] {
        &self.files
    }

    /// Split the request into its title and files.
    pub fn into_parts(self) -> (String, Vec<ShareableArtifact>) {
        (self.title, self.files)
    }
}
