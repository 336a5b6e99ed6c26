//! PublishArtifact port
//!
//! Read-only view of a publishable artifact descriptor. Every getter is
//! fallible because artifact metadata can be backed by providers that are
//! not yet (or never) resolvable; identity derivation treats any failure as
//! "no identity available".

use std::path::PathBuf;

/// Error raised by a publish-artifact getter
///
/// Never escapes identity derivation; `ArtifactIdentity::for_publish_artifact`
/// converts it to an absent result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("artifact metadata unavailable: {message}")]
pub struct ArtifactMetadataError {
    message: String,
}

impl ArtifactMetadataError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A publishable artifact as seen by identity derivation
pub trait PublishArtifact {
    /// Logical artifact name; `None` means "fall back to the file name"
    fn name(&self) -> Result<Option<String>, ArtifactMetadataError>;

    /// Artifact type label
    fn kind(&self) -> Result<String, ArtifactMetadataError>;

    fn extension(&self) -> Result<Option<String>, ArtifactMetadataError>;

    fn classifier(&self) -> Result<Option<String>, ArtifactMetadataError>;

    /// The file backing this artifact
    fn file(&self) -> Result<PathBuf, ArtifactMetadataError>;
}
