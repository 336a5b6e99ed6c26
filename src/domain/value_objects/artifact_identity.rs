//! Artifact Identity Value Object
//!
//! Immutable identity of a build artifact (name, kind, extension, classifier,
//! existence requirement). Used as a map/set key throughout dependency
//! bookkeeping, so equality and hashing cover the full attribute tuple and
//! the hash is computed once at construction.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::domain::ports::publish_artifact::PublishArtifact;

/// Text after the final `.` of `name`, or `""` when there is no dot.
///
/// Mirrors last-dot parsing, so `"mylib-1.0"` has extension `"0"` and
/// `".profile"` has extension `"profile"`. The display rule depends on this
/// exact behavior.
fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}

/// Text before the final `.` of `name`, or all of `name` when there is no dot
fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Immutable identity of a build artifact
///
/// The `kind` field is the artifact's type label (`"jar"`, `"pom"`, ...); by
/// convention it equals `extension` when derived from a file name. Two
/// identities are equal only when all five attributes match, including
/// `must_exist`.
#[derive(Debug, Clone)]
pub struct ArtifactIdentity {
    name: String,
    kind: String,
    extension: Option<String>,
    classifier: Option<String>,
    must_exist: bool,
    hash: u64,
}

impl ArtifactIdentity {
    /// Create an identity from explicit attributes
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        extension: Option<String>,
        classifier: Option<String>,
        must_exist: bool,
    ) -> Self {
        let name = name.into();
        let kind = kind.into();
        let hash = compute_hash(&name, &kind, extension.as_deref(), classifier.as_deref(), must_exist);
        Self {
            name,
            kind,
            extension,
            classifier,
            must_exist,
            hash,
        }
    }

    /// Derive an identity from a file on disk plus an optional classifier
    pub fn for_file(file: &Path, classifier: Option<&str>) -> Self {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::for_file_name(&file_name, classifier)
    }

    /// Derive an identity from a bare file name plus an optional classifier
    ///
    /// Both `kind` and `extension` are set from the same parsed extension.
    /// The duplication is deliberate.
    pub fn for_file_name(file_name: &str, classifier: Option<&str>) -> Self {
        let extension = file_extension(file_name).to_string();
        let name = file_stem(file_name).to_string();
        let optional_extension = if extension.is_empty() {
            None
        } else {
            Some(extension.clone())
        };
        Self::new(
            name,
            extension,
            optional_extension,
            classifier.map(str::to_string),
            false,
        )
    }

    /// Best-effort identity for a publishable artifact
    ///
    /// Identity metadata is advisory; if any getter fails the result is
    /// `None`, never an error. A missing logical name falls back to the
    /// artifact file's name.
    pub fn for_publish_artifact(artifact: &dyn PublishArtifact) -> Option<Self> {
        let name = match artifact.name().ok()? {
            Some(name) => name,
            None => artifact
                .file()
                .ok()?
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let kind = artifact.kind().ok()?;
        let extension = artifact.extension().ok()?;
        let classifier = artifact.classifier().ok()?;
        Some(Self::new(name, kind, extension, classifier, false))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Artifact type label (`type` in descriptor terms)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn must_exist(&self) -> bool {
        self.must_exist
    }
}

fn compute_hash(
    name: &str,
    kind: &str,
    extension: Option<&str>,
    classifier: Option<&str>,
    must_exist: bool,
) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    kind.hash(&mut hasher);
    extension.hash(&mut hasher);
    classifier.hash(&mut hasher);
    must_exist.hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for ArtifactIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.extension == other.extension
            && self.classifier == other.classifier
            && self.must_exist == other.must_exist
    }
}

impl Eq for ArtifactIdentity {}

impl Hash for ArtifactIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for ArtifactIdentity {
    /// Compatibility surface reused wherever identities appear in logs and
    /// reports: `name`, then `-classifier` when present and non-empty, then
    /// `.extension` unless the name already ends in that extension.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(classifier) = &self.classifier {
            if !classifier.is_empty() {
                write!(f, "-{classifier}")?;
            }
        }
        if let Some(extension) = &self.extension {
            if !extension.is_empty() && file_extension(&self.name) != extension {
                write!(f, ".{extension}")?;
            }
        }
        Ok(())
    }
}
