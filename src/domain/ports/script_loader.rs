//! ScriptSourceLoader port
//!
//! Obtains lazily-readable build-script sources. Loading a script must never
//! read the file eagerly; build files can be large or absent, and only a
//! later evaluation phase should pay for (or fail on) the read.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::value_objects::ContentHash;

/// Error reading a build-script resource
///
/// Deferred: raised by [`TextResource::text`], never by
/// [`ScriptSourceLoader::load_file`].
#[derive(Debug, thiserror::Error)]
pub enum ScriptLoadError {
    #[error("build script not found: {path}\n  → Fix: Create the build file or remove the project from the settings")]
    NotFound { path: PathBuf },

    #[error("could not read build script {path}: {message}")]
    Read { path: PathBuf, message: String },
}

/// A lazily-readable text resource
pub trait TextResource: Send + Sync {
    /// Human-readable description, e.g. `build file 'app/build.mason'`
    fn description(&self) -> String;

    /// Whether the backing content exists. Must not read the content.
    fn exists(&self) -> bool;

    /// The resource content. The only point at which a read failure surfaces.
    fn text(&self) -> Result<String, ScriptLoadError>;

    /// Backing file, when the resource is file-based
    fn file(&self) -> Option<&Path>;
}

/// Handle to a build script, wrapping a lazy text resource
#[derive(Clone)]
pub struct ScriptSource {
    resource: Arc<dyn TextResource>,
}

impl ScriptSource {
    pub fn new(resource: Arc<dyn TextResource>) -> Self {
        Self { resource }
    }

    pub fn display_name(&self) -> String {
        self.resource.description()
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.resource.file()
    }

    pub fn exists(&self) -> bool {
        self.resource.exists()
    }

    /// Script text, read on demand
    pub fn contents(&self) -> Result<String, ScriptLoadError> {
        self.resource.text()
    }

    /// SHA-256 of the script text, computed on demand
    pub fn content_hash(&self) -> Result<ContentHash, ScriptLoadError> {
        Ok(ContentHash::from_content(&self.contents()?))
    }
}

impl fmt::Debug for ScriptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptSource")
            .field("description", &self.resource.description())
            .field("file", &self.resource.file())
            .finish()
    }
}

/// Loads build-script sources for the project factory
pub trait ScriptSourceLoader: Send + Sync {
    /// Obtain a lazy script source for `path`.
    ///
    /// `description` names the resource for display (e.g. `"build file"`).
    /// A `None` or missing path still yields a source; its `exists()` is
    /// false and reading it fails.
    fn load_file(&self, description: &str, path: Option<&Path>) -> ScriptSource;
}
