//! File-backed script resources
//!
//! Implements the `ScriptSourceLoader` port against the local file system.
//! Resources are lazy: construction records the path, and the file is read
//! only when someone asks for the text. A successful read is cached.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::domain::ports::script_loader::{
    ScriptLoadError, ScriptSource, ScriptSourceLoader, TextResource,
};

/// Lazily-read text resource backed by a file
pub struct FileTextResource {
    description: String,
    path: PathBuf,
    cache: OnceLock<String>,
}

impl FileTextResource {
    pub fn new(description: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            description: description.into(),
            path: path.into(),
            cache: OnceLock::new(),
        }
    }
}

impl TextResource for FileTextResource {
    fn description(&self) -> String {
        format!("{} '{}'", self.description, self.path.display())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn text(&self) -> Result<String, ScriptLoadError> {
        if let Some(text) = self.cache.get() {
            return Ok(text.clone());
        }
        if !self.path.is_file() {
            return Err(ScriptLoadError::NotFound {
                path: self.path.clone(),
            });
        }
        let text = std::fs::read_to_string(&self.path).map_err(|e| ScriptLoadError::Read {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(self.cache.get_or_init(|| text).clone())
    }

    fn file(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// In-memory text resource, for embedded or generated scripts
pub struct StringTextResource {
    description: String,
    content: String,
}

impl StringTextResource {
    pub fn new(description: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: content.into(),
        }
    }
}

impl TextResource for StringTextResource {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn exists(&self) -> bool {
        true
    }

    fn text(&self) -> Result<String, ScriptLoadError> {
        Ok(self.content.clone())
    }

    fn file(&self) -> Option<&Path> {
        None
    }
}

/// Resource for a project that declares no build file.
///
/// Reads as empty rather than failing: a project without a build file is
/// legal and its evaluation is a no-op.
pub struct MissingTextResource {
    description: String,
}

impl MissingTextResource {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl TextResource for MissingTextResource {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn exists(&self) -> bool {
        false
    }

    fn text(&self) -> Result<String, ScriptLoadError> {
        Ok(String::new())
    }

    fn file(&self) -> Option<&Path> {
        None
    }
}

/// `ScriptSourceLoader` over the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileScriptSourceLoader;

impl ScriptSourceLoader for FileScriptSourceLoader {
    fn load_file(&self, description: &str, path: Option<&Path>) -> ScriptSource {
        match path {
            Some(path) => {
                ScriptSource::new(std::sync::Arc::new(FileTextResource::new(description, path)))
            }
            None => ScriptSource::new(std::sync::Arc::new(MissingTextResource::new(
                description.to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn file_resource_reads_lazily_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.mason");
        std::fs::write(&path, "plugins { }").unwrap();

        let source = FileScriptSourceLoader.load_file("build file", Some(&path));
        assert!(source.exists());
        assert_eq!(source.contents().unwrap(), "plugins { }");

        // Cached: deleting the file no longer affects reads.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(source.contents().unwrap(), "plugins { }");
    }

    #[test]
    fn missing_file_fails_only_at_read_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.mason");

        let source = FileScriptSourceLoader.load_file("build file", Some(&path));
        assert!(!source.exists());
        let err = source.contents().unwrap_err();
        assert!(matches!(err, ScriptLoadError::NotFound { .. }));
    }

    #[test]
    fn declared_file_appearing_later_becomes_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.mason");

        let source = FileScriptSourceLoader.load_file("build file", Some(&path));
        assert!(source.contents().is_err());

        std::fs::write(&path, "tasks { }").unwrap();
        assert_eq!(source.contents().unwrap(), "tasks { }");
    }

    #[test]
    fn no_build_file_reads_as_empty() {
        let source = FileScriptSourceLoader.load_file("build file", None);
        assert!(!source.exists());
        assert_eq!(source.contents().unwrap(), "");
    }

    #[test]
    fn content_hash_is_stable_for_equal_content() {
        let source = ScriptSource::new(Arc::new(StringTextResource::new("build file", "x = 1")));
        let other = ScriptSource::new(Arc::new(StringTextResource::new("build file", "x = 1")));
        assert_eq!(
            source.content_hash().unwrap(),
            other.content_hash().unwrap()
        );
    }

    #[test]
    fn description_includes_the_path() {
        let source =
            FileScriptSourceLoader.load_file("build file", Some(Path::new("app/build.mason")));
        assert_eq!(source.display_name(), "build file 'app/build.mason'");
    }
}
