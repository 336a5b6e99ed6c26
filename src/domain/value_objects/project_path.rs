//! Project Path Value Object
//!
//! The logical location of a project in the build tree: `:` is the root,
//! `:app:core` is the `core` project nested under `app`. Paths are the
//! registry's lookup keys and order project enumeration deterministically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between path segments
pub const PATH_SEPARATOR: char = ':';

/// Logical path of a project node
///
/// Immutable value object. The root path has no segments and renders as `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectPath {
    segments: Vec<String>,
}

impl ProjectPath {
    /// The root project path (`:`)
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// Path of a child project under this path
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Parent path, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Final segment of the path, or `None` for the root
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse a rendered path (`:`, `:app`, `:app:core`)
    ///
    /// Returns `None` for strings that are not absolute logical paths or
    /// that contain empty segments.
    pub fn parse(s: &str) -> Option<Self> {
        if s == ":" {
            return Some(Self::root());
        }
        let rest = s.strip_prefix(PATH_SEPARATOR)?;
        let segments: Vec<String> = rest.split(PATH_SEPARATOR).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self { segments })
    }

    /// Path segments from the root down, excluding the root itself
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "{PATH_SEPARATOR}");
        }
        for segment in &self.segments {
            write!(f, "{PATH_SEPARATOR}{segment}")?;
        }
        Ok(())
    }
}
