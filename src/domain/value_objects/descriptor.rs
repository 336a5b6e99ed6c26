//! Project Descriptor Value Object
//!
//! The declarative record a settings layer hands to the factory: what the
//! project is called, where it lives, and which build file (if any) drives
//! it. Read-only to this crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Declarative description of one project in a multi-module build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    name: String,
    project_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build_file: Option<PathBuf>,
}

impl ProjectDescriptor {
    pub fn new(
        name: impl Into<String>,
        project_dir: impl Into<PathBuf>,
        build_file: Option<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            project_dir: project_dir.into(),
            build_file,
        }
    }

    /// Name of the project.
    ///
    /// Not validated here; validation is deferred to the node's
    /// pre-evaluation hook.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn build_file(&self) -> Option<&Path> {
        self.build_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_round_trips_through_json() {
        let descriptor = ProjectDescriptor::new(
            "core",
            PathBuf::from("modules/core"),
            Some(PathBuf::from("modules/core/build.mason")),
        );
        let json = serde_json::to_string(&descriptor).unwrap();
        let parsed: ProjectDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, descriptor);
    }

    #[test]
    fn build_file_defaults_to_none() {
        let parsed: ProjectDescriptor =
            serde_json::from_str(r#"{"name":"core","project_dir":"modules/core"}"#).unwrap();
        assert_eq!(parsed.build_file(), None);
    }
}
