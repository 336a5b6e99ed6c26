//! Instantiator ports
//!
//! Opaque factories for project nodes and test-suite targets. Decorated or
//! service-injected construction lives behind these seams; the core only
//! asks for a fully-constructed instance and propagates failures unchanged.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{ProjectNode, TestSuiteTarget};
use crate::domain::ports::script_loader::ScriptSource;
use crate::domain::value_objects::{ClassLoaderScope, ProjectPath};

/// Construction failure from an instantiator
#[derive(Debug, thiserror::Error)]
#[error("failed to construct {subject} '{name}': {message}")]
pub struct InstantiationError {
    subject: String,
    name: String,
    message: String,
}

impl InstantiationError {
    pub fn new(
        subject: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Everything an instantiator needs to build one project node
#[derive(Debug)]
pub struct ProjectSeed {
    pub name: String,
    pub path: ProjectPath,
    /// Back-link to the owning node's path; `None` for the root project
    pub parent: Option<ProjectPath>,
    pub project_dir: PathBuf,
    pub build_file: Option<PathBuf>,
    pub script: ScriptSource,
    pub scopes: Vec<ClassLoaderScope>,
}

/// Factory for project nodes
pub trait ProjectInstantiator: Send + Sync {
    fn new_project(&self, seed: ProjectSeed) -> Result<Arc<ProjectNode>, InstantiationError>;
}

/// Factory for test-suite targets
pub trait TargetFactory: Send + Sync {
    fn new_target(&self, name: &str) -> Result<TestSuiteTarget, InstantiationError>;
}
