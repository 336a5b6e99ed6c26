//! Mason - in-memory project model for multi-module builds
//!
//! Mason models how declarative project descriptors become live, linked
//! project nodes; how those nodes are indexed for lookup; how build
//! artifacts get a stable identity usable for equality, hashing, and
//! display; and how a named collection of test targets is composed and
//! extended at runtime.
//!
//! Script evaluation, dependency resolution, and task execution live in
//! other layers; this crate only hands out lazy script sources and keeps
//! the tree, registry, and identity invariants.

pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use domain::entities::{
    FileCollection, ProjectNode, ProjectRegistry, RegistryEntry, SourceSet, TargetCollection,
    TestSuite, TestSuiteTarget,
};
pub use domain::ports::{
    ArtifactMetadataError, InstantiationError, ProjectInstantiator, ProjectSeed, PublishArtifact,
    ScriptLoadError, ScriptSource, ScriptSourceLoader, TargetFactory, TextResource,
};
pub use domain::services::{validate_name, ProjectFactory, INVALID_NAME_IN_INCLUDE_HINT};
pub use domain::value_objects::{
    ArtifactIdentity, ClassLoaderScope, ContentHash, ProjectDescriptor, ProjectPath,
};
pub use error::{MasonError, MasonResult};
pub use infrastructure::{
    default_project_factory, DefaultProjectInstantiator, DefaultTargetFactory,
    FileScriptSourceLoader,
};
