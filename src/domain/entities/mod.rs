//! Domain Entities
//!
//! Core domain entities with identity and lifecycle.
//! - `ProjectNode` - one module/subproject in the build tree
//! - `ProjectRegistry` - index of all project nodes by logical path
//! - `SourceSet` / `FileCollection` - live compilation-unit views
//! - `TestSuite` - named collection of test targets

mod project;
mod registry;
mod source_set;
mod test_suite;

pub use project::{BeforeEvaluateHook, ProjectNode};
pub use registry::{ProjectRegistry, RegistryEntry};
pub use source_set::{FileCollection, SourceSet};
pub use test_suite::{TargetCollection, TestSuite, TestSuiteTarget};
