//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_identity;
mod descriptor;
mod hash;
mod project_path;
mod scope;

pub use artifact_identity::ArtifactIdentity;
pub use descriptor::ProjectDescriptor;
pub use hash::ContentHash;
pub use project_path::{ProjectPath, PATH_SEPARATOR};
pub use scope::ClassLoaderScope;
