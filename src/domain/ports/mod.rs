//! Domain Ports
//!
//! Interface definitions for external collaborators: script loading,
//! instance construction, and publishable-artifact metadata.

pub mod instantiator;
pub mod publish_artifact;
pub mod script_loader;

pub use instantiator::{InstantiationError, ProjectInstantiator, ProjectSeed, TargetFactory};
pub use publish_artifact::{ArtifactMetadataError, PublishArtifact};
pub use script_loader::{ScriptLoadError, ScriptSource, ScriptSourceLoader, TextResource};
