//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: file-system script loading
//! and default instance construction.

pub mod instantiation;
pub mod script;

pub use instantiation::{default_project_factory, DefaultProjectInstantiator, DefaultTargetFactory};
pub use script::{FileScriptSourceLoader, FileTextResource, MissingTextResource, StringTextResource};
