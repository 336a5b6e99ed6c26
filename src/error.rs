//! Error types for Mason
//!
//! Uses `thiserror` for library errors. Port-level errors (script loading,
//! instantiation) live next to their port traits and convert into this type.

use thiserror::Error;

use crate::domain::ports::instantiator::InstantiationError;
use crate::domain::ports::script_loader::ScriptLoadError;
use crate::domain::value_objects::ProjectPath;

/// Result type alias for Mason operations
pub type MasonResult<T> = Result<T, MasonError>;

/// Main error type for Mason operations
#[derive(Error, Debug)]
pub enum MasonError {
    /// A name failed validation against the project-naming rules.
    ///
    /// Deferred: raised by the pre-evaluation hook, never at construction.
    #[error("{subject} '{name}' is invalid: {reason}\n  → Fix: {hint}")]
    InvalidName {
        subject: String,
        name: String,
        reason: String,
        hint: String,
    },

    /// A collaborator could not construct a project node or target
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    /// A build script resource could not be read
    #[error(transparent)]
    ScriptLoad(#[from] ScriptLoadError),

    /// A parent already has a child project of the same name
    #[error("project '{parent}' already has a child project named '{name}'\n  → Fix: Rename one of the projects so sibling names are unique")]
    DuplicateChildProject { parent: ProjectPath, name: String },
}
