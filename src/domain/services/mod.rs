//! Domain Services
//!
//! Stateless operations over the entities: project construction and name
//! validation.

mod name_validator;
mod project_factory;

pub use name_validator::{validate_name, FORBIDDEN_CHARACTERS, INVALID_NAME_IN_INCLUDE_HINT};
pub use project_factory::ProjectFactory;
