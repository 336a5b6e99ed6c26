//! Project name validation
//!
//! Names are validated lazily, once, by the pre-evaluation hook the factory
//! registers. Construction never validates.

use crate::error::{MasonError, MasonResult};

/// Characters that may not appear in a project name
pub const FORBIDDEN_CHARACTERS: [char; 9] = ['/', '\\', ':', '<', '>', '"', '?', '*', '|'];

/// Remediation hint for names that came from an include statement
pub const INVALID_NAME_IN_INCLUDE_HINT: &str =
    "If the name was declared in an include statement, check it for typos, \
     or use ':' instead of '/' as the project path separator";

/// Validate `name` against the project-naming rules.
///
/// `subject` names what is being validated (e.g. `"project name"`) and
/// `hint` is carried into the error for user-facing remediation.
pub fn validate_name(name: &str, subject: &str, hint: &str) -> MasonResult<()> {
    if name.is_empty() {
        return Err(MasonError::InvalidName {
            subject: subject.to_string(),
            name: name.to_string(),
            reason: "it must not be empty".to_string(),
            hint: hint.to_string(),
        });
    }
    if let Some(forbidden) = name.chars().find(|c| FORBIDDEN_CHARACTERS.contains(c)) {
        return Err(MasonError::InvalidName {
            subject: subject.to_string(),
            name: name.to_string(),
            reason: format!("it must not contain the character '{forbidden}'"),
            hint: hint.to_string(),
        });
    }
    Ok(())
}
