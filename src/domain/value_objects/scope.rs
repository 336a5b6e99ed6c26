//! Class Loader Scope Value Object
//!
//! Opaque isolation handle threaded through project construction. The core
//! never inspects a scope; it only carries them from the caller to the node.

/// Opaque classloader-isolation handle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassLoaderScope {
    id: String,
}

impl ClassLoaderScope {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
