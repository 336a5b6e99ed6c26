//! Domain Layer
//!
//! The core of Mason - the in-memory build model without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Project tree, registry, source sets, test suites
//! - `value_objects/` - Immutable value types (ProjectPath, ArtifactIdentity)
//! - `services/` - Project factory and name validation
//! - `ports/` - Interfaces for external collaborators (script loading,
//!   instantiation, publishable artifacts)
//!
//! The only I/O in the crate sits behind the `ScriptSourceLoader` port, and
//! even that is deferred: nothing here reads a build script until a caller
//! asks for its contents.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
