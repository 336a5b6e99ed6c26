//! Default instantiators
//!
//! Plain constructors behind the instantiator ports, plus a wiring helper
//! that assembles a factory with the default collaborators. Callers with
//! decorated or service-injected construction provide their own
//! implementations of the port traits instead.

use std::sync::Arc;

use crate::domain::entities::{ProjectNode, ProjectRegistry, TestSuiteTarget};
use crate::domain::ports::instantiator::{
    InstantiationError, ProjectInstantiator, ProjectSeed, TargetFactory,
};
use crate::domain::services::ProjectFactory;
use crate::infrastructure::script::FileScriptSourceLoader;

/// Constructs project nodes directly from their seed
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProjectInstantiator;

impl ProjectInstantiator for DefaultProjectInstantiator {
    fn new_project(&self, seed: ProjectSeed) -> Result<Arc<ProjectNode>, InstantiationError> {
        Ok(Arc::new(ProjectNode::new(seed)))
    }
}

/// Constructs bare test-suite targets by name
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTargetFactory;

impl TargetFactory for DefaultTargetFactory {
    fn new_target(&self, name: &str) -> Result<TestSuiteTarget, InstantiationError> {
        Ok(TestSuiteTarget::new(name))
    }
}

/// A project factory wired with the default instantiator and the
/// file-system script loader
pub fn default_project_factory(
    registry: Arc<ProjectRegistry>,
) -> ProjectFactory<DefaultProjectInstantiator, FileScriptSourceLoader> {
    ProjectFactory::new(
        DefaultProjectInstantiator,
        registry,
        FileScriptSourceLoader::default(),
    )
}
