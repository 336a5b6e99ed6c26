//! Project node factory
//!
//! Turns a project descriptor plus an optional parent into a fully wired
//! node: lazy script source attached, name-validation hook registered,
//! linked under the parent, and registered. Everything the caller can
//! observe (the parent's child set and the registry) is consistent before
//! `create_project` returns.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ProjectNode, ProjectRegistry};
use crate::domain::ports::instantiator::{ProjectInstantiator, ProjectSeed};
use crate::domain::ports::script_loader::ScriptSourceLoader;
use crate::domain::services::name_validator::{validate_name, INVALID_NAME_IN_INCLUDE_HINT};
use crate::domain::value_objects::{ClassLoaderScope, ProjectDescriptor, ProjectPath};
use crate::error::MasonResult;

/// Factory for project nodes
pub struct ProjectFactory<I, L> {
    instantiator: I,
    registry: Arc<ProjectRegistry>,
    script_loader: L,
}

impl<I, L> ProjectFactory<I, L>
where
    I: ProjectInstantiator,
    L: ScriptSourceLoader,
{
    pub fn new(instantiator: I, registry: Arc<ProjectRegistry>, script_loader: L) -> Self {
        Self {
            instantiator,
            registry,
            script_loader,
        }
    }

    pub fn registry(&self) -> &Arc<ProjectRegistry> {
        &self.registry
    }

    /// Create a node from `descriptor`, link it under `parent` (when given),
    /// and register it.
    ///
    /// The script source is lazy; the descriptor's build file is not read
    /// here. The name-validation hook is registered but NOT run: a
    /// syntactically invalid name fails only when the evaluation driver
    /// later invokes the node's pre-evaluation hooks.
    pub fn create_project(
        &self,
        descriptor: &ProjectDescriptor,
        parent: Option<&Arc<ProjectNode>>,
        scopes: Vec<ClassLoaderScope>,
    ) -> MasonResult<Arc<ProjectNode>> {
        let script = self
            .script_loader
            .load_file("build file", descriptor.build_file());

        let path = match parent {
            Some(parent) => parent.path().child(descriptor.name()),
            None => ProjectPath::root(),
        };

        let node = self.instantiator.new_project(ProjectSeed {
            name: descriptor.name().to_string(),
            path,
            parent: parent.map(|p| p.path().clone()),
            project_dir: descriptor.project_dir().to_path_buf(),
            build_file: descriptor.build_file().map(|f| f.to_path_buf()),
            script,
            scopes,
        })?;

        node.before_evaluate(Box::new(|project| {
            validate_name(project.name(), "project name", INVALID_NAME_IN_INCLUDE_HINT)
        }));

        if let Some(parent) = parent {
            parent.add_child(Arc::clone(&node))?;
        }
        self.registry.add_project(Arc::clone(&node));

        debug!(path = %node.path(), dir = %node.project_dir().display(), "project created");
        Ok(node)
    }
}
