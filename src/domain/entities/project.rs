//! Project node entity
//!
//! One module/subproject of a multi-module build, linked into the project
//! tree. The parent link is a non-owning [`ProjectPath`] back-reference;
//! ownership of the subtree belongs to the registry and the root's
//! transitive child set.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::ports::instantiator::ProjectSeed;
use crate::domain::ports::script_loader::ScriptSource;
use crate::domain::value_objects::{ClassLoaderScope, ProjectPath};
use crate::error::{MasonError, MasonResult};

/// One-shot callback run by the evaluation driver before the node's build
/// logic executes
pub type BeforeEvaluateHook = Box<dyn FnOnce(&ProjectNode) -> MasonResult<()> + Send>;

/// In-memory representation of one project in the build tree
pub struct ProjectNode {
    name: String,
    path: ProjectPath,
    parent: Option<ProjectPath>,
    project_dir: PathBuf,
    build_file: Option<PathBuf>,
    script: ScriptSource,
    scopes: Vec<ClassLoaderScope>,
    // Children arrive one at a time while sibling subtrees may be under
    // construction on other threads; names are unique within a parent.
    children: RwLock<BTreeMap<String, Arc<ProjectNode>>>,
    hooks: Mutex<Vec<BeforeEvaluateHook>>,
}

impl ProjectNode {
    /// Construct a node from its seed.
    ///
    /// The name is NOT validated here; validation runs in the pre-evaluation
    /// hook the factory registers.
    pub fn new(seed: ProjectSeed) -> Self {
        Self {
            name: seed.name,
            path: seed.path,
            parent: seed.parent,
            project_dir: seed.project_dir,
            build_file: seed.build_file,
            script: seed.script,
            scopes: seed.scopes,
            children: RwLock::new(BTreeMap::new()),
            hooks: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical path of this node (`:` for the root)
    pub fn path(&self) -> &ProjectPath {
        &self.path
    }

    /// Back-link to the owning node's path; `None` for the root
    pub fn parent(&self) -> Option<&ProjectPath> {
        self.parent.as_ref()
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn build_file(&self) -> Option<&Path> {
        self.build_file.as_deref()
    }

    pub fn script(&self) -> &ScriptSource {
        &self.script
    }

    pub fn scopes(&self) -> &[ClassLoaderScope] {
        &self.scopes
    }

    /// Link `child` under this node.
    ///
    /// Sibling names must be unique; linking a second child with an existing
    /// name fails and leaves the tree unchanged.
    pub fn add_child(&self, child: Arc<ProjectNode>) -> MasonResult<()> {
        let mut children = self.children.write().expect("child set lock poisoned");
        if children.contains_key(child.name()) {
            return Err(MasonError::DuplicateChildProject {
                parent: self.path.clone(),
                name: child.name().to_string(),
            });
        }
        children.insert(child.name().to_string(), child);
        Ok(())
    }

    /// Snapshot of the current children, ordered by name
    pub fn children(&self) -> Vec<Arc<ProjectNode>> {
        self.children
            .read()
            .expect("child set lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    /// Child with the given name, if any
    pub fn child(&self, name: &str) -> Option<Arc<ProjectNode>> {
        self.children
            .read()
            .expect("child set lock poisoned")
            .get(name)
            .cloned()
    }

    /// Register a hook to run once before this node is evaluated
    pub fn before_evaluate(&self, hook: BeforeEvaluateHook) {
        self.hooks.lock().expect("hook list lock poisoned").push(hook);
    }

    /// Run all pending pre-evaluation hooks, failing fast on the first error.
    ///
    /// Hooks are one-shot: they are drained before running, so a second call
    /// is a no-op even when an earlier hook failed. Invoked by the external
    /// phase driver exactly once per node.
    pub fn run_before_evaluate(&self) -> MasonResult<()> {
        let pending: Vec<BeforeEvaluateHook> = {
            let mut hooks = self.hooks.lock().expect("hook list lock poisoned");
            hooks.drain(..).collect()
        };
        for hook in pending {
            hook(self)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ProjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectNode")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("parent", &self.parent)
            .field("project_dir", &self.project_dir)
            .field("build_file", &self.build_file)
            .finish_non_exhaustive()
    }
}
