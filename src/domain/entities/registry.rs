//! Project registry entity
//!
//! Process-scoped index of project nodes by logical path. Populated
//! monotonically while the project tree is constructed (possibly from
//! several threads building independent subtrees), read-mostly afterwards.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::domain::entities::ProjectNode;
use crate::domain::value_objects::ProjectPath;

/// Registration metadata kept per project node
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    node: Arc<ProjectNode>,
    registered_at: DateTime<Utc>,
}

impl RegistryEntry {
    pub fn node(&self) -> &Arc<ProjectNode> {
        &self.node
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

/// Index of all project nodes in one build invocation
///
/// Insertion is synchronous: a node is discoverable by every subsequent
/// lookup, from any thread, before `add_project` returns. Nothing is ever
/// removed during a build session.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    projects: RwLock<HashMap<ProjectPath, RegistryEntry>>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under its logical path.
    ///
    /// Idempotent for the same node instance: re-adding keeps the original
    /// entry (including its registration time). A different instance at an
    /// occupied path replaces the entry, matching last-write-wins map
    /// semantics.
    pub fn add_project(&self, node: Arc<ProjectNode>) {
        let mut projects = self.projects.write().expect("registry lock poisoned");
        if let Some(existing) = projects.get(node.path()) {
            if Arc::ptr_eq(existing.node(), &node) {
                return;
            }
        }
        trace!(path = %node.path(), "project registered");
        projects.insert(
            node.path().clone(),
            RegistryEntry {
                node,
                registered_at: Utc::now(),
            },
        );
    }

    /// Node registered at `path`, if any
    pub fn project(&self, path: &ProjectPath) -> Option<Arc<ProjectNode>> {
        self.projects
            .read()
            .expect("registry lock poisoned")
            .get(path)
            .map(|entry| Arc::clone(entry.node()))
    }

    /// Registration entry (node + metadata) at `path`, if any
    pub fn entry(&self, path: &ProjectPath) -> Option<RegistryEntry> {
        self.projects
            .read()
            .expect("registry lock poisoned")
            .get(path)
            .cloned()
    }

    /// All registered nodes, ordered by path for deterministic enumeration
    pub fn all_projects(&self) -> Vec<Arc<ProjectNode>> {
        let projects = self.projects.read().expect("registry lock poisoned");
        let mut entries: Vec<_> = projects
            .values()
            .map(|entry| Arc::clone(entry.node()))
            .collect();
        entries.sort_by(|a, b| a.path().cmp(b.path()));
        entries
    }

    pub fn len(&self) -> usize {
        self.projects.read().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
