//! Source set and live file collections
//!
//! A [`FileCollection`] is a shared, live view over an ordered list of
//! sources. Clones share state, and including another collection keeps a
//! reference to it rather than copying its contents, so additions to the
//! underlying collection remain visible through every view. Downstream
//! consumers depend on this late binding; nothing here snapshots.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
enum FileSource {
    Path(PathBuf),
    Collection(FileCollection),
}

/// Live, ordered collection of file paths
#[derive(Debug, Clone, Default)]
pub struct FileCollection {
    sources: Arc<RwLock<Vec<FileSource>>>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal path
    pub fn append(&self, path: impl Into<PathBuf>) {
        self.sources
            .write()
            .expect("file collection lock poisoned")
            .push(FileSource::Path(path.into()));
    }

    /// Include another collection as a live reference, not a snapshot.
    ///
    /// Paths appended to `other` after this call are still visible here.
    pub fn include(&self, other: &FileCollection) {
        self.sources
            .write()
            .expect("file collection lock poisoned")
            .push(FileSource::Collection(other.clone()));
    }

    /// Resolve to a flat list of paths, depth-first, first occurrence wins
    pub fn files(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut visited = Vec::new();
        let mut result = Vec::new();
        self.collect_into(&mut seen, &mut visited, &mut result);
        result
    }

    pub fn is_empty(&self) -> bool {
        self.files().is_empty()
    }

    fn collect_into(
        &self,
        seen: &mut HashSet<PathBuf>,
        visited: &mut Vec<*const RwLock<Vec<FileSource>>>,
        result: &mut Vec<PathBuf>,
    ) {
        let ptr = Arc::as_ptr(&self.sources);
        if visited.contains(&ptr) {
            return;
        }
        visited.push(ptr);
        let sources = self.sources.read().expect("file collection lock poisoned");
        for source in sources.iter() {
            match source {
                FileSource::Path(path) => {
                    if seen.insert(path.clone()) {
                        result.push(path.clone());
                    }
                }
                FileSource::Collection(collection) => {
                    collection.collect_into(seen, visited, result);
                }
            }
        }
    }
}

/// Compilation unit descriptor handed to a test suite by its owner
///
/// The collections are live handles; mutating them through any clone is
/// visible to every view wired off this source set.
#[derive(Debug, Clone)]
pub struct SourceSet {
    name: String,
    output_classes_dirs: FileCollection,
    runtime_classpath: FileCollection,
}

impl SourceSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_classes_dirs: FileCollection::new(),
            runtime_classpath: FileCollection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directories holding this source set's compiled output
    pub fn output_classes_dirs(&self) -> &FileCollection {
        &self.output_classes_dirs
    }

    pub fn runtime_classpath(&self) -> &FileCollection {
        &self.runtime_classpath
    }
}
