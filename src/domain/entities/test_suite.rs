//! Test suite entity
//!
//! A named, lazily-populated collection of test targets, each wired to the
//! suite's source-set outputs at the moment it is added. The wiring uses
//! live file-collection references, so later additions to the source set's
//! outputs still show through existing targets.

use tracing::debug;

use crate::domain::entities::source_set::{FileCollection, SourceSet};
use crate::domain::ports::instantiator::TargetFactory;
use crate::error::MasonResult;

/// A named execution unit within a test suite
#[derive(Debug, Clone)]
pub struct TestSuiteTarget {
    name: String,
    test_classes: FileCollection,
    runtime_classpath: FileCollection,
}

impl TestSuiteTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test_classes: FileCollection::new(),
            runtime_classpath: FileCollection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled classes this target executes (live view)
    pub fn test_classes(&self) -> &FileCollection {
        &self.test_classes
    }

    /// Classpath this target runs with (live view)
    pub fn runtime_classpath(&self) -> &FileCollection {
        &self.runtime_classpath
    }
}

/// Insertion-ordered collection of test-suite targets
#[derive(Debug, Clone, Default)]
pub struct TargetCollection {
    targets: Vec<TestSuiteTarget>,
}

impl TargetCollection {
    pub fn iter(&self) -> impl Iterator<Item = &TestSuiteTarget> {
        self.targets.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TestSuiteTarget> {
        self.targets.iter().find(|target| target.name() == name)
    }

    /// Target names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.targets.iter().map(TestSuiteTarget::name).collect()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    fn push(&mut self, target: TestSuiteTarget) {
        self.targets.push(target);
    }
}

/// A named test suite backed by one source set
#[derive(Debug)]
pub struct TestSuite {
    name: String,
    source_set: SourceSet,
    targets: TargetCollection,
}

impl TestSuite {
    /// Create a suite for `name`, backed by an externally supplied source set
    pub fn new(name: impl Into<String>, source_set: SourceSet) -> Self {
        Self {
            name: name.into(),
            source_set,
            targets: TargetCollection::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_set(&self) -> &SourceSet {
        &self.source_set
    }

    pub fn target_collection(&self) -> &TargetCollection {
        &self.targets
    }

    /// Configure the suite's source set in place
    pub fn sources(&mut self, configure: impl FnOnce(&mut SourceSet)) {
        configure(&mut self.source_set);
    }

    /// Configure the live target collection in place
    pub fn targets(&mut self, configure: impl FnOnce(&mut TargetCollection)) {
        configure(&mut self.targets);
    }

    /// Add a target by name, wired to the suite's current source set.
    ///
    /// The target's views reference the source set's collections live: paths
    /// appended to the outputs afterwards still appear through the target.
    /// Replacing the whole source set later does not rewire existing targets.
    pub fn add_test_target(
        &mut self,
        name: impl Into<String>,
        factory: &dyn TargetFactory,
    ) -> MasonResult<()> {
        let name = name.into();
        let target = factory.new_target(&name)?;
        target.test_classes().include(self.source_set.output_classes_dirs());
        target
            .runtime_classpath()
            .include(self.source_set.runtime_classpath());
        debug!(suite = %self.name, target = %name, "test target added");
        self.targets.push(target);
        Ok(())
    }
}
