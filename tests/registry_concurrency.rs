//! Registry behavior under concurrent project construction.
//!
//! Independent subtrees may be built by different threads; every
//! registration must be visible to lookups from any thread afterwards.

use std::sync::Arc;
use std::thread;

use mason::{default_project_factory, ProjectDescriptor, ProjectPath, ProjectRegistry};

const THREADS: usize = 8;
const PROJECTS_PER_THREAD: usize = 25;

#[test]
fn concurrent_registrations_are_all_visible() {
    let registry = Arc::new(ProjectRegistry::new());
    let factory = Arc::new(default_project_factory(Arc::clone(&registry)));

    let root = factory
        .create_project(
            &ProjectDescriptor::new("root", std::path::PathBuf::from("."), None),
            None,
            Vec::new(),
        )
        .unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let factory = Arc::clone(&factory);
            let root = Arc::clone(&root);
            thread::spawn(move || {
                // Each thread owns one subtree; sibling subtrees race on the
                // shared registry and the root's child set.
                let subtree = factory
                    .create_project(
                        &ProjectDescriptor::new(
                            format!("subtree{t}"),
                            std::path::PathBuf::from(format!("subtree{t}")),
                            None,
                        ),
                        Some(&root),
                        Vec::new(),
                    )
                    .unwrap();
                for i in 0..PROJECTS_PER_THREAD {
                    factory
                        .create_project(
                            &ProjectDescriptor::new(
                                format!("module{i}"),
                                std::path::PathBuf::from(format!("subtree{t}/module{i}")),
                                None,
                            ),
                            Some(&subtree),
                            Vec::new(),
                        )
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 1 + THREADS + THREADS * PROJECTS_PER_THREAD);

    // Lookups succeed from the main thread...
    for t in 0..THREADS {
        let subtree_path = ProjectPath::root().child(format!("subtree{t}"));
        assert!(registry.project(&subtree_path).is_some());
        for i in 0..PROJECTS_PER_THREAD {
            let path = subtree_path.child(format!("module{i}"));
            let node = registry.project(&path).expect("registered node is found");
            assert_eq!(node.parent(), Some(&subtree_path));
        }
    }

    // ...and from a fresh reader thread.
    let reader_registry = Arc::clone(&registry);
    thread::spawn(move || {
        let path = ProjectPath::root().child("subtree0").child("module0");
        assert!(reader_registry.project(&path).is_some());
        assert_eq!(
            reader_registry.all_projects().len(),
            1 + THREADS + THREADS * PROJECTS_PER_THREAD
        );
    })
    .join()
    .unwrap();

    // Every subtree ended up with the full set of children.
    for child in root.children() {
        assert_eq!(child.children().len(), PROJECTS_PER_THREAD);
    }
}
