//! Transitive closure of node module dependencies.
//!
//! Starting from a seed list, each discovered package is queried exactly
//! once and its node module dependencies are queued for expansion. The
//! visited set makes cyclic dependency graphs terminate.

use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::debug;

use crate::error::Result;
use crate::query::DependencySource;

/// Compute every node module reachable from `seeds`.
///
/// Seed packages appear in the result only if some package depends on them.
/// The first query failure aborts the traversal; no partial set is returned.
pub fn closure<S>(source: &S, seeds: &[String]) -> Result<BTreeSet<String>>
where
    S: DependencySource + ?Sized,
{
    let mut modules = BTreeSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    for seed in seeds {
        if visited.insert(seed.clone()) {
            queue.push_back(seed.clone());
        }
    }

    while let Some(package) = queue.pop_front() {
        debug!("Expanding {}", package);

        for dep in source.direct_dependencies(&package)? {
            if visited.insert(dep.clone()) {
                queue.push_back(dep.clone());
            }
            modules.insert(dep);
        }
    }

    debug!(
        "Closure of {} seed(s) holds {} node modules",
        seeds.len(),
        modules.len()
    );
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodePkgError;
    use crate::query::StaticSource;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn seeds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    /// Counts lookups per package.
    struct Counting<'a> {
        inner: &'a StaticSource,
        calls: RefCell<HashMap<String, usize>>,
    }

    impl DependencySource for Counting<'_> {
        fn direct_dependencies(&self, package: &str) -> Result<BTreeSet<String>> {
            *self
                .calls
                .borrow_mut()
                .entry(package.to_string())
                .or_default() += 1;
            self.inner.direct_dependencies(package)
        }
    }

    #[test]
    fn follows_transitive_dependencies() {
        let source = StaticSource::new()
            .with_package("npm", ["node-foo", "node-bar"])
            .with_package("node-foo", ["node-baz"]);

        let result = closure(&source, &seeds(&["npm"])).unwrap();
        assert_eq!(names(&result), vec!["node-bar", "node-baz", "node-foo"]);
    }

    #[test]
    fn reaches_packages_seen_on_a_single_path() {
        let source = StaticSource::new()
            .with_package("npm", ["node-a"])
            .with_package("node-a", ["node-b"])
            .with_package("node-b", ["node-c"])
            .with_package("node-c", ["node-d"]);

        let result = closure(&source, &seeds(&["npm"])).unwrap();
        assert_eq!(names(&result), vec!["node-a", "node-b", "node-c", "node-d"]);
    }

    #[test]
    fn terminates_on_cycles() {
        let source = StaticSource::new()
            .with_package("npm", ["node-a"])
            .with_package("node-a", ["node-b"])
            .with_package("node-b", ["node-a", "node-c"]);

        let result = closure(&source, &seeds(&["npm"])).unwrap();
        assert_eq!(names(&result), vec!["node-a", "node-b", "node-c"]);
    }

    #[test]
    fn queries_each_package_once() {
        let inner = StaticSource::new()
            .with_package("npm", ["node-a", "node-b"])
            .with_package("node-a", ["node-c"])
            .with_package("node-b", ["node-c"])
            .with_package("node-c", ["node-a"]);
        let source = Counting {
            inner: &inner,
            calls: RefCell::new(HashMap::new()),
        };

        closure(&source, &seeds(&["npm", "npm"])).unwrap();
        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert!(calls.values().all(|&n| n == 1));
    }

    #[test]
    fn seeds_are_excluded_unless_depended_on() {
        let source = StaticSource::new()
            .with_package("npm", ["node-a"])
            .with_package("node-gyp", ["node-a"]);

        let result = closure(&source, &seeds(&["npm", "node-gyp"])).unwrap();
        assert_eq!(names(&result), vec!["node-a"]);

        let source = StaticSource::new()
            .with_package("node-gyp", ["node-a"])
            .with_package("node-a", ["node-gyp"]);
        let result = closure(&source, &seeds(&["node-gyp"])).unwrap();
        assert_eq!(names(&result), vec!["node-a", "node-gyp"]);
    }

    #[test]
    fn multiple_seeds_union() {
        let source = StaticSource::new()
            .with_package("npm", ["node-a"])
            .with_package("node-gyp", ["node-b"]);

        let result = closure(&source, &seeds(&["npm", "node-gyp"])).unwrap();
        assert_eq!(names(&result), vec!["node-a", "node-b"]);
    }

    #[test]
    fn covers_every_direct_dependency_of_reachable_packages() {
        let source = StaticSource::new()
            .with_package("npm", ["node-a", "node-b", "libc6"])
            .with_package("node-a", ["node-c", "node-d"])
            .with_package("node-d", ["node-e", "node-a"])
            .with_package("node-x", ["node-y"]);

        let result = closure(&source, &seeds(&["npm"])).unwrap();
        for package in result.iter().chain(["npm".to_string()].iter()) {
            let direct = source.direct_dependencies(package).unwrap();
            assert!(direct.is_subset(&result), "{package} not covered");
        }
        assert!(!result.contains("node-y"));
        assert!(!result.contains("libc6"));
    }

    #[test]
    fn is_deterministic() {
        let source = StaticSource::new()
            .with_package("npm", ["node-b", "node-a"])
            .with_package("node-b", ["node-c"]);

        let first = closure(&source, &seeds(&["npm"])).unwrap();
        let second = closure(&source, &seeds(&["npm"])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_seed_list_yields_empty_closure() {
        let source = StaticSource::new().with_package("npm", ["node-a"]);
        assert!(closure(&source, &[]).unwrap().is_empty());
    }

    #[test]
    fn query_failure_aborts() {
        let source = StaticSource::new()
            .with_package("npm", ["node-a"])
            .with_failure("node-a");

        let err = closure(&source, &seeds(&["npm"])).unwrap_err();
        match err {
            NodePkgError::QueryFailure { package, .. } => assert_eq!(package, "node-a"),
            other => panic!("expected QueryFailure, got {other:?}"),
        }
    }
}
