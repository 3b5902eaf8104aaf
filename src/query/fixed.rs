//! In-memory dependency source.

use std::collections::{BTreeMap, BTreeSet};

use super::DependencySource;
use crate::error::{NodePkgError, Result};
use crate::naming::is_node_package;

/// Dependency source backed by a fixed table.
///
/// Packages not in the table have no dependencies. Non node module entries
/// are filtered out on lookup, mirroring [`super::parse_depends`]. Packages
/// registered with [`StaticSource::with_failure`] report a query failure.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    packages: BTreeMap<String, Vec<String>>,
    failing: BTreeSet<String>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the direct dependencies of `package`.
    pub fn with_package<I, S>(mut self, package: &str, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages
            .insert(package.to_string(), deps.into_iter().map(Into::into).collect());
        self
    }

    /// Make lookups of `package` fail.
    pub fn with_failure(mut self, package: &str) -> Self {
        self.failing.insert(package.to_string());
        self
    }
}

impl DependencySource for StaticSource {
    fn direct_dependencies(&self, package: &str) -> Result<BTreeSet<String>> {
        if self.failing.contains(package) {
            return Err(NodePkgError::QueryFailure {
                package: package.to_string(),
                message: "lookup configured to fail".to_string(),
            });
        }

        Ok(self
            .packages
            .get(package)
            .into_iter()
            .flatten()
            .filter(|dep| is_node_package(dep))
            .cloned()
            .collect())
    }
}
