//! `package.json` dependency extraction.
//!
//! Only the keys of `dependencies` and `devDependencies` matter; version
//! constraints and every other field are ignored. Each key is converted to
//! its OS package name with [`package_name`].

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{NodePkgError, Result};
use crate::naming::package_name;

/// The parts of a `package.json` document this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Production dependencies, module name to version constraint.
    #[serde(default)]
    pub dependencies: Option<Map<String, Value>>,

    /// Development dependencies, module name to version constraint.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Option<Map<String, Value>>,
}

impl Manifest {
    /// Parse manifest JSON.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// OS package names of the declared dependencies.
    ///
    /// Absent fields produce empty sets.
    pub fn package_sets(&self) -> ManifestDeps {
        ManifestDeps {
            production: to_packages(self.dependencies.as_ref()),
            development: to_packages(self.dev_dependencies.as_ref()),
        }
    }
}

fn to_packages(field: Option<&Map<String, Value>>) -> BTreeSet<String> {
    field
        .into_iter()
        .flat_map(Map::keys)
        .map(|module| package_name(module))
        .collect()
}

/// Declared dependencies mapped to OS package names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDeps {
    /// From `dependencies`.
    pub production: BTreeSet<String>,
    /// From `devDependencies`.
    pub development: BTreeSet<String>,
}

impl ManifestDeps {
    /// Production and development dependencies together.
    pub fn all(&self) -> BTreeSet<String> {
        self.production.union(&self.development).cloned().collect()
    }
}

/// Read the manifest at `path` and extract its dependency sets.
pub fn read_manifest(path: &Path) -> Result<ManifestDeps> {
    if !path.is_file() {
        return Err(NodePkgError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let manifest = Manifest::parse(&content).map_err(|e| NodePkgError::ManifestParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let deps = manifest.package_sets();
    debug!(
        "{} declares {} production and {} development dependencies",
        path.display(),
        deps.production.len(),
        deps.development.len()
    );
    Ok(deps)
}
