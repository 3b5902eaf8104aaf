//! Set algebra between the system closure and a manifest.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::closure::closure;
use crate::error::{NodePkgError, Result};
use crate::manifest::{read_manifest, ManifestDeps};
use crate::query::DependencySource;

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Every node module the system packages pull in.
    #[default]
    Sysmodules,
    /// Manifest dependencies already provided by the system.
    Intersect,
    /// Production dependencies the system does not provide.
    DiffProd,
    /// Development dependencies the system does not provide.
    DiffDev,
}

impl Operation {
    /// Whether this operation reads a manifest.
    pub fn needs_manifest(self) -> bool {
        !matches!(self, Self::Sysmodules)
    }

    /// Combine the system closure with the manifest's declared packages.
    pub fn apply(self, system: &BTreeSet<String>, manifest: &ManifestDeps) -> BTreeSet<String> {
        match self {
            Self::Sysmodules => system.clone(),
            Self::Intersect => manifest.all().intersection(system).cloned().collect(),
            Self::DiffProd => manifest.production.difference(system).cloned().collect(),
            Self::DiffDev => manifest.development.difference(system).cloned().collect(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sysmodules => "sysmodules",
            Self::Intersect => "intersect",
            Self::DiffProd => "diff prod",
            Self::DiffDev => "diff dev",
        };
        f.write_str(name)
    }
}

/// Run `operation` against the system rooted at `seeds`.
///
/// The manifest is read before any package is queried, so a bad manifest
/// fails fast. `manifest` is ignored by [`Operation::Sysmodules`].
pub fn run<S>(
    source: &S,
    seeds: &[String],
    operation: Operation,
    manifest: Option<&Path>,
) -> Result<BTreeSet<String>>
where
    S: DependencySource + ?Sized,
{
    debug!("Running {} operation", operation);

    let declared = if operation.needs_manifest() {
        let path = manifest.ok_or_else(|| NodePkgError::MissingManifest {
            operation: operation.to_string(),
        })?;
        read_manifest(path)?
    } else {
        ManifestDeps::default()
    };

    let system = closure(source, seeds)?;
    Ok(operation.apply(&system, &declared))
}
