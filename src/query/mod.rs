//! Direct dependency lookup against the system package database.
//!
//! - [`DependencySource`] - capability trait used by the closure engine
//! - [`AptCache`] - runs the package query command as a child process
//! - [`StaticSource`] - fixed in-memory dependency table
//!
//! # Example
//!
//! ```
//! use node_pkg_info::query::{DependencySource, StaticSource};
//!
//! let source = StaticSource::new().with_package("npm", ["node-glob", "libc6"]);
//! let deps = source.direct_dependencies("npm").unwrap();
//! assert_eq!(deps.into_iter().collect::<Vec<_>>(), vec!["node-glob"]);
//! ```

pub mod apt;
pub mod fixed;

pub use apt::AptCache;
pub use fixed::StaticSource;

use std::collections::BTreeSet;

use crate::error::Result;
use crate::naming::is_node_package;

/// Line prefix marking a hard dependency in `apt-cache depends` output.
const DEPENDS_PREFIX: &str = "  Depends: ";

/// Anything that can report the direct dependencies of a package.
pub trait DependencySource {
    /// Direct node module dependencies of `package`.
    ///
    /// A package without node module dependencies yields an empty set.
    fn direct_dependencies(&self, package: &str) -> Result<BTreeSet<String>>;
}

/// Extract the node module dependencies from query command output.
///
/// Only plain `Depends:` records count. Alternatives (`|Depends:`), weaker
/// relations and virtual packages (`<name>`) are skipped.
pub fn parse_depends(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix(DEPENDS_PREFIX))
        .map(str::trim_end)
        .filter(|dep| is_node_package(dep))
        .map(str::to_string)
        .collect()
}
