//! node-pkg-info - reconcile system-packaged node modules with package.json.
//!
//! Distribution packaging of node projects needs to know which of a
//! project's npm dependencies are already shipped as OS packages
//! (`node-<module>`) and which must be fetched from the npm registry. This
//! crate computes the set of node modules the system packages pull in and
//! combines it with the dependencies a `package.json` declares.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`closure`] - Transitive dependency closure over the package database
//! - [`config`] - Seed packages, query command and install root
//! - [`error`] - Error types and result aliases
//! - [`format`] - Output layouts
//! - [`manifest`] - `package.json` dependency extraction
//! - [`naming`] - Module name to package name mapping
//! - [`operation`] - Set algebra between system and manifest
//! - [`query`] - Direct dependency lookup
//!
//! # Example
//!
//! ```
//! use node_pkg_info::closure::closure;
//! use node_pkg_info::query::StaticSource;
//!
//! let source = StaticSource::new()
//!     .with_package("npm", ["node-foo", "node-bar"])
//!     .with_package("node-foo", ["node-baz"]);
//! let modules = closure(&source, &["npm".to_string()]).unwrap();
//! assert_eq!(modules.len(), 3);
//! ```

pub mod cli;
pub mod closure;
pub mod config;
pub mod error;
pub mod format;
pub mod manifest;
pub mod naming;
pub mod operation;
pub mod query;

pub use error::{NodePkgError, Result};
