//! Mapping between bare node module names and OS package names.
//!
//! System packages that wrap a node module are named `node-<module>`. No
//! escaping is applied in either direction, so a module name containing
//! characters that are illegal in package names is carried through as is.

/// Prefix that marks an OS package as a packaged node module.
pub const NODE_PREFIX: &str = "node-";

/// Whether `package` follows the node module naming convention.
pub fn is_node_package(package: &str) -> bool {
    package.starts_with(NODE_PREFIX)
}

/// OS package name for a bare module name.
pub fn package_name(module: &str) -> String {
    format!("{NODE_PREFIX}{module}")
}

/// Bare module name for an OS package name.
///
/// Names without the prefix are returned unchanged.
pub fn module_name(package: &str) -> &str {
    package.strip_prefix(NODE_PREFIX).unwrap_or(package)
}
