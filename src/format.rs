//! Rendering of package sets.

use std::collections::BTreeSet;
use std::path::Path;

use clap::ValueEnum;

use crate::naming::module_name;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputStyle {
    /// OS package names joined with `", "`, ready for a control file.
    Deb,
    /// Bare module names joined with a space.
    #[default]
    Node,
    /// One `<install-root>/<module>` path per line.
    Install,
}

/// Render `packages` in `style`.
///
/// Names come out in lexicographic order of their OS package names.
pub fn format(packages: &BTreeSet<String>, style: OutputStyle, install_root: &Path) -> String {
    match style {
        OutputStyle::Deb => join(packages.iter().map(String::as_str), ", "),
        OutputStyle::Node => join(packages.iter().map(String::as_str).map(module_name), " "),
        OutputStyle::Install => packages
            .iter()
            .map(|p| install_root.join(module_name(p)).display().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn join<'a>(names: impl Iterator<Item = &'a str>, sep: &str) -> String {
    names.collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn root() -> &'static Path {
        Path::new("usr/lib/nodejs")
    }

    #[test]
    fn node_style_strips_prefix_and_sorts() {
        let out = format(&set(&["node-qux", "node-foo"]), OutputStyle::Node, root());
        assert_eq!(out, "foo qux");
    }

    #[test]
    fn node_style_strips_only_the_prefix() {
        let out = format(&set(&["node-node-gyp"]), OutputStyle::Node, root());
        assert_eq!(out, "node-gyp");
    }

    #[test]
    fn deb_style_keeps_package_names() {
        let out = format(&set(&["node-foo", "node-bar"]), OutputStyle::Deb, root());
        assert_eq!(out, "node-bar, node-foo");
    }

    #[cfg(unix)]
    #[test]
    fn install_style_lists_paths() {
        let out = format(&set(&["node-foo", "node-bar"]), OutputStyle::Install, root());
        assert_eq!(out, "usr/lib/nodejs/bar\nusr/lib/nodejs/foo");
    }

    #[test]
    fn empty_set_renders_empty_string() {
        for style in [OutputStyle::Deb, OutputStyle::Node, OutputStyle::Install] {
            assert_eq!(format(&BTreeSet::new(), style, root()), "");
        }
    }

    #[test]
    fn node_is_the_default_style() {
        assert_eq!(OutputStyle::default(), OutputStyle::Node);
    }
}
