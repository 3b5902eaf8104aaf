//! CLI argument definitions.
//!
//! The tool has a single command; every flag lives on [`Cli`].

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::format::OutputStyle;
use crate::operation::Operation;

/// Report which node modules a system provides, or which it lacks for a
/// project's package.json.
#[derive(Debug, Parser)]
#[command(name = "node-pkg-info")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the package.json file
    pub package_manifest_path: Option<PathBuf>,

    /// Print the intersection of system modules and package.json modules
    #[arg(short, long)]
    pub intersect: bool,

    /// Print the set difference of (NODE MODULES) - (SYSTEM MODULES)
    #[arg(short = 'd', long = "diff", value_enum, value_name = "KIND")]
    pub diff: Option<DiffKind>,

    /// How to format the module names
    #[arg(short, long, value_enum, default_value_t = OutputStyle::Node)]
    pub format: OutputStyle,

    /// System package the closure starts from (repeatable, default: npm)
    #[arg(
        long = "seed",
        env = "NODE_PKG_INFO_SEEDS",
        value_delimiter = ',',
        value_name = "PACKAGE"
    )]
    pub seeds: Vec<String>,

    /// Command printing a package's dependencies (default: apt-cache depends)
    #[arg(long, env = "NODE_PKG_INFO_QUERY", value_name = "COMMAND")]
    pub query_command: Option<String>,

    /// Directory prefix for the install format (default: usr/lib/nodejs)
    #[arg(long, env = "NODE_PKG_INFO_INSTALL_ROOT", value_name = "DIR")]
    pub install_root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Which manifest dependencies `--diff` compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffKind {
    /// `dependencies`
    Prod,
    /// `devDependencies`
    Dev,
}

impl Cli {
    /// Operation selected by the flags.
    ///
    /// `--intersect` takes precedence over `--diff`; with neither the
    /// system modules are listed.
    pub fn operation(&self) -> Operation {
        match (self.intersect, self.diff) {
            (true, _) => Operation::Intersect,
            (false, Some(DiffKind::Prod)) => Operation::DiffProd,
            (false, Some(DiffKind::Dev)) => Operation::DiffDev,
            (false, None) => Operation::Sysmodules,
        }
    }
}
