//! Process-backed dependency source.

use std::collections::BTreeSet;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::{parse_depends, DependencySource};
use crate::error::{NodePkgError, Result};

/// Default query command; the package name is appended.
pub const DEFAULT_QUERY_COMMAND: &str = "apt-cache depends";

/// Queries the system package database by running an external command.
///
/// The command is invoked once per package as `<program> <args..> <package>`
/// and its stdout is read as `apt-cache depends` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AptCache {
    program: String,
    args: Vec<String>,
}

impl AptCache {
    /// Create a source running `program` with leading `args`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a whitespace separated command line such as `apt-cache depends`.
    ///
    /// Returns `None` for a blank command line.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self::new(program, words.collect()))
    }

    /// Program that will be executed.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments placed before the package name.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn run(&self, package: &str) -> Result<String> {
        debug!("Running {} {:?} {}", self.program, self.args, package);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(package)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| NodePkgError::QueryFailure {
                package: package.to_string(),
                message: format!("failed to run {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with {}", self.program, output.status),
                detail => format!("{} exited with {}: {}", self.program, output.status, detail),
            };
            return Err(NodePkgError::QueryFailure {
                package: package.to_string(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for AptCache {
    fn default() -> Self {
        Self::new("apt-cache", vec!["depends".to_string()])
    }
}

impl DependencySource for AptCache {
    fn direct_dependencies(&self, package: &str) -> Result<BTreeSet<String>> {
        let stdout = self.run(package)?;
        let deps = parse_depends(&stdout);
        trace!("{} depends on {:?}", package, deps);
        debug!("{} has {} node module dependencies", package, deps.len());
        Ok(deps)
    }
}
