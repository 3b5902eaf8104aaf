//! The report command: compute the requested set and render it.

use tracing::debug;

use super::args::Cli;
use crate::config::Settings;
use crate::error::{NodePkgError, Result};
use crate::format::format;
use crate::operation::run;
use crate::query::DependencySource;

/// One resolved invocation.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    cli: &'a Cli,
    settings: Settings,
}

impl<'a> Report<'a> {
    /// Validate the arguments and resolve settings.
    ///
    /// A manifest path that does not name a file is rejected here, before
    /// any other work.
    pub fn new(cli: &'a Cli) -> Result<Self> {
        if let Some(path) = &cli.package_manifest_path {
            if !path.is_file() {
                return Err(NodePkgError::ManifestNotFound { path: path.clone() });
            }
        }

        let settings = Settings::resolve(
            &cli.seeds,
            cli.query_command.as_deref(),
            cli.install_root.clone(),
        )?;
        debug!("Resolved settings: {:?}", settings);

        Ok(Self { cli, settings })
    }

    /// Settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Produce the report text using the configured query command.
    pub fn execute(&self) -> Result<String> {
        self.execute_with(&self.settings.query)
    }

    /// Produce the report text using `source` for dependency lookups.
    pub fn execute_with<S>(&self, source: &S) -> Result<String>
    where
        S: DependencySource + ?Sized,
    {
        let packages = run(
            source,
            &self.settings.seeds,
            self.cli.operation(),
            self.cli.package_manifest_path.as_deref(),
        )?;
        Ok(format(&packages, self.cli.format, &self.settings.install_root))
    }
}
