//! Runtime settings.
//!
//! Defaults reproduce a stock Debian system: closure rooted at `npm`,
//! dependencies queried with `apt-cache depends`, modules installed under
//! `usr/lib/nodejs`. Each value can be overridden from the command line or
//! the environment (see [`crate::cli::Cli`]).

use std::path::PathBuf;

use crate::error::Result;
use crate::query::apt::DEFAULT_QUERY_COMMAND;
use crate::query::AptCache;

/// Package the system closure starts from by default.
pub const DEFAULT_SEED: &str = "npm";

/// Path segment node modules are installed under by default.
pub const DEFAULT_INSTALL_ROOT: &str = "usr/lib/nodejs";

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root packages of the system closure.
    pub seeds: Vec<String>,
    /// Command used to query direct dependencies.
    pub query: AptCache,
    /// Directory prefix for the `install` output style.
    pub install_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seeds: vec![DEFAULT_SEED.to_string()],
            query: AptCache::default(),
            install_root: PathBuf::from(DEFAULT_INSTALL_ROOT),
        }
    }
}

impl Settings {
    /// Build settings, falling back to defaults for anything unset.
    ///
    /// Blank seed entries are dropped; a blank query command is an error.
    pub fn resolve(
        seeds: &[String],
        query_command: Option<&str>,
        install_root: Option<PathBuf>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let seeds: Vec<String> = seeds
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let query = match query_command {
            Some(command) => AptCache::from_command_line(command).ok_or_else(|| {
                anyhow::anyhow!("query command is empty (default: {DEFAULT_QUERY_COMMAND})")
            })?,
            None => defaults.query,
        };

        Ok(Self {
            seeds: if seeds.is_empty() { defaults.seeds } else { seeds },
            query,
            install_root: install_root.unwrap_or(defaults.install_root),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodePkgError;

    #[test]
    fn defaults_match_debian_layout() {
        let settings = Settings::default();
        assert_eq!(settings.seeds, vec!["npm".to_string()]);
        assert_eq!(settings.query.program(), "apt-cache");
        assert_eq!(settings.install_root, PathBuf::from("usr/lib/nodejs"));
    }

    #[test]
    fn unset_values_fall_back_to_defaults() {
        let settings = Settings::resolve(&[], None, None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn overrides_are_applied() {
        let seeds = vec!["npm".to_string(), "node-gyp".to_string()];
        let settings = Settings::resolve(
            &seeds,
            Some("/usr/local/bin/fake-cache depends"),
            Some(PathBuf::from("usr/share/nodejs")),
        )
        .unwrap();

        assert_eq!(settings.seeds, seeds);
        assert_eq!(settings.query.program(), "/usr/local/bin/fake-cache");
        assert_eq!(settings.query.args(), ["depends".to_string()]);
        assert_eq!(settings.install_root, PathBuf::from("usr/share/nodejs"));
    }

    #[test]
    fn blank_seeds_are_dropped() {
        let seeds = vec![" ".to_string(), " node-gyp ".to_string()];
        let settings = Settings::resolve(&seeds, None, None).unwrap();
        assert_eq!(settings.seeds, vec!["node-gyp".to_string()]);
    }

    #[test]
    fn blank_query_command_is_rejected() {
        let err = Settings::resolve(&[], Some("  "), None).unwrap_err();
        assert!(matches!(err, NodePkgError::Other(_)));
    }
}
