//! Launcher configuration.
//!
//! The command line belongs to the driver, so the launcher is configured only
//! through the environment.

use crate::error::DelegateError;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// `tracing` filter directive for the launcher's own logs.
pub const LOG_ENV: &str = "SPARK_SQL_SCRIPT_CLI_LOG";
/// Explicit path of the `spark-class` launcher script.
pub const SPARK_CLASS_ENV: &str = "SPARK_SQL_SCRIPT_CLI_SPARK_CLASS";
pub const SPARK_HOME_ENV: &str = "SPARK_HOME";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[cfg(windows)]
pub const SPARK_CLASS: &str = "spark-class.cmd";
#[cfg(not(windows))]
pub const SPARK_CLASS: &str = "spark-class";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    pub spark_class: Option<PathBuf>,
    pub spark_home: Option<PathBuf>,
    /// Search path used to find `spark-class` when nothing more specific is set.
    pub path: Option<OsString>,
    pub log_filter: String,
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build a configuration from any variable source. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            spark_class: var(SPARK_CLASS_ENV).map(PathBuf::from),
            spark_home: var(SPARK_HOME_ENV).map(PathBuf::from),
            path: var("PATH"),
            log_filter: var(LOG_ENV)
                .and_then(|value| value.into_string().ok())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Locate `spark-class`:
    /// 1) an explicit path is used as given, existing or not;
    /// 2) otherwise `$SPARK_HOME/bin/spark-class`, if that file exists;
    /// 3) otherwise the first `spark-class` on the search path.
    ///
    /// Fails with every location searched if none of them has it.
    pub fn resolve_spark_class(&self) -> Result<PathBuf, DelegateError> {
        if let Some(explicit) = &self.spark_class {
            return Ok(explicit.clone());
        }

        let mut search_path = Vec::new();

        if let Some(home) = &self.spark_home {
            let candidate = home.join("bin").join(SPARK_CLASS);
            if candidate.is_file() {
                return Ok(candidate);
            }
            debug!("No {} under SPARK_HOME at {}", SPARK_CLASS, candidate.display());
            search_path.push(candidate);
        }

        let cwd = std::env::current_dir().unwrap_or_default();
        match which::which_in(SPARK_CLASS, self.path.as_ref(), cwd) {
            Ok(found) => Ok(found),
            Err(e) => {
                debug!("{} not found on PATH: {}", SPARK_CLASS, e);
                search_path.push(PathBuf::from(SPARK_CLASS));
                Err(DelegateError::NotFound { search_path })
            }
        }
    }
}
