use crate::errors::{AppSyncError, Result};
use std::path::{Path, PathBuf};

/// The invoking user's environment, as seen by a single command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Absolute directory the command was started from.
    pub working_directory: PathBuf,
    /// Home directory, when one can be determined.
    pub home_directory: Option<PathBuf>,
}

impl Profile {
    pub fn new(working_directory: impl Into<PathBuf>, home_directory: Option<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
            home_directory,
        }
    }

    /// Build a profile from the process environment.
    pub fn from_env() -> Result<Self> {
        let working_directory = std::env::current_dir().map_err(|e| {
            AppSyncError::Config(format!("Could not determine working directory: {e}"))
        })?;
        let home_directory = dirs::home_dir();
        if home_directory.is_none() {
            tracing::debug!("no home directory found; '~' paths will not expand");
        }
        Ok(Self::new(working_directory, home_directory))
    }

    pub fn home(&self) -> Option<&Path> {
        self.home_directory.as_deref()
    }
}
