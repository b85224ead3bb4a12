pub mod local;

use clap::ValueEnum;
use miette::Diagnostic;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use local::LocalProjectReader;

/// On-disk layout version of an app project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppConfigVersion {
    V20180301,
    V20200603,
    V20210101,
}

impl AppConfigVersion {
    /// Version used for projects that do not exist yet.
    pub const DEFAULT: AppConfigVersion = AppConfigVersion::V20210101;

    /// All versions, newest first.
    pub const ALL: [AppConfigVersion; 3] = [
        AppConfigVersion::V20210101,
        AppConfigVersion::V20200603,
        AppConfigVersion::V20180301,
    ];

    pub fn as_u32(self) -> u32 {
        match self {
            AppConfigVersion::V20180301 => 20180301,
            AppConfigVersion::V20200603 => 20200603,
            AppConfigVersion::V20210101 => 20210101,
        }
    }

    pub fn from_u32(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_u32() == n)
    }

    /// Name of the descriptor file a project of this version keeps at its root.
    pub fn config_file_name(self) -> &'static str {
        match self {
            AppConfigVersion::V20210101 => "app_config.json",
            AppConfigVersion::V20200603 => "config.json",
            AppConfigVersion::V20180301 => "app.json",
        }
    }
}

impl std::str::FromStr for AppConfigVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_u32)
            .ok_or_else(|| {
                format!("unsupported config version: {s} (expected 20210101, 20200603 or 20180301)")
            })
    }
}

impl std::fmt::Display for AppConfigVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl Serialize for AppConfigVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_u32())
    }
}

/// What a project directory declares about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Directory holding the descriptor file.
    pub root_dir: PathBuf,
    pub config_file: PathBuf,
    pub config_version: AppConfigVersion,
    /// Client app id the project is bound to.
    pub app_id: Option<String>,
    pub name: Option<String>,
    pub group_id: Option<String>,
}

/// Whether a lookup may use a project found in a parent directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectLookup {
    /// Only the directory itself.
    Exact,
    /// The directory, then each of its ancestors.
    #[default]
    Enclosing,
}

impl std::str::FromStr for ProjectLookup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(ProjectLookup::Exact),
            "enclosing" => Ok(ProjectLookup::Enclosing),
            _ => Err(format!("unknown project lookup policy: {s}")),
        }
    }
}

impl std::fmt::Display for ProjectLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectLookup::Exact => write!(f, "exact"),
            ProjectLookup::Enclosing => write!(f, "enclosing"),
        }
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Could not read project file {path}: {message}")]
    #[diagnostic(code(appsync::project::unreadable))]
    Unreadable { path: PathBuf, message: String },

    #[error("Invalid project file {path}: {message}")]
    #[diagnostic(code(appsync::project::malformed))]
    Malformed { path: PathBuf, message: String },
}

/// Source of truth for the project bound to a directory.
pub trait ProjectStateReader {
    /// Describe the project at `dir`, or `None` when there is none.
    fn read(&self, dir: &Path) -> Result<Option<ProjectDescriptor>, ProjectError>;
}
