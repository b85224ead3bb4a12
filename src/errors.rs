use crate::directory::{AppFilter, DirectoryError};
use crate::project::{AppConfigVersion, ProjectError};
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while resolving the inputs of a pull.
///
/// Every variant is terminal: the resolver never retries or guesses, and
/// callers match on the variant rather than on the message.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Project not found: no app project exists at or above the target directory")]
    #[diagnostic(
        code(appsync::project_not_found),
        help("run the command from inside a project, or pass --local <dir> to pull into a new one")
    )]
    ProjectNotFound,

    #[error("Config version mismatch: --config-version is {flag} but the project declares {project}")]
    #[diagnostic(
        code(appsync::config_version_mismatch),
        help("omit --config-version to use the project's version")
    )]
    ConfigVersionMismatch {
        flag: AppConfigVersion,
        project: AppConfigVersion,
    },

    #[error("App not found: no app matches {filter}")]
    #[diagnostic(code(appsync::app_not_found))]
    AppNotFound { filter: AppFilter },

    #[error("Ambiguous app: {} apps match {filter}", .candidates.len())]
    #[diagnostic(
        code(appsync::ambiguous_app),
        help("pass --project <group id> or a durable app id to select exactly one app")
    )]
    AmbiguousApp {
        filter: AppFilter,
        candidates: Vec<String>,
    },

    #[error("Could not determine the home directory needed to expand '~'")]
    #[diagnostic(code(appsync::home_dir))]
    HomeDirUnavailable,

    #[error(transparent)]
    #[diagnostic(code(appsync::project))]
    Project(#[from] ProjectError),

    #[error(transparent)]
    #[diagnostic(code(appsync::directory))]
    Directory(#[from] DirectoryError),
}

#[derive(Error, Diagnostic, Debug)]
pub enum AppSyncError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(appsync::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(appsync::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(appsync::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppSyncError>;
