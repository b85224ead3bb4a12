//! Remote app directory: the lookup used to turn a human-chosen app
//! selector into durable identifiers.

pub mod http;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

pub use http::HttpDirectoryClient;

/// Criteria for an app lookup. Unset fields do not constrain the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppFilter {
    pub group_id: Option<String>,
    /// Client app id, durable id or name.
    pub app: Option<String>,
}

impl AppFilter {
    /// Whether `record` satisfies this filter.
    pub fn matches(&self, record: &AppRecord) -> bool {
        if let Some(group_id) = &self.group_id {
            if &record.group_id != group_id {
                return false;
            }
        }
        match &self.app {
            Some(app) => &record.client_app_id == app || &record.id == app || &record.name == app,
            None => true,
        }
    }
}

impl std::fmt::Display for AppFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.group_id, &self.app) {
            (Some(group), Some(app)) => write!(f, "app '{app}' in project '{group}'"),
            (None, Some(app)) => write!(f, "app '{app}'"),
            (Some(group), None) => write!(f, "any app in project '{group}'"),
            (None, None) => write!(f, "any app"),
        }
    }
}

/// An app as listed by the remote directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub group_id: String,
    pub client_app_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The request never produced an HTTP response.
    #[error("Directory request failed: {0}")]
    #[diagnostic(code(appsync::directory::request))]
    Request(String),

    #[error("Directory returned HTTP {status}: {message}")]
    #[diagnostic(code(appsync::directory::status))]
    Status { status: u16, message: String },

    #[error("Could not decode directory response: {0}")]
    #[diagnostic(code(appsync::directory::decode))]
    Decode(String),
}

/// Lists apps known to the remote directory.
pub trait DirectoryClient {
    fn find_apps(&self, filter: &AppFilter) -> Result<Vec<AppRecord>, DirectoryError>;
}

/// Outcome of a lookup that must select exactly one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Lookup<T> {
    pub fn from_vec(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Lookup::None,
            1 => match items.pop() {
                Some(item) => Lookup::One(item),
                None => Lookup::None,
            },
            _ => Lookup::Many(items),
        }
    }
}
