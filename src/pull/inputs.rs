use crate::directory::{AppFilter, AppRecord, DirectoryClient, DirectoryError, Lookup};
use crate::errors::ResolveError;
use crate::paths;
use crate::profile::Profile;
use crate::project::{AppConfigVersion, ProjectDescriptor, ProjectStateReader};
use crate::pull::reconcile::{reconcile, Precedence, Reconciled};
use serde::Serialize;
use std::path::PathBuf;

/// Parameters of a single pull, filled from flags and then resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullInputs {
    /// Directory to pull into. Empty means the working directory.
    pub target: PathBuf,
    /// App to pull from, when it is not the app bound to `target`.
    pub from: Option<String>,
    /// Group id scoping the `from` lookup.
    pub project: Option<String>,
    pub app_version: Option<AppConfigVersion>,
}

/// Durable identifiers of the app a pull reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSource {
    pub group_id: String,
    pub app_id: String,
}

impl PullInputs {
    /// Resolve the inputs against the filesystem and the app directory.
    ///
    /// On success `target` is absolute and normalized, `app_version` is set
    /// and agrees with any existing project, and the returned source is
    /// `None` only when no app to pull from was named or inferred. On error
    /// `self` is left untouched.
    pub fn resolve(
        &mut self,
        profile: &Profile,
        projects: &dyn ProjectStateReader,
        directory: &dyn DirectoryClient,
    ) -> Result<Option<ResolvedSource>, ResolveError> {
        let mut resolved = self.clone();
        let explicit_target = !self.target.as_os_str().is_empty();

        resolved.target =
            paths::normalize(&self.target, profile.home(), &profile.working_directory)?;

        // An explicit target is never redirected to an enclosing project.
        let project = projects.read(&resolved.target)?.filter(|project| {
            let at_target = project.root_dir == resolved.target;
            if explicit_target && !at_target {
                tracing::debug!(
                    dir = %resolved.target.display(),
                    enclosing = %project.root_dir.display(),
                    "ignoring enclosing project for explicit target"
                );
            }
            !explicit_target || at_target
        });

        match project {
            Some(project) => resolved.adopt_project(&project)?,
            None if explicit_target => {
                tracing::debug!(
                    dir = %resolved.target.display(),
                    "no project at explicit target; a new project will be created"
                );
                if resolved.app_version.is_none() {
                    resolved.app_version = Some(AppConfigVersion::DEFAULT);
                }
            }
            None => return Err(ResolveError::ProjectNotFound),
        }

        let source = resolved.resolve_from(directory)?;
        *self = resolved;
        Ok(source)
    }

    /// Fill unset fields from the project and reject conflicting ones.
    fn adopt_project(&mut self, project: &ProjectDescriptor) -> Result<(), ResolveError> {
        self.target = project.root_dir.clone();

        let version = reconcile(
            self.app_version,
            Some(project.config_version),
            Precedence::Strict,
        );
        tracing::debug!(field = "app_version", source = version.source(), "reconciled");
        self.app_version = version
            .into_value()
            .map_err(|(flag, project)| ResolveError::ConfigVersionMismatch { flag, project })?;

        let from = reconcile(self.from.take(), project.app_id.clone(), Precedence::FlagWins);
        tracing::debug!(field = "from", source = from.source(), "reconciled");
        let from_project = matches!(from, Reconciled::Project(_));
        self.from = from.into_value().unwrap_or_else(|(flag, _)| Some(flag));

        // The project's group only scopes a lookup for the project's own app.
        if from_project {
            let group = reconcile(
                self.project.take(),
                project.group_id.clone(),
                Precedence::FlagWins,
            );
            tracing::debug!(field = "project", source = group.source(), "reconciled");
            self.project = group.into_value().unwrap_or_else(|(flag, _)| Some(flag));
        }
        Ok(())
    }

    /// Translate the `from` selector into durable identifiers.
    ///
    /// Returns `None` without querying the directory when `from` is unset.
    /// Anything other than exactly one matching app is an error.
    pub fn resolve_from(
        &self,
        directory: &dyn DirectoryClient,
    ) -> Result<Option<ResolvedSource>, ResolveError> {
        let Some(app) = non_empty(&self.from) else {
            return Ok(None);
        };
        let filter = AppFilter {
            group_id: non_empty(&self.project).map(str::to_string),
            app: Some(app.to_string()),
        };

        match Lookup::from_vec(directory.find_apps(&filter)?) {
            Lookup::One(record) => source_of(record).map(Some),
            Lookup::None => Err(ResolveError::AppNotFound { filter }),
            Lookup::Many(records) => {
                tracing::debug!(%filter, candidates = records.len(), "ambiguous app lookup");
                Err(ResolveError::AmbiguousApp {
                    filter,
                    candidates: records
                        .iter()
                        .map(|r| format!("{} ({}) in project {}", r.client_app_id, r.id, r.group_id))
                        .collect(),
                })
            }
        }
    }
}

fn source_of(record: AppRecord) -> Result<ResolvedSource, ResolveError> {
    if record.id.is_empty() || record.group_id.is_empty() {
        return Err(DirectoryError::Decode(format!(
            "app record '{}' is missing its _id or group_id",
            record.client_app_id
        ))
        .into());
    }
    Ok(ResolvedSource {
        group_id: record.group_id,
        app_id: record.id,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
