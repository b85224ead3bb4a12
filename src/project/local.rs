use super::{AppConfigVersion, ProjectDescriptor, ProjectError, ProjectLookup, ProjectStateReader};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// JSON body of a project descriptor file. Every field is optional on disk.
#[derive(Debug, Clone, Deserialize, Default)]
struct DescriptorFile {
    config_version: Option<u32>,
    app_id: Option<String>,
    name: Option<String>,
    group_id: Option<String>,
}

/// Reads project descriptors from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProjectReader {
    pub lookup: ProjectLookup,
}

impl LocalProjectReader {
    pub fn new(lookup: ProjectLookup) -> Self {
        Self { lookup }
    }

    /// Look for a descriptor directly inside `dir`, newest file name first.
    ///
    /// The file name only locates the project. A declared `config_version`
    /// wins over the one the name implies.
    fn read_dir(&self, dir: &Path) -> Result<Option<ProjectDescriptor>, ProjectError> {
        for version in AppConfigVersion::ALL {
            let path = dir.join(version.config_file_name());
            if path.is_file() {
                return load_descriptor(dir, &path, version).map(Some);
            }
        }
        Ok(None)
    }
}

impl ProjectStateReader for LocalProjectReader {
    fn read(&self, dir: &Path) -> Result<Option<ProjectDescriptor>, ProjectError> {
        let mut current = dir.to_path_buf();
        loop {
            if let Some(project) = self.read_dir(&current)? {
                tracing::debug!(
                    file = %project.config_file.display(),
                    name = project.name.as_deref().unwrap_or("-"),
                    version = %project.config_version,
                    "found app project"
                );
                return Ok(Some(project));
            }
            if self.lookup == ProjectLookup::Exact || !current.pop() {
                break;
            }
        }
        tracing::debug!(dir = %dir.display(), lookup = %self.lookup, "no app project found");
        Ok(None)
    }
}

fn load_descriptor(
    root: &Path,
    path: &Path,
    implied: AppConfigVersion,
) -> Result<ProjectDescriptor, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProjectError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let file: DescriptorFile =
        serde_json::from_str(&content).map_err(|e| ProjectError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let config_version = match file.config_version {
        None => implied,
        Some(n) => AppConfigVersion::from_u32(n).ok_or_else(|| ProjectError::Malformed {
            path: path.to_path_buf(),
            message: format!("unsupported config_version {n}"),
        })?,
    };

    Ok(ProjectDescriptor {
        root_dir: root.to_path_buf(),
        config_file: PathBuf::from(path),
        config_version,
        app_id: non_empty(file.app_id),
        name: non_empty(file.name),
        group_id: non_empty(file.group_id),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
