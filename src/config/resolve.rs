use crate::config::provenance::{ProvenanceMap, Source};
use crate::config::schema::FileConfig;
use crate::config::ResolvedConfig;
use crate::errors::{AppSyncError, Result};
use crate::output::OutputFormat;
use crate::project::ProjectLookup;
use std::path::{Path, PathBuf};

/// CLI overrides extracted from command arguments.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub project_lookup: Option<ProjectLookup>,
    pub format: Option<OutputFormat>,
}

/// Resolve configuration by applying layers bottom-up:
/// 1. Built-in defaults
/// 2. User config ($APPSYNC_CONFIG, else ~/.config/appsync/config.toml)
/// 3. Environment variables
/// 4. CLI overrides
pub fn resolve_config(cli: &CliOverrides) -> Result<ResolvedConfig> {
    let user_config = std::env::var_os("APPSYNC_CONFIG")
        .map(PathBuf::from)
        .or_else(find_user_config);
    resolve_config_with(user_config.as_deref(), |name| std::env::var(name).ok(), cli)
}

/// Layer resolution with an explicit config path and environment.
pub fn resolve_config_with<E>(
    user_config: Option<&Path>,
    env: E,
    cli: &CliOverrides,
) -> Result<ResolvedConfig>
where
    E: Fn(&str) -> Option<String>,
{
    let mut prov = ProvenanceMap::new();
    let mut config = ResolvedConfig::default();

    // 1. Defaults
    for key in [
        "directory.base_url",
        "directory.api_token",
        "pull.project_lookup",
        "pull.format",
    ] {
        prov.set(key, Source::Default);
    }

    // 2. User config
    if let Some(path) = user_config.filter(|p| p.exists()) {
        let content = std::fs::read_to_string(path).map_err(|_| {
            AppSyncError::Config(format!("Could not read user config: {}", path.display()))
        })?;
        let file_config = FileConfig::from_toml(&content)
            .map_err(|e| AppSyncError::Config(format!("Invalid user config: {e}")))?;
        apply_file_config(
            &mut config,
            &file_config,
            Source::UserConfig(path.to_path_buf()),
            &mut prov,
        )?;
        config.loaded_files.push(path.to_path_buf());
        tracing::debug!(path = %path.display(), "loaded user config");
    }

    // 3. Environment variables
    apply_env_vars(&mut config, &mut prov, env);

    // 4. CLI overrides
    apply_cli_overrides(&mut config, cli, &mut prov);

    config.provenance = prov;
    Ok(config)
}

fn find_user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("appsync").join("config.toml"))
}

fn apply_file_config(
    config: &mut ResolvedConfig,
    file: &FileConfig,
    source: Source,
    prov: &mut ProvenanceMap,
) -> Result<()> {
    if let Some(ref base_url) = file.directory.base_url {
        config.base_url = base_url.clone();
        prov.set("directory.base_url", source.clone());
    }
    if let Some(ref token) = file.directory.api_token {
        config.api_token = Some(token.clone());
        prov.set("directory.api_token", source.clone());
    }
    if let Some(ref lookup) = file.pull.project_lookup {
        config.project_lookup = lookup
            .parse::<ProjectLookup>()
            .map_err(|e| AppSyncError::Config(format!("Invalid pull.project_lookup: {e}")))?;
        prov.set("pull.project_lookup", source.clone());
    }
    if let Some(ref format) = file.pull.format {
        config.format = format
            .parse::<OutputFormat>()
            .map_err(|e| AppSyncError::Config(format!("Invalid pull.format: {e}")))?;
        prov.set("pull.format", source);
    }
    Ok(())
}

fn apply_env_vars<E>(config: &mut ResolvedConfig, prov: &mut ProvenanceMap, env: E)
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(val) = env("APPSYNC_BASE_URL").filter(|v| !v.trim().is_empty()) {
        config.base_url = val;
        prov.set("directory.base_url", Source::EnvVar("APPSYNC_BASE_URL".into()));
    }
    if let Some(val) = env("APPSYNC_API_TOKEN").filter(|v| !v.trim().is_empty()) {
        config.api_token = Some(val);
        prov.set("directory.api_token", Source::EnvVar("APPSYNC_API_TOKEN".into()));
    }
    if let Some(val) = env("APPSYNC_PROJECT_LOOKUP") {
        match val.parse::<ProjectLookup>() {
            Ok(lookup) => {
                config.project_lookup = lookup;
                prov.set(
                    "pull.project_lookup",
                    Source::EnvVar("APPSYNC_PROJECT_LOOKUP".into()),
                );
            }
            Err(e) => tracing::warn!("Ignoring APPSYNC_PROJECT_LOOKUP: {e}"),
        }
    }
    if let Some(val) = env("APPSYNC_FORMAT") {
        match val.parse::<OutputFormat>() {
            Ok(format) => {
                config.format = format;
                prov.set("pull.format", Source::EnvVar("APPSYNC_FORMAT".into()));
            }
            Err(e) => tracing::warn!("Ignoring APPSYNC_FORMAT: {e}"),
        }
    }
}

fn apply_cli_overrides(config: &mut ResolvedConfig, cli: &CliOverrides, prov: &mut ProvenanceMap) {
    if let Some(ref base_url) = cli.base_url {
        config.base_url = base_url.clone();
        prov.set("directory.base_url", Source::CliFlag("--base-url".into()));
    }
    if let Some(lookup) = cli.project_lookup {
        config.project_lookup = lookup;
        prov.set("pull.project_lookup", Source::CliFlag("--project-lookup".into()));
    }
    if let Some(format) = cli.format {
        config.format = format;
        prov.set("pull.format", Source::CliFlag("--format".into()));
    }
}
