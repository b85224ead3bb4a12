use crate::config::ResolvedConfig;
use crate::project::ProjectDescriptor;
use std::io::Write;
use std::path::Path;

/// Render `config show` output.
pub fn render_show<W: Write>(w: &mut W, config: &ResolvedConfig) -> std::io::Result<()> {
    // Loaded files
    if config.loaded_files.is_empty() {
        writeln!(w, "Loaded config files: (none)")?;
    } else {
        writeln!(w, "Loaded config files:")?;
        for (i, path) in config.loaded_files.iter().enumerate() {
            writeln!(w, "  {}. {}", i + 1, path.display())?;
        }
    }
    writeln!(w)?;

    // Resolved settings
    writeln!(w, "Resolved settings:")?;
    for (key, source) in config.provenance.sorted_entries() {
        let value = get_value_for_key(config, key);
        writeln!(w, "  {}: {} <- {}", key, value, source)?;
    }

    Ok(())
}

/// Render the project `pull` would find from `dir`.
pub fn render_project<W: Write>(
    w: &mut W,
    dir: &Path,
    project: Option<&ProjectDescriptor>,
) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Project for {}:", dir.display())?;
    match project {
        Some(project) => {
            writeln!(w, "  file: {}", project.config_file.display())?;
            writeln!(w, "  config_version: {}", project.config_version)?;
            writeln!(w, "  app_id: {}", project.app_id.as_deref().unwrap_or("(unset)"))?;
            writeln!(w, "  group_id: {}", project.group_id.as_deref().unwrap_or("(unset)"))?;
        }
        None => writeln!(w, "  (none)")?,
    }
    Ok(())
}

fn get_value_for_key(config: &ResolvedConfig, key: &str) -> String {
    match key {
        "directory.base_url" => config.base_url.clone(),
        // Never echo the token itself.
        "directory.api_token" => config
            .api_token
            .as_ref()
            .map_or("(unset)".to_string(), |_| "********".to_string()),
        "pull.project_lookup" => config.project_lookup.to_string(),
        "pull.format" => config.format.to_string(),
        _ => "(unknown)".to_string(),
    }
}
