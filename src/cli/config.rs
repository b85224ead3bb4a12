use crate::config::resolve::{resolve_config, CliOverrides};
use crate::errors::{ResolveError, Result};
use crate::paths;
use crate::profile::Profile;
use crate::project::{LocalProjectReader, ProjectStateReader};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show resolved settings with the source of each value
    Show {
        /// Working directory (defaults to current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    match &args.action {
        ConfigAction::Show { path } => {
            let config = resolve_config(&CliOverrides::default())?;
            let profile = Profile::from_env()?;
            let working_dir = paths::normalize(
                path.as_deref().unwrap_or_else(|| std::path::Path::new("")),
                profile.home(),
                &profile.working_directory,
            )?;
            let project = LocalProjectReader::new(config.project_lookup)
                .read(&working_dir)
                .map_err(ResolveError::from)?;

            let mut stdout = std::io::stdout();
            crate::config::show::render_show(&mut stdout, &config)?;
            crate::config::show::render_project(&mut stdout, &working_dir, project.as_ref())?;
        }
    }
    Ok(())
}
