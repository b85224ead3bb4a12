use crate::config::resolve::{resolve_config, CliOverrides};
use crate::directory::HttpDirectoryClient;
use crate::errors::Result;
use crate::output::{json, text, OutputFormat, PullPlan};
use crate::profile::Profile;
use crate::project::{AppConfigVersion, LocalProjectReader, ProjectLookup};
use crate::pull::PullInputs;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PullArgs {
    /// Local directory to pull into (defaults to the current project)
    #[arg(long, visible_alias = "target")]
    pub local: Option<PathBuf>,

    /// App to pull from: client app id, durable id or name
    #[arg(long, visible_alias = "from")]
    pub remote: Option<String>,

    /// Project (group) id used to find the remote app
    #[arg(long)]
    pub project: Option<String>,

    /// Config version to pull as (20210101, 20200603 or 20180301)
    #[arg(long, value_parser = parse_version)]
    pub config_version: Option<AppConfigVersion>,

    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Base URL of the app directory API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Whether projects in parent directories count when --local is not given
    #[arg(long, value_enum)]
    pub project_lookup: Option<ProjectLookup>,
}

fn parse_version(s: &str) -> std::result::Result<AppConfigVersion, String> {
    s.parse()
}

impl PullArgs {
    fn inputs(&self) -> PullInputs {
        PullInputs {
            target: self.local.clone().unwrap_or_default(),
            from: self.remote.clone(),
            project: self.project.clone(),
            app_version: self.config_version,
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            project_lookup: self.project_lookup,
            format: self.format,
        }
    }
}

pub fn run(args: &PullArgs) -> Result<()> {
    let config = resolve_config(&args.overrides())?;
    let profile = Profile::from_env()?;
    let projects = LocalProjectReader::new(config.project_lookup);
    let directory = HttpDirectoryClient::new(config.base_url.clone(), config.api_token.clone());

    let mut inputs = args.inputs();
    let source = inputs.resolve(&profile, &projects, &directory)?;
    tracing::info!(dir = %inputs.target.display(), "pull inputs resolved");

    let plan = PullPlan { inputs, source };
    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Text => text::write_pull_text(&mut stdout, &plan)?,
        OutputFormat::Json => json::write_pull_json(&mut stdout, &plan)?,
    }
    Ok(())
}
