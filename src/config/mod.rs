pub mod provenance;
pub mod resolve;
pub mod schema;
pub mod show;

use crate::output::OutputFormat;
use crate::project::ProjectLookup;
use provenance::ProvenanceMap;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://services.example.com/api/admin/v3.0";

/// Fully resolved settings for one command run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    // Directory
    pub base_url: String,
    pub api_token: Option<String>,

    // Pull
    pub project_lookup: ProjectLookup,
    pub format: OutputFormat,

    // Provenance
    pub provenance: ProvenanceMap,
    pub loaded_files: Vec<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            project_lookup: ProjectLookup::default(),
            format: OutputFormat::default(),
            provenance: ProvenanceMap::new(),
            loaded_files: Vec::new(),
        }
    }
}
