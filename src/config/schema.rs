use serde::Deserialize;

/// TOML-deserializable user config. All fields are Option for layered merging.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub directory: DirectoryFileConfig,
    #[serde(default)]
    pub pull: PullFileConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DirectoryFileConfig {
    pub base_url: Option<String>,
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PullFileConfig {
    pub project_lookup: Option<String>,
    pub format: Option<String>,
}

impl FileConfig {
    /// Load from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
