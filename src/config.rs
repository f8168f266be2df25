use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::naming::EpisodeTemplate;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "jellyfin-organize.json";

/// Environment variable holding a config path.
pub const CONFIG_ENV: &str = "JELLYFIN_ORGANIZE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    /// Which digit run in a source filename is the episode number.
    pub match_index: usize,
    /// Write `"Show S01E01.mkv"` rather than `"S01E01.mkv"`.
    pub include_show_name: bool,
    pub concurrent_renames: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            match_index: 0,
            include_show_name: true,
            concurrent_renames: true,
            log_filter: None,
        }
    }
}

impl OrganizeConfig {
    pub fn template(&self) -> EpisodeTemplate {
        EpisodeTemplate {
            include_show_name: self.include_show_name,
        }
    }
}

/// Load configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<OrganizeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: OrganizeConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;
    Ok(config)
}

/// Load config from `custom_path`, the default location, or fall back to
/// defaults when neither exists.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<OrganizeConfig> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return load_config(default_path);
    }

    Ok(OrganizeConfig::default())
}

fn validate_config(config: &OrganizeConfig) -> Result<()> {
    if let Some(filter) = &config.log_filter {
        EnvFilter::try_new(filter)
            .with_context(|| format!("Invalid log filter: {:?}", filter))?;
    }
    Ok(())
}

pub struct ConfigBuilder {
    match_index: Option<usize>,
    include_show_name: Option<bool>,
    concurrent_renames: Option<bool>,
    log_filter: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            match_index: None,
            include_show_name: None,
            concurrent_renames: None,
            log_filter: None,
        }
    }

    pub fn match_index(mut self, index: usize) -> Self {
        self.match_index = Some(index);
        self
    }

    pub fn include_show_name(mut self, include: bool) -> Self {
        self.include_show_name = Some(include);
        self
    }

    pub fn concurrent_renames(mut self, concurrent: bool) -> Self {
        self.concurrent_renames = Some(concurrent);
        self
    }

    pub fn log_filter(mut self, filter: Option<String>) -> Self {
        self.log_filter = filter;
        self
    }

    /// Applies the set values on top of `base`.
    pub fn build_from(self, base: OrganizeConfig) -> Result<OrganizeConfig> {
        let config = OrganizeConfig {
            match_index: self.match_index.unwrap_or(base.match_index),
            include_show_name: self.include_show_name.unwrap_or(base.include_show_name),
            concurrent_renames: self.concurrent_renames.unwrap_or(base.concurrent_renames),
            log_filter: self.log_filter.or(base.log_filter),
        };
        validate_config(&config)?;
        Ok(config)
    }

    pub fn build(self) -> Result<OrganizeConfig> {
        self.build_from(OrganizeConfig::default())
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
