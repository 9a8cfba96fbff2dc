//! Configuration management and loading for casegen.

use anyhow::Context;
use casegen_error::CasegenError;
use casegen_logging::LoggingConfig;
use casegen_schema::case::CaseFormat;
use casegen_schema::provider::Provider;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration format types supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl Default for ConfigFormat {
    fn default() -> Self {
        Self::Yaml
    }
}

impl ConfigFormat {
    /// `.json` selects JSON; anything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::default(),
        }
    }
}

/// Main casegen configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasegenConfig {
    /// Output style requested from providers
    #[serde(default)]
    pub format: CaseFormat,

    /// Providers selected for a run
    #[serde(default = "default_providers")]
    pub providers: Vec<Provider>,

    /// Where run history is persisted
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,

    /// Runs kept before the oldest is evicted
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Requirement text used to name exported feature files
    #[serde(default)]
    pub requirement: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_providers() -> Vec<Provider> {
    Provider::ALL.to_vec()
}

fn default_history_path() -> PathBuf {
    PathBuf::from("./.casegen-history.json")
}

fn default_max_history() -> usize {
    20
}

impl Default for CasegenConfig {
    fn default() -> Self {
        Self {
            format: CaseFormat::default(),
            providers: default_providers(),
            history_path: default_history_path(),
            max_history: default_max_history(),
            requirement: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl CasegenConfig {
    /// Reject configurations no run could be built from.
    pub fn validate(&self) -> casegen_error::Result<()> {
        if self.providers.is_empty() {
            return Err(CasegenError::config("at least one provider must be selected"));
        }
        if self.max_history == 0 {
            return Err(CasegenError::config("max_history must be at least 1")
                .with_context("max_history", "0"));
        }
        Ok(())
    }
}

/// Load configuration from a file
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<CasegenConfig> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;

    match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("parse JSON config {path:?}")),
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("parse YAML config {path:?}")),
    }
}

/// Save configuration to a file
pub fn save_config<P: AsRef<Path>>(config: &CasegenConfig, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("serialize JSON config")?
        }
        ConfigFormat::Yaml => serde_yaml::to_string(config).context("serialize YAML config")?,
    };

    std::fs::write(path, contents).with_context(|| format!("write config {path:?}"))?;
    Ok(())
}
