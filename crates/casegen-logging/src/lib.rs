//! Logging configuration and subscriber setup for casegen.
//!
//! Library crates only emit `tracing` events. Binaries call [`init`] once
//! with a [`LoggingConfig`]; `RUST_LOG`, when set and valid, replaces the
//! configured filter.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

/// Log level for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl LogLevel {
    /// Check if this level should log messages at the given level
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= *self
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Level for a count of `-v` flags on top of `base`.
    pub fn raised_by(self, verbosity: u8) -> LogLevel {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let start = ORDER.iter().position(|l| *l == self).unwrap_or(1);
        ORDER[(start + verbosity as usize).min(ORDER.len() - 1)]
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Plain,
    Json,
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Plain
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level to output
    #[serde(default)]
    pub level: LogLevel,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
    /// Enable timestamps
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Enable colors (for terminal output)
    #[serde(default = "default_true")]
    pub colors: bool,
    /// Per-crate overrides, keyed by tracing target (`casegen_segment`)
    #[serde(default)]
    pub component_levels: BTreeMap<String, LogLevel>,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::Plain,
            timestamps: true,
            colors: true,
            component_levels: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_component_level(mut self, component: impl Into<String>, level: LogLevel) -> Self {
        self.component_levels.insert(component.into(), level);
        self
    }

    /// Get the effective log level for a component
    pub fn effective_level(&self, component: Option<&str>) -> LogLevel {
        component
            .and_then(|c| self.component_levels.get(c).copied())
            .unwrap_or(self.level)
    }

    pub fn should_log(&self, level: LogLevel, component: Option<&str>) -> bool {
        self.effective_level(component).should_log(level)
    }

    /// `EnvFilter` directive string: global level, then per-component levels.
    pub fn env_filter_directive(&self) -> String {
        std::iter::once(self.level.as_str().to_string())
            .chain(
                self.component_levels
                    .iter()
                    .map(|(component, level)| format!("{component}={}", level.as_str())),
            )
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.env_filter_directive()))
        .context("build log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.colors)
        .with_target(false);

    let installed = match (config.format, config.timestamps) {
        (LogFormat::Json, _) => builder.json().try_init(),
        (LogFormat::Compact, true) => builder.compact().try_init(),
        (LogFormat::Compact, false) => builder.compact().without_time().try_init(),
        (LogFormat::Plain, true) => builder.try_init(),
        (LogFormat::Plain, false) => builder.without_time().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))
}
