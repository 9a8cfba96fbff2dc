//! Export utilities for casegen runs.
//!
//! Every exporter is a pure string producer; writing files and triggering
//! downloads belongs to the caller. Exports are where provider columns get
//! concatenated into one list, in provider order.

mod automation;
mod feature;
mod tabular;

pub use automation::{
    StepAction, export_playwright, export_webdriverio, js_single_quoted, step_action,
    to_playwright, to_webdriverio,
};
pub use feature::{DEFAULT_FEATURE_NAME, export_feature_file, generate_feature_name, scenario_to_feature};
pub use tabular::{CsvExporter, csv_header};

use casegen_schema::case::{Category, TestCase};
use casegen_schema::provider::Provider;
use casegen_schema::run::Run;
use casegen_tagger::classify_case;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Feature,
    Playwright,
    WebdriverIo,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Feature => write!(f, "feature"),
            ExportFormat::Playwright => write!(f, "playwright"),
            ExportFormat::WebdriverIo => write!(f, "webdriverio"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "feature" | "gherkin" => Ok(ExportFormat::Feature),
            "playwright" => Ok(ExportFormat::Playwright),
            "webdriverio" | "wdio" => Ok(ExportFormat::WebdriverIo),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub fn extension(&self) -> &str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Feature => "feature",
            ExportFormat::Playwright => "spec.ts",
            ExportFormat::WebdriverIo => "e2e.js",
        }
    }
}

/// Export options for configuring output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub pretty: bool,
    /// Requirement text the run was generated from; names the feature file.
    #[serde(default)]
    pub requirement: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            pretty: true,
            requirement: None,
        }
    }
}

/// Exporter trait for different output formats.
pub trait Exporter {
    fn export(&self, run: &Run, options: &ExportOptions) -> anyhow::Result<String>;
}

/// One case flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// 1-based position across all providers.
    pub index: usize,
    pub provider: String,
    pub title: String,
    /// Steps joined with `\n`.
    pub steps: String,
    pub priority: String,
    pub category: Category,
    pub expected_result: String,
}

/// Cases of every column, in provider order then source order.
pub fn all_cases(run: &Run) -> Vec<&TestCase> {
    Provider::ALL
        .iter()
        .flat_map(|&p| run.cases(p).iter())
        .collect()
}

/// Flatten a run into rows, one per case.
pub fn flatten(run: &Run) -> Vec<ExportRow> {
    Provider::ALL
        .iter()
        .flat_map(|&p| run.cases(p).iter().map(move |tc| (p, tc)))
        .enumerate()
        .map(|(i, (provider, tc))| ExportRow {
            index: i + 1,
            provider: provider.label().to_string(),
            title: tc.title.clone(),
            steps: tc.steps.join("\n"),
            priority: tc.priority.to_string(),
            category: classify_case(tc),
            expected_result: tc.expected_result.clone(),
        })
        .collect()
}

/// JSON exporter implementation.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, run: &Run, options: &ExportOptions) -> anyhow::Result<String> {
        if options.pretty {
            serde_json::to_string_pretty(run).map_err(|e| anyhow::anyhow!("JSON export failed: {}", e))
        } else {
            serde_json::to_string(run).map_err(|e| anyhow::anyhow!("JSON export failed: {}", e))
        }
    }
}

/// Gherkin `.feature` exporter.
pub struct FeatureExporter;

impl Exporter for FeatureExporter {
    fn export(&self, run: &Run, options: &ExportOptions) -> anyhow::Result<String> {
        let cases: Vec<TestCase> = all_cases(run).into_iter().cloned().collect();
        Ok(export_feature_file(&cases, options.requirement.as_deref()))
    }
}

pub struct PlaywrightExporter;

impl Exporter for PlaywrightExporter {
    fn export(&self, run: &Run, _options: &ExportOptions) -> anyhow::Result<String> {
        Ok(export_playwright(all_cases(run)))
    }
}

pub struct WebdriverIoExporter;

impl Exporter for WebdriverIoExporter {
    fn export(&self, run: &Run, _options: &ExportOptions) -> anyhow::Result<String> {
        Ok(export_webdriverio(all_cases(run)))
    }
}

/// Export a run in the format named by `options`.
pub fn export_run(run: &Run, options: &ExportOptions) -> anyhow::Result<String> {
    let exporter: Box<dyn Exporter> = match options.format {
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Feature => Box::new(FeatureExporter),
        ExportFormat::Playwright => Box::new(PlaywrightExporter),
        ExportFormat::WebdriverIo => Box::new(WebdriverIoExporter),
    };
    exporter.export(run, options)
}
