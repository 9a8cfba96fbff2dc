use anyhow::{Context, Result};
use casegen_ids::RunId;
use casegen_schema::run::Run;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of runs kept before the oldest is evicted.
pub const DEFAULT_MAX_RUNS: usize = 20;

/// Ordered run history, oldest first, newest last.
///
/// Undo drops the newest run. Pushing past `max_runs` evicts from the front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHistory {
    #[serde(default = "default_max_runs")]
    max_runs: usize,
    #[serde(default)]
    runs: Vec<Run>,
}

fn default_max_runs() -> usize {
    DEFAULT_MAX_RUNS
}

impl Default for RunHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RUNS)
    }
}

impl RunHistory {
    /// A zero bound is treated as one so the latest run is always kept.
    pub fn new(max_runs: usize) -> Self {
        Self {
            max_runs: max_runs.max(1),
            runs: Vec::new(),
        }
    }

    pub fn max_runs(&self) -> usize {
        self.max_runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Append a run, returning the runs evicted to stay within bounds.
    pub fn push(&mut self, run: Run) -> Vec<Run> {
        self.runs.push(run);
        self.enforce_bound()
    }

    pub fn latest(&self) -> Option<&Run> {
        self.runs.last()
    }

    /// Newest run, for step edits.
    pub fn latest_mut(&mut self) -> Option<&mut Run> {
        self.runs.last_mut()
    }

    /// Remove and return the newest run.
    pub fn undo(&mut self) -> Option<Run> {
        let run = self.runs.pop();
        if let Some(run) = &run {
            tracing::debug!(run_id = %run.id, remaining = self.runs.len(), "undid run");
        }
        run
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn get(&self, id: &RunId) -> Option<&Run> {
        self.runs.iter().find(|r| &r.id == id)
    }

    pub fn get_mut(&mut self, id: &RunId) -> Option<&mut Run> {
        self.runs.iter_mut().find(|r| &r.id == id)
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter()
    }

    /// Load a history file; a missing file is an empty history.
    ///
    /// `max_runs` overrides whatever bound the file was saved with.
    pub fn load(path: &Path, max_runs: usize) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(max_runs));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read run history {path:?}"))?;
        let mut history: RunHistory = serde_json::from_str(&text)
            .with_context(|| format!("parse run history json {path:?}"))?;
        history.max_runs = max_runs.max(1);
        let evicted = history.enforce_bound();
        if !evicted.is_empty() {
            tracing::info!(evicted = evicted.len(), "trimmed loaded history to bound");
        }
        Ok(history)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent:?}"))?;
        }
        let text = serde_json::to_string_pretty(self).context("serialize run history")?;
        std::fs::write(path, text).with_context(|| format!("write run history {path:?}"))?;
        Ok(())
    }

    fn enforce_bound(&mut self) -> Vec<Run> {
        let excess = self.runs.len().saturating_sub(self.max_runs);
        self.runs.drain(..excess).collect()
    }
}
