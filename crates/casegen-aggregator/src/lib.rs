//! Run assembly from independent provider results.
//!
//! Providers answer in any order and some fail. [`aggregate`] turns whatever
//! arrived into a [`Run`] with one column per requested provider, so a
//! failed or silent provider is visible as such instead of disappearing.
//! Columns are never merged; flattening is an export concern.

pub mod history;

pub use history::RunHistory;

use casegen_error::CasegenError;
use casegen_ids::{CaseId, RunId};
use casegen_schema::case::CaseFormat;
use casegen_schema::provider::Provider;
use casegen_schema::run::{ParsedResponse, ProviderColumn, Run};
use chrono::Utc;
use std::collections::BTreeMap;

/// Reason recorded for a requested provider that never reported back.
pub const NO_RESPONSE: &str = "no response received";

/// What the network layer hands over for one provider call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderReport {
    Parsed(ParsedResponse),
    /// Upstream failure (network, auth, rate limit) with a display reason.
    Failed(String),
}

impl ProviderReport {
    pub fn failed(reason: impl Into<String>) -> Self {
        ProviderReport::Failed(reason.into())
    }

    fn into_column(self) -> ProviderColumn {
        match self {
            ProviderReport::Parsed(parsed) => ProviderColumn::from_parsed(parsed),
            ProviderReport::Failed(reason) => ProviderColumn::failed(reason),
        }
    }
}

/// Build a run from provider reports arriving in any order.
///
/// Only `requested` providers get a column. A requested provider without a
/// report is recorded as failed with [`NO_RESPONSE`]; reports from providers
/// that were not requested are dropped. When one provider reports twice the
/// later report replaces the earlier one.
pub fn aggregate<I>(requested: &[Provider], format: CaseFormat, reports: I) -> Run
where
    I: IntoIterator<Item = (Provider, ProviderReport)>,
{
    let mut requested = requested.to_vec();
    requested.sort();
    requested.dedup();

    let mut columns: BTreeMap<Provider, ProviderColumn> = BTreeMap::new();
    for (provider, report) in reports {
        if !requested.contains(&provider) {
            tracing::warn!(%provider, "ignoring report from provider that was not requested");
            continue;
        }
        if columns.insert(provider, report.into_column()).is_some() {
            tracing::warn!(%provider, "provider reported twice, keeping the later report");
        }
    }

    for &provider in &requested {
        columns.entry(provider).or_insert_with(|| {
            tracing::warn!(%provider, "requested provider did not report");
            ProviderColumn::failed(NO_RESPONSE)
        });
    }

    let run = Run {
        id: RunId::now("run"),
        created_at: Utc::now(),
        format,
        requested,
        columns,
    };
    tracing::debug!(
        run_id = %run.id,
        providers = run.requested.len(),
        cases = run.total_cases(),
        "aggregated run"
    );
    run
}

/// The one mutation a run allows after creation.
pub trait EditSteps {
    /// Replace the steps of one case wholesale.
    ///
    /// Blank lines are dropped and the rest trimmed. An unknown case id or an
    /// edit leaving no steps is refused and the run is left unchanged.
    fn edit_steps(&mut self, case_id: &CaseId, steps: Vec<String>) -> casegen_error::Result<()>;
}

impl EditSteps for Run {
    fn edit_steps(&mut self, case_id: &CaseId, steps: Vec<String>) -> casegen_error::Result<()> {
        let steps: Vec<String> = steps
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if steps.is_empty() {
            return Err(CasegenError::validation("edited steps are empty")
                .with_context("case_id", case_id.as_str()));
        }

        let run_id = self.id.clone();
        let Some(case) = self.case_mut(case_id) else {
            return Err(CasegenError::validation("unknown test case")
                .with_context("case_id", case_id.as_str())
                .with_context("run_id", run_id.as_str()));
        };

        tracing::debug!(case_id = %case_id, before = case.steps.len(), after = steps.len(), "edited steps");
        case.steps = steps;
        Ok(())
    }
}
