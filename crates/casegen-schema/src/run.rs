use crate::case::{CaseFormat, TestCase};
use crate::provider::Provider;
use casegen_ids::{CaseId, RunId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parse result for one provider response.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedResponse {
    pub cases: Vec<TestCase>,
    /// Coverage summary, "" when the provider did not emit one.
    pub summary: String,
}

/// One provider's column in a run.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderColumn {
    pub cases: Vec<TestCase>,
    #[serde(default)]
    pub summary: String,
    /// Set when the provider was requested but the call failed upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ProviderColumn {
    pub fn from_parsed(parsed: ParsedResponse) -> Self {
        Self {
            cases: parsed.cases,
            summary: parsed.summary,
            failure: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            cases: Vec::new(),
            summary: String::new(),
            failure: Some(reason.into()),
        }
    }
}

/// What the UI should say about one provider in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderStatus<'a> {
    NotRequested,
    Failed(&'a str),
    /// Requested and answered, but nothing parsed into a case.
    Empty,
    Cases(&'a [TestCase]),
}

/// A single generation request's results.
///
/// Immutable once created, except for step edits on individual cases.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Run {
    pub id: RunId,
    pub created_at: DateTime<Utc>,
    pub format: CaseFormat,
    /// Providers the user selected, in provider order.
    pub requested: Vec<Provider>,
    /// Exactly one entry per requested provider.
    pub columns: BTreeMap<Provider, ProviderColumn>,
}

impl Run {
    pub fn is_requested(&self, provider: Provider) -> bool {
        self.requested.contains(&provider)
    }

    pub fn status(&self, provider: Provider) -> ProviderStatus<'_> {
        if !self.is_requested(provider) {
            return ProviderStatus::NotRequested;
        }
        match self.columns.get(&provider) {
            None => ProviderStatus::NotRequested,
            Some(col) => match &col.failure {
                Some(reason) => ProviderStatus::Failed(reason),
                None if col.cases.is_empty() => ProviderStatus::Empty,
                None => ProviderStatus::Cases(&col.cases),
            },
        }
    }

    /// Cases for one provider; empty when not requested or failed.
    pub fn cases(&self, provider: Provider) -> &[TestCase] {
        self.columns
            .get(&provider)
            .map(|c| c.cases.as_slice())
            .unwrap_or_default()
    }

    pub fn summary(&self, provider: Provider) -> &str {
        self.columns
            .get(&provider)
            .map(|c| c.summary.as_str())
            .unwrap_or_default()
    }

    pub fn total_cases(&self) -> usize {
        self.columns.values().map(|c| c.cases.len()).sum()
    }

    pub fn case(&self, id: &CaseId) -> Option<&TestCase> {
        self.columns
            .values()
            .flat_map(|c| c.cases.iter())
            .find(|tc| &tc.id == id)
    }

    pub fn case_mut(&mut self, id: &CaseId) -> Option<&mut TestCase> {
        self.columns
            .values_mut()
            .flat_map(|c| c.cases.iter_mut())
            .find(|tc| &tc.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Priority;

    fn case(title: &str) -> TestCase {
        TestCase {
            id: CaseId::next(),
            title: title.into(),
            steps: vec!["Given a user".into()],
            expected_result: String::new(),
            priority: Priority::NotAvailable,
            format: CaseFormat::Gherkin,
        }
    }

    fn run_with(columns: Vec<(Provider, ProviderColumn)>, requested: Vec<Provider>) -> Run {
        Run {
            id: RunId::now("run"),
            created_at: Utc::now(),
            format: CaseFormat::Gherkin,
            requested,
            columns: columns.into_iter().collect(),
        }
    }

    #[test]
    fn status_distinguishes_not_requested_from_failed() {
        let run = run_with(
            vec![
                (Provider::OpenAi, ProviderColumn::from_parsed(ParsedResponse {
                    cases: vec![case("a")],
                    summary: String::new(),
                })),
                (Provider::Gemini, ProviderColumn::failed("rate limited")),
            ],
            vec![Provider::OpenAi, Provider::Gemini],
        );

        assert!(matches!(run.status(Provider::OpenAi), ProviderStatus::Cases(c) if c.len() == 1));
        assert_eq!(run.status(Provider::Gemini), ProviderStatus::Failed("rate limited"));
        assert_eq!(run.status(Provider::Claude), ProviderStatus::NotRequested);
    }

    #[test]
    fn status_empty_when_answered_without_cases() {
        let run = run_with(
            vec![(Provider::Claude, ProviderColumn::default())],
            vec![Provider::Claude],
        );
        assert_eq!(run.status(Provider::Claude), ProviderStatus::Empty);
        assert!(run.cases(Provider::Claude).is_empty());
        assert_eq!(run.summary(Provider::OpenAi), "");
    }

    #[test]
    fn case_lookup_spans_columns() {
        let target = case("target");
        let id = target.id.clone();
        let mut run = run_with(
            vec![
                (Provider::OpenAi, ProviderColumn::from_parsed(ParsedResponse {
                    cases: vec![case("other")],
                    summary: String::new(),
                })),
                (Provider::Claude, ProviderColumn::from_parsed(ParsedResponse {
                    cases: vec![target],
                    summary: String::new(),
                })),
            ],
            vec![Provider::OpenAi, Provider::Claude],
        );

        assert_eq!(run.case(&id).map(|c| c.title.as_str()), Some("target"));
        run.case_mut(&id).unwrap().steps.push("Then done".into());
        assert_eq!(run.case(&id).unwrap().steps.len(), 2);
        assert_eq!(run.total_cases(), 2);
    }

    #[test]
    fn run_serializes_provider_keys_lowercase() {
        let run = run_with(
            vec![(Provider::OpenAi, ProviderColumn::failed("boom"))],
            vec![Provider::OpenAi],
        );
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"openai\""));
        let back: Run = serde_json::from_str(&json).unwrap();
        assert_eq!(back, run);
    }
}
