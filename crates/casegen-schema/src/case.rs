use casegen_ids::CaseId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output style the originating prompt asked the provider for.
///
/// Governs how chunks are segmented and whether steps or an expected-result
/// block carry the expectation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CaseFormat {
    #[default]
    Gherkin,
    Plain,
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseFormat::Gherkin => write!(f, "gherkin"),
            CaseFormat::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for CaseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gherkin" => Ok(CaseFormat::Gherkin),
            "plain" | "plain-text" | "text" => Ok(CaseFormat::Plain),
            other => Err(format!("unknown case format: {other}")),
        }
    }
}

/// Priority tag as emitted by the provider.
///
/// `NotAvailable` is the explicit sentinel for "no parseable tag"; it is
/// never represented as a missing field.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Priority {
    /// Case-insensitive label lookup. Anything unrecognised is `NotAvailable`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::NotAvailable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic scenario category.
///
/// Derived from step text on demand; never persisted on [`TestCase`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Positive,
    Negative,
    Edge,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Positive => write!(f, "Positive"),
            Category::Negative => write!(f, "Negative"),
            Category::Edge => write!(f, "Edge"),
        }
    }
}

/// Extractor output for one chunk, before an identifier is assigned.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCaseDraft {
    pub title: String,
    /// Source order is semantically meaningful (Given/When/Then).
    pub steps: Vec<String>,
    /// Empty string when absent.
    pub expected_result: String,
    pub priority: Priority,
}

impl TestCaseDraft {
    pub const UNTITLED: &'static str = "Untitled";

    /// Fallback record holding raw text verbatim.
    pub fn untitled(steps: Vec<String>) -> Self {
        Self {
            title: Self::UNTITLED.to_string(),
            steps,
            expected_result: String::new(),
            priority: Priority::NotAvailable,
        }
    }
}

/// One normalized scenario.
///
/// Everything except `steps` is immutable after parsing; `steps` changes only
/// through the explicit edit operation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub id: CaseId,
    pub title: String,
    pub steps: Vec<String>,
    #[serde(default)]
    pub expected_result: String,
    pub priority: Priority,
    pub format: CaseFormat,
}

impl TestCase {
    pub fn has_expected_result(&self) -> bool {
        !self.expected_result.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_from_label_is_case_insensitive() {
        assert_eq!(Priority::from_label("HIGH"), Priority::High);
        assert_eq!(Priority::from_label(" medium "), Priority::Medium);
        assert_eq!(Priority::from_label("low"), Priority::Low);
        assert_eq!(Priority::from_label("urgent"), Priority::NotAvailable);
    }

    #[test]
    fn priority_serializes_sentinel_as_na() {
        let json = serde_json::to_string(&Priority::NotAvailable).unwrap();
        assert_eq!(json, "\"N/A\"");
        let back: Priority = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(back, Priority::NotAvailable);
    }

    #[test]
    fn case_format_parses_aliases() {
        assert_eq!("Gherkin".parse::<CaseFormat>(), Ok(CaseFormat::Gherkin));
        assert_eq!("plain-text".parse::<CaseFormat>(), Ok(CaseFormat::Plain));
        assert!("xml".parse::<CaseFormat>().is_err());
    }

    #[test]
    fn untitled_draft_uses_sentinels() {
        let d = TestCaseDraft::untitled(vec!["raw".into()]);
        assert_eq!(d.title, "Untitled");
        assert_eq!(d.priority, Priority::NotAvailable);
        assert!(d.expected_result.is_empty());
    }

    #[test]
    fn test_case_defaults_missing_expected_result() {
        let json = r#"{"id":"c1","title":"t","steps":["Given x"],"priority":"High","format":"gherkin"}"#;
        let tc: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(tc.expected_result, "");
        assert!(!tc.has_expected_result());
    }
}
