//! Strategies for generating provider output and the values parsed from it.

use casegen_schema::case::{CaseFormat, Priority};
use casegen_schema::provider::Provider;
use proptest::prelude::*;

// ============================================================================
// Ground truth
// ============================================================================

/// The structure a generated response chunk was rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCase {
    pub title: String,
    pub steps: Vec<String>,
    pub expected_result: Option<String>,
    pub priority: Option<Priority>,
}

impl GeneratedCase {
    /// Priority the parser should report for this case.
    pub fn expected_priority(&self) -> Priority {
        self.priority.unwrap_or(Priority::NotAvailable)
    }

    /// `Scenario:` block the way providers answer a Gherkin prompt.
    pub fn render_gherkin(&self) -> String {
        let mut out = format!("Scenario: {}\n", self.title);
        for step in &self.steps {
            out.push_str(step);
            out.push('\n');
        }
        if let Some(p) = self.priority {
            out.push_str(&format!("Priority: {p}\n"));
        }
        out.push('\n');
        out
    }

    /// Numbered block the way providers answer a plain-text prompt.
    pub fn render_plain(&self, ordinal: usize) -> String {
        let mut out = format!("{ordinal}. Test Case: {}\nTest Steps:\n", self.title);
        for step in &self.steps {
            out.push_str(step);
            out.push('\n');
        }
        if let Some(expected) = &self.expected_result {
            out.push_str(&format!("Expected Result: {expected}\n"));
        }
        if let Some(p) = self.priority {
            out.push_str(&format!("Priority: {p}\n"));
        }
        out.push('\n');
        out
    }
}

// ============================================================================
// Base Strategies
// ============================================================================

pub fn strategy_case_format() -> impl Strategy<Value = CaseFormat> {
    prop_oneof![Just(CaseFormat::Gherkin), Just(CaseFormat::Plain)]
}

pub fn strategy_provider() -> impl Strategy<Value = Provider> {
    prop_oneof![
        Just(Provider::OpenAi),
        Just(Provider::Gemini),
        Just(Provider::Claude),
    ]
}

/// Any ordered subset of providers, as a user would select them
pub fn strategy_provider_subset() -> impl Strategy<Value = Vec<Provider>> {
    proptest::sample::subsequence(Provider::ALL.to_vec(), 0..=3)
}

/// Parseable priorities only; absence is modelled with `Option`
pub fn strategy_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
    ]
}

/// Text without markup, colons or emphasis, so it can never form a marker
pub fn strategy_freeform_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?'\n-]{0,200}"
}

/// Non-blank user-edited step lines
pub fn strategy_step_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z ,.]{0,40}", 1..8)
}

fn strategy_phrase() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{2,10}", 1..6).prop_map(|words| words.join(" "))
}

fn strategy_title() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{2,10}", strategy_phrase()).prop_map(|(head, rest)| format!("{head} {rest}"))
}

fn strategy_gherkin_step() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("Given"), Just("When"), Just("Then"), Just("And")],
        strategy_phrase(),
    )
        .prop_map(|(keyword, phrase)| format!("{keyword} {phrase}"))
}

fn strategy_preamble() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("Here are the test cases.\n\n"),
        Just("Sure! Below you will find everything requested.\n"),
    ]
}

fn strategy_summary_block() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(strategy_phrase().prop_map(|s| format!("Coverage Summary: {s}\n")))
}

// ============================================================================
// Cases and responses
// ============================================================================

pub fn strategy_gherkin_case() -> impl Strategy<Value = GeneratedCase> {
    (
        strategy_title(),
        prop::collection::vec(strategy_gherkin_step(), 1..6),
        proptest::option::of(strategy_priority()),
    )
        .prop_map(|(title, steps, priority)| GeneratedCase {
            title,
            steps,
            expected_result: None,
            priority,
        })
}

pub fn strategy_plain_case() -> impl Strategy<Value = GeneratedCase> {
    (
        strategy_title(),
        prop::collection::vec(strategy_phrase().prop_map(|s| format!("- {s}")), 1..6),
        proptest::option::of(strategy_phrase()),
        proptest::option::of(strategy_priority()),
    )
        .prop_map(|(title, steps, expected_result, priority)| GeneratedCase {
            title,
            steps,
            expected_result,
            priority,
        })
}

/// A whole Gherkin response and the cases it contains, in order
pub fn strategy_gherkin_response() -> impl Strategy<Value = (String, Vec<GeneratedCase>)> {
    (
        strategy_preamble(),
        prop::collection::vec(strategy_gherkin_case(), 1..6),
        strategy_summary_block(),
    )
        .prop_map(|(preamble, cases, summary)| {
            let mut raw = preamble.to_string();
            for case in &cases {
                raw.push_str(&case.render_gherkin());
            }
            if let Some(summary) = summary {
                raw.push_str(&summary);
            }
            (raw, cases)
        })
}

/// A whole numbered plain-text response and the cases it contains, in order
pub fn strategy_plain_response() -> impl Strategy<Value = (String, Vec<GeneratedCase>)> {
    (
        strategy_preamble(),
        prop::collection::vec(strategy_plain_case(), 1..6),
        strategy_summary_block(),
    )
        .prop_map(|(preamble, cases, summary)| {
            let mut raw = preamble.to_string();
            for (i, case) in cases.iter().enumerate() {
                raw.push_str(&case.render_plain(i + 1));
            }
            if let Some(summary) = summary {
                raw.push_str(&summary);
            }
            (raw, cases)
        })
}
