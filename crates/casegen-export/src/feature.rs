use casegen_schema::case::TestCase;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_FEATURE_NAME: &str = "AI Generated Feature";

const TITLE_WORDS: usize = 5;

static NON_NAME_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]").expect("static regex must compile"));
static PERSONA_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:user|guest|customer)\s+").expect("static regex must compile"));

/// Name for the `Feature:` line.
///
/// Tried in order: the first line of the requirement with everything but
/// ASCII letters, digits and spaces removed; the first case title with its
/// first persona word (`user`, `guest`, `customer`) removed, cut to five
/// capitalised words; the default name.
pub fn generate_feature_name(cases: &[TestCase], requirement: Option<&str>) -> String {
    let from_requirement = requirement
        .and_then(|r| r.lines().next())
        .map(|line| NON_NAME_CHARS_RE.replace_all(line, "").trim().to_string())
        .filter(|name| !name.is_empty());
    if let Some(name) = from_requirement {
        return name;
    }

    cases
        .first()
        .map(|tc| {
            let title = PERSONA_WORD_RE.replace(tc.title.trim(), "");
            title
                .split_whitespace()
                .take(TITLE_WORDS)
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_FEATURE_NAME.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One `Scenario:` block, optionally preceded by a `Feature:` header.
pub fn scenario_to_feature(case: &TestCase, feature_name: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(name) = feature_name.filter(|n| !n.is_empty()) {
        out.push_str(&format!("Feature: {name}\n\n"));
    }
    out.push_str(&format!("Scenario: {}\n", case.title));
    for step in &case.steps {
        out.push_str(step);
        out.push('\n');
    }
    out
}

/// A whole `.feature` file: one header, then every case as a scenario,
/// separated by blank lines.
pub fn export_feature_file(cases: &[TestCase], requirement: Option<&str>) -> String {
    let name = generate_feature_name(cases, requirement);
    let scenarios = cases
        .iter()
        .map(|tc| scenario_to_feature(tc, None))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Feature: {name}\n\n{scenarios}")
}
