//! Segmentation of raw provider output.
//!
//! A provider response is split into three parts: an optional preamble
//! (LLM chatter before the first case), an ordered list of chunks (one per
//! candidate test case) and a trailing coverage summary. The split is a
//! partition: `preamble + chunks.concat()` is exactly the text before the
//! summary marker. Nothing here can fail; the worst case is one big chunk.

use casegen_schema::case::CaseFormat;
use regex::Regex;
use std::sync::LazyLock;

static SUMMARY_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)coverage summary:").expect("static regex must compile"));
static SCENARIO_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)scenario:").expect("static regex must compile"));
static FIRST_ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.[ \t]").expect("static regex must compile"));
static ORDINAL_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:\*\*|#{1,6}[ \t]*)?\d+\.[ \t]").expect("static regex must compile")
});
static TEST_CASE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^(?:\*\*|#{1,6}[ \t]*)?test case\b[^\n:]*:").expect("static regex must compile")
});

/// Result of splitting one provider response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Text before the first boundary. Usually empty or an LLM intro line.
    pub preamble: String,
    /// One chunk per candidate case, boundary token kept at the head.
    pub chunks: Vec<String>,
    /// Trimmed text after the coverage summary marker, "" when absent.
    pub summary: String,
    /// True when no boundary rule matched and the whole text is one chunk.
    pub fallback: bool,
}

impl Segmentation {
    /// Text the chunks were cut from (everything before the summary marker).
    pub fn cases_text(&self) -> String {
        let mut out = self.preamble.clone();
        for chunk in &self.chunks {
            out.push_str(chunk);
        }
        out
    }
}

/// A boundary rule returns the byte offsets at which chunks start.
///
/// An empty result means the rule does not apply and the next one is tried.
struct BoundaryRule {
    name: &'static str,
    starts: fn(&str) -> Vec<usize>,
}

const GHERKIN_RULES: &[BoundaryRule] = &[BoundaryRule {
    name: "scenario-marker",
    starts: scenario_starts,
}];

const PLAIN_RULES: &[BoundaryRule] = &[
    BoundaryRule {
        name: "numbered-items",
        starts: numbered_item_starts,
    },
    BoundaryRule {
        name: "test-case-headings",
        starts: test_case_heading_starts,
    },
];

fn rules_for(format: CaseFormat) -> &'static [BoundaryRule] {
    match format {
        CaseFormat::Gherkin => GHERKIN_RULES,
        CaseFormat::Plain => PLAIN_RULES,
    }
}

/// Every `Scenario:` token, start of line or inline.
fn scenario_starts(text: &str) -> Vec<usize> {
    SCENARIO_MARKER_RE.find_iter(text).map(|m| m.start()).collect()
}

/// First `<digits>. ` skips the preamble; after it, every line opening a new
/// `<digits>. ` item starts a chunk.
fn numbered_item_starts(text: &str) -> Vec<usize> {
    let Some(first) = FIRST_ORDINAL_RE.find(text) else {
        return Vec::new();
    };

    // Pull the first start back to the line start when the ordinal sits
    // behind emphasis or a heading marker on its own line ("**1. Login**").
    let line_begin = text[..first.start()].rfind('\n').map_or(0, |i| i + 1);
    let first_start = ORDINAL_LINE_RE
        .find_at(text, line_begin)
        .filter(|m| m.start() == line_begin && m.end() >= first.end())
        .map_or(first.start(), |m| m.start());

    let mut starts = vec![first_start];
    starts.extend(
        ORDINAL_LINE_RE
            .find_iter(text)
            .map(|m| m.start())
            .filter(|&s| s > first_start),
    );
    starts
}

fn test_case_heading_starts(text: &str) -> Vec<usize> {
    TEST_CASE_LINE_RE.find_iter(text).map(|m| m.start()).collect()
}

/// Split off the coverage summary.
///
/// Returns `(cases_text, summary)`. The first case-insensitive
/// `coverage summary:` marker wins; the summary is the trimmed remainder.
pub fn split_summary(raw: &str) -> (&str, &str) {
    match SUMMARY_MARKER_RE.find(raw) {
        Some(m) => {
            let mut summary = &raw[m.end()..];
            // "**Coverage Summary:** text" closes its emphasis after the colon.
            let opened = raw[..m.start()].trim_end_matches([' ', '\t']);
            if let Some(open) = emphasis_suffix(opened) {
                summary = summary.strip_prefix(open).unwrap_or(summary);
            }
            (&raw[..m.start()], summary.trim())
        }
        None => (raw, ""),
    }
}

fn emphasis_suffix(text: &str) -> Option<&'static str> {
    ["**", "__"].into_iter().find(|e| text.ends_with(e))
}

/// Split a raw provider response into chunks plus summary.
///
/// Boundary rules for `format` are tried in order; the first rule that finds
/// at least one boundary wins. With no boundary, non-blank cases text becomes
/// a single fallback chunk.
pub fn segment(raw: &str, format: CaseFormat) -> Segmentation {
    let (cases_text, summary) = split_summary(raw);

    for rule in rules_for(format) {
        let starts = (rule.starts)(cases_text);
        if starts.is_empty() {
            continue;
        }
        let (preamble, chunks) = cut(cases_text, &starts);
        tracing::debug!(
            rule = rule.name,
            chunks = chunks.len(),
            preamble_len = preamble.len(),
            has_summary = !summary.is_empty(),
            "segmented provider response"
        );
        return Segmentation {
            preamble: preamble.to_string(),
            chunks: chunks.into_iter().map(str::to_string).collect(),
            summary: summary.to_string(),
            fallback: false,
        };
    }

    if cases_text.trim().is_empty() {
        return Segmentation {
            preamble: cases_text.to_string(),
            chunks: Vec::new(),
            summary: summary.to_string(),
            fallback: false,
        };
    }

    tracing::warn!(
        %format,
        len = cases_text.len(),
        "no case boundary found, keeping whole response as one chunk"
    );
    Segmentation {
        preamble: String::new(),
        chunks: vec![cases_text.to_string()],
        summary: summary.to_string(),
        fallback: true,
    }
}

/// Cut `text` at strictly increasing `starts`.
fn cut<'a>(text: &'a str, starts: &[usize]) -> (&'a str, Vec<&'a str>) {
    let preamble = &text[..starts[0]];
    let chunks = starts
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[s..end]
        })
        .collect();
    (preamble, chunks)
}
