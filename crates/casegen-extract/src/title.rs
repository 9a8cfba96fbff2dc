use regex::Regex;
use std::sync::LazyLock;

static EMPHASIS_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\*{1,3}|_{1,3}|#{1,6})\s*").expect("static regex must compile"));
static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.(?:\s+|$)").expect("static regex must compile"));
static SCENARIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^scenario\s*:\s*").expect("static regex must compile"));
static TEST_CASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^test case(?:\s*#?\d+)?\s*:\s*").expect("static regex must compile")
});

/// A prefix the provider adds in front of the scenario name.
pub(crate) struct TitlePrefixRule {
    pub name: &'static str,
    pattern: &'static LazyLock<Regex>,
}

impl TitlePrefixRule {
    /// Remainder of `title` after this prefix, if the prefix is present.
    pub fn strip<'a>(&self, title: &'a str) -> Option<&'a str> {
        self.pattern.find(title).map(|m| &title[m.end()..])
    }
}

/// Tried in order, repeatedly, until none applies: "1. **Test Case: X**"
/// needs ordinal, emphasis and label removal in sequence.
pub(crate) static TITLE_PREFIX_RULES: &[TitlePrefixRule] = &[
    TitlePrefixRule {
        name: "emphasis",
        pattern: &EMPHASIS_OPEN_RE,
    },
    TitlePrefixRule {
        name: "ordinal",
        pattern: &ORDINAL_RE,
    },
    TitlePrefixRule {
        name: "scenario-label",
        pattern: &SCENARIO_RE,
    },
    TitlePrefixRule {
        name: "test-case-label",
        pattern: &TEST_CASE_RE,
    },
];

const RESIDUAL_MARKUP: &[char] = &['*', '_', '#', '`'];

/// Clean a title line; `None` when nothing is left.
pub fn clean_title(line: &str) -> Option<String> {
    let mut title = line.trim();
    loop {
        let before = title.len();
        for rule in TITLE_PREFIX_RULES {
            if let Some(rest) = rule.strip(title) {
                tracing::trace!(rule = rule.name, "stripped title prefix");
                title = rest.trim_start();
            }
        }
        if title.len() == before {
            break;
        }
    }

    let title = title
        .trim_matches(|c: char| RESIDUAL_MARKUP.contains(&c) || c.is_whitespace())
        .trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
