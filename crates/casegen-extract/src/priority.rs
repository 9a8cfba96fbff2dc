use casegen_schema::case::Priority;
use regex::Regex;
use std::sync::LazyLock;

static PRIORITY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)priority:\s*[*_]*\s*(high|medium|low)\b").expect("static regex must compile")
});

/// Priority tag anywhere in the chunk, `NotAvailable` when absent.
///
/// Scans the whole chunk (title line included), not just the body.
pub fn find_priority(chunk: &str) -> Priority {
    PRIORITY_LABEL_RE
        .captures(chunk)
        .and_then(|caps| caps.get(1))
        .map_or(Priority::NotAvailable, |m| Priority::from_label(m.as_str()))
}

/// Lines carrying a priority label never leak into steps or expectations.
pub fn is_priority_line(line: &str) -> bool {
    line.to_ascii_lowercase().contains("priority:")
}

/// `line` with any priority label and the text after it removed.
///
/// "Dashboard shows. Priority: High" keeps "Dashboard shows."; a line that
/// is only a label comes back empty.
pub fn strip_priority_label(line: &str) -> &str {
    match line.to_ascii_lowercase().find("priority:") {
        Some(at) => line[..at].trim_end_matches(['*', '_']).trim_end(),
        None => line,
    }
}
