//! One entry point from raw provider text to normalized cases.
//!
//! `parse_response` runs segmentation, extraction and normalization in that
//! order. It is parameterised by output format only; nothing here knows which
//! provider produced the text.
//!
//! Parsing is total over non-blank input: unstructured text becomes a single
//! `Untitled` case whose steps are the text's non-blank lines.

use casegen_extract::{extract, is_empty_draft};
use casegen_normalize::{normalize, normalize_batch};
use casegen_schema::case::{CaseFormat, TestCase, TestCaseDraft};
use casegen_schema::run::ParsedResponse;
use casegen_segment::segment;

/// Parse one provider response.
pub fn parse_response(raw: &str, format: CaseFormat) -> ParsedResponse {
    if raw.trim().is_empty() {
        tracing::debug!(%format, "blank provider response");
        return ParsedResponse::default();
    }

    let seg = segment(raw, format);
    if !seg.preamble.trim().is_empty() {
        tracing::debug!(preamble_len = seg.preamble.len(), "skipping text before first case");
    }

    let drafts: Vec<TestCaseDraft> = if seg.fallback {
        seg.chunks.iter().map(|chunk| fallback_draft(chunk)).collect()
    } else {
        seg.chunks.iter().map(|chunk| extract(chunk, format)).collect()
    };

    let drafts = if !drafts.is_empty() && drafts.iter().all(is_empty_draft) {
        tracing::warn!(chunks = drafts.len(), "every chunk extracted empty, using whole text");
        vec![fallback_draft(&seg.cases_text())]
    } else {
        drafts
    };

    let cases = normalize_batch(&drafts, format);
    tracing::debug!(
        %format,
        cases = cases.len(),
        fallback = seg.fallback,
        has_summary = !seg.summary.is_empty(),
        "parsed provider response"
    );

    ParsedResponse {
        cases,
        summary: seg.summary,
    }
}

/// Parse a single chunk that is already known to hold one case.
pub fn parse_chunk(chunk: &str, format: CaseFormat) -> TestCase {
    normalize(&extract(chunk, format), format)
}

/// Raw text kept verbatim as the steps of one `Untitled` record.
fn fallback_draft(text: &str) -> TestCaseDraft {
    let steps = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    TestCaseDraft::untitled(steps)
}
