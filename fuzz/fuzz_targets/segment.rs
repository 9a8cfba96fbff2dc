//! Fuzz harness for response segmentation
//!
//! Segmentation partitions the text before the summary marker: preamble
//! plus chunks must reproduce it exactly.

#![no_main]

use casegen_schema::case::CaseFormat;
use casegen_segment::{segment, split_summary};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let (cases_text, _) = split_summary(raw);
    for format in [CaseFormat::Gherkin, CaseFormat::Plain] {
        let seg = segment(raw, format);
        assert_eq!(seg.cases_text(), cases_text);
        assert!(seg.chunks.iter().all(|c| !c.is_empty()));
    }
});
