//! Fuzz harness for the full response parser
//!
//! Any text must parse without panicking, in either format, and every
//! produced case must carry a title and at least one step.

#![no_main]

use casegen_parse::parse_response;
use casegen_schema::case::CaseFormat;
use casegen_tagger::classify_case;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    for format in [CaseFormat::Gherkin, CaseFormat::Plain] {
        let parsed = parse_response(raw, format);
        for case in &parsed.cases {
            assert!(!case.title.is_empty());
            assert!(!case.steps.is_empty());
            assert_eq!(case.format, format);
            let _ = classify_case(case);
        }
    }
});
