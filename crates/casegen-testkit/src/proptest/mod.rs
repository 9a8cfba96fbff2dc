//! Proptest strategies for casegen property-based testing
//!
//! Generated provider responses carry the structure they were built from, so
//! tests can compare parser output against ground truth.

pub mod strategies;

pub use strategies::{
    GeneratedCase, strategy_case_format, strategy_freeform_text, strategy_gherkin_case,
    strategy_gherkin_response, strategy_plain_case, strategy_plain_response, strategy_priority,
    strategy_provider, strategy_provider_subset, strategy_step_lines,
};
