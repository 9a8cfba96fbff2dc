//! Prompts that request provider output in the shape the parser expects.
//!
//! The markers named here (`Scenario:`, `1. Test Case:`, `Test Steps:`,
//! `Expected Result:`, `Priority:`, `Coverage Summary:`) are the same ones the
//! segmenter and extractor look for. Changing one side means changing both.

use casegen_schema::case::CaseFormat;

/// System prompt for the requested output style.
pub fn system_prompt(format: CaseFormat) -> String {
    let layout = match format {
        CaseFormat::Gherkin => GHERKIN_LAYOUT,
        CaseFormat::Plain => PLAIN_LAYOUT,
    };

    format!(
        r#"You are a senior QA engineer. Given a feature description, user story or requirement, write test cases that cover positive flows, negative flows (invalid input, errors, failures) and edge cases (empty values, boundaries, limits).

{layout}

After the last test case, write one paragraph starting with "Coverage Summary:" describing what the cases cover and any notable gaps.

Rules:
- Put every field label at the start of its own line
- Use exactly one of High, Medium or Low after "Priority:"
- Do not wrap the answer in markdown code fences
- Do not add commentary between test cases"#
    )
}

const GHERKIN_LAYOUT: &str = r#"Write each test case as a Gherkin scenario:

Scenario: <short title>
Given <precondition>
When <action>
Then <expected outcome>
And <additional outcome, optional>
Priority: <High|Medium|Low>"#;

const PLAIN_LAYOUT: &str = r#"Write each test case as a numbered plain-text entry:

1. Test Case: <short title>
Test Steps:
- <step>
- <step>
Expected Result: <expected outcome>
Priority: <High|Medium|Low>"#;

/// User prompt wrapping the feature description.
pub fn user_prompt(feature_description: &str) -> String {
    format!(
        "Generate test cases for the following requirement:\n\n{}",
        feature_description.trim()
    )
}
