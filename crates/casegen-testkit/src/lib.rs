use casegen_ids::{CaseId, RunId};
use casegen_schema::case::{CaseFormat, Priority, TestCase};
use casegen_schema::provider::Provider;
use casegen_schema::run::{ProviderColumn, Run};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

pub mod proptest;

/// Typical Gherkin answer: chatty intro, three scenarios, bold summary.
pub const GHERKIN_RESPONSE: &str = "\
Here are the test scenarios for the login page:

Scenario: Successful login with valid credentials
Given the user is on the login page
When they enter a valid username and password
And they click the login button
Then they are redirected to the dashboard
Priority: High

Scenario: Login with an invalid password
Given the user is on the login page
When they enter an invalid password
Then an error message is shown
Priority: Medium

Scenario: Login with an empty username
Given the user is on the login page
When they leave the username empty
Then the login button stays disabled
Priority: Low

**Coverage Summary:** Covers the happy path, invalid credentials and empty input.
";

/// Typical plain-text answer: numbered cases with steps and expected results.
pub const PLAIN_RESPONSE: &str = "\
1. Test Case: Add item to cart
Test Steps:
- Open a product page
- Click Add to cart
Expected Result: The cart badge shows 1 item
Priority: High

2. Test Case: Remove item from cart
Test Steps:
- Open the cart
- Click Remove on the only item
Expected Result: The cart is empty
Priority: Low

Coverage Summary: Cart add and remove flows.
";

/// Output that matches no boundary rule at all.
pub const UNSTRUCTURED_RESPONSE: &str = "Just some unstructured text with no markers";

/// Fixed instant so serialized fixtures are stable.
pub fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// A case with a fresh id and the given steps.
pub fn case(title: &str, steps: &[&str]) -> TestCase {
    TestCase {
        id: CaseId::next(),
        title: title.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        expected_result: String::new(),
        priority: Priority::NotAvailable,
        format: CaseFormat::Gherkin,
    }
}

/// A plain-text case carrying an expected result and priority.
pub fn plain_case(title: &str, steps: &[&str], expected: &str, priority: Priority) -> TestCase {
    TestCase {
        expected_result: expected.to_string(),
        priority,
        format: CaseFormat::Plain,
        ..case(title, steps)
    }
}

/// A run where every listed provider was requested and answered.
pub fn run_with(format: CaseFormat, columns: Vec<(Provider, Vec<TestCase>)>) -> Run {
    let requested = columns.iter().map(|(p, _)| *p).collect();
    let columns: BTreeMap<_, _> = columns
        .into_iter()
        .map(|(p, cases)| {
            (
                p,
                ProviderColumn {
                    cases,
                    summary: format!("{} summary", p.label()),
                    failure: None,
                },
            )
        })
        .collect();
    Run {
        id: RunId("run_fixture".to_string()),
        created_at: fixed_time(),
        format,
        requested,
        columns,
    }
}
