//! Browser-automation skeletons generated from step text.
//!
//! Each step is mapped to a [`StepAction`] by keyword sniffing, then rendered
//! per framework. The output is a starting point for a human, not a runnable
//! suite: most steps become comments.

use casegen_schema::case::TestCase;

/// What a single step turns into in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction<'a> {
    /// Canned login sequence against a placeholder URL.
    Login,
    /// A TODO marker naming the interaction to fill in.
    Placeholder(&'static str),
    /// The step echoed as an assertion comment.
    Assert(&'a str),
    /// The step echoed as a plain comment.
    Comment(&'a str),
}

struct ActionRule {
    matches: fn(&str) -> bool,
    action: for<'a> fn(&'a str) -> StepAction<'a>,
}

// Checked in order against the lower-cased step; first match wins.
const ACTION_RULES: &[ActionRule] = &[
    ActionRule {
        matches: |l| l.contains("logged in"),
        action: |_| StepAction::Login,
    },
    ActionRule {
        matches: |l| l.contains("store locator") || l.contains("selects a location"),
        action: |_| StepAction::Placeholder("Add store locator interaction here"),
    },
    ActionRule {
        matches: |l| l.contains("adds") && l.contains("cart"),
        action: |_| StepAction::Placeholder("Add menu item to cart"),
    },
    ActionRule {
        matches: |l| l.contains("proceeds to the payment page"),
        action: |_| StepAction::Placeholder("Proceed to payment page"),
    },
    ActionRule {
        matches: |l| l.starts_with("when "),
        action: |step| StepAction::Comment(step),
    },
    ActionRule {
        matches: |l| l.starts_with("then ") || l.starts_with("and "),
        action: |step| StepAction::Assert(step),
    },
];

/// Classify one step.
pub fn step_action(step: &str) -> StepAction<'_> {
    let lower = step.to_lowercase();
    ACTION_RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map_or(StepAction::Comment(step), |rule| (rule.action)(step))
}

/// Escape text for a single-quoted JavaScript string literal.
pub fn js_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Comments end at a newline; keep generated comments on one line.
fn one_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn render_action(action: StepAction<'_>, indent: &str, login: &[&str], out: &mut String) {
    match action {
        StepAction::Login => {
            for line in login {
                out.push_str(indent);
                out.push_str(line);
                out.push('\n');
            }
        }
        StepAction::Placeholder(what) => out.push_str(&format!("{indent}// TODO: {what}\n")),
        StepAction::Assert(step) => out.push_str(&format!("{indent}// Assert: {}\n", one_line(step))),
        StepAction::Comment(step) => out.push_str(&format!("{indent}// {}\n", one_line(step))),
    }
}

const PLAYWRIGHT_HEADER: &str =
    "// Auto-generated Playwright tests\nimport { test, expect } from '@playwright/test';\n\n";

const PLAYWRIGHT_LOGIN: &[&str] = &[
    "await page.goto('https://your-dev-url.com/login');",
    "await page.fill('#email', 'testuser@example.com');",
    "await page.fill('#password', 'Password1!');",
    "await page.click('#login');",
];

const WEBDRIVERIO_LOGIN: &[&str] = &[
    "await browser.url('https://your-dev-url.com/login');",
    "await $('#email').setValue('testuser@example.com');",
    "await $('#password').setValue('Password1!');",
    "await $('#loginButton').click();",
];

/// One Playwright `test(...)` block.
pub fn to_playwright(case: &TestCase) -> String {
    let mut code = format!("test('{}', async ({{ page }}) => {{\n", js_single_quoted(&case.title));
    for step in &case.steps {
        render_action(step_action(step), "  ", PLAYWRIGHT_LOGIN, &mut code);
    }
    code.push_str("});\n\n");
    code
}

/// A Playwright spec file with one test per case.
pub fn export_playwright<'a>(cases: impl IntoIterator<Item = &'a TestCase>) -> String {
    let mut code = PLAYWRIGHT_HEADER.to_string();
    for case in cases {
        code.push_str(&to_playwright(case));
    }
    code
}

/// One WebdriverIO `describe(...)` block with a single `it`.
pub fn to_webdriverio(case: &TestCase) -> String {
    let mut code = format!(
        "describe('{}', () => {{\n  it('should execute the scenario', async () => {{\n",
        js_single_quoted(&case.title)
    );
    for step in &case.steps {
        render_action(step_action(step), "    ", WEBDRIVERIO_LOGIN, &mut code);
    }
    code.push_str("  });\n});\n");
    code
}

/// All cases as WebdriverIO suites separated by a blank line.
pub fn export_webdriverio<'a>(cases: impl IntoIterator<Item = &'a TestCase>) -> String {
    cases
        .into_iter()
        .map(to_webdriverio)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use casegen_testkit::case;

    #[test]
    fn step_rules_in_order() {
        assert_eq!(step_action("Given the user is logged in"), StepAction::Login);
        assert_eq!(
            step_action("When the user opens the Store Locator"),
            StepAction::Placeholder("Add store locator interaction here")
        );
        assert_eq!(
            step_action("When the user adds a burger to the cart"),
            StepAction::Placeholder("Add menu item to cart")
        );
        assert_eq!(
            step_action("And proceeds to the payment page"),
            StepAction::Placeholder("Proceed to payment page")
        );
        assert_eq!(step_action("When they click save"), StepAction::Comment("When they click save"));
        assert_eq!(step_action("Then it is saved"), StepAction::Assert("Then it is saved"));
        assert_eq!(step_action("AND a toast shows"), StepAction::Assert("AND a toast shows"));
        assert_eq!(step_action("Given a page"), StepAction::Comment("Given a page"));
    }

    #[test]
    fn login_wins_over_assert() {
        assert_eq!(step_action("Then the user is logged in"), StepAction::Login);
    }

    #[test]
    fn escapes_single_quotes_and_backslashes() {
        assert_eq!(js_single_quoted(r"User's \ path"), r"User\'s \\ path");
        assert_eq!(js_single_quoted("a\nb"), "a\\nb");
    }

    #[test]
    fn playwright_block() {
        let tc = case("User's login", &["Given the user is logged in", "When they open settings", "Then settings show"]);
        insta::assert_snapshot!(to_playwright(&tc), @r"
test('User\'s login', async ({ page }) => {
  await page.goto('https://your-dev-url.com/login');
  await page.fill('#email', 'testuser@example.com');
  await page.fill('#password', 'Password1!');
  await page.click('#login');
  // When they open settings
  // Assert: Then settings show
});
");
    }

    #[test]
    fn playwright_file_has_header_once() {
        let cases = [case("A", &["Given a"]), case("B", &["Given b"])];
        let out = export_playwright(&cases);
        assert!(out.starts_with(PLAYWRIGHT_HEADER));
        assert_eq!(out.matches("import { test, expect }").count(), 1);
        assert_eq!(out.matches("test('").count(), 2);
    }

    #[test]
    fn webdriverio_block() {
        let tc = case("Checkout", &["When the user adds a pizza to the cart", "Then the total updates"]);
        assert_eq!(
            to_webdriverio(&tc),
            "describe('Checkout', () => {\n  it('should execute the scenario', async () => {\n    // TODO: Add menu item to cart\n    // Assert: Then the total updates\n  });\n});\n"
        );
    }

    #[test]
    fn webdriverio_suites_are_blank_line_separated() {
        let cases = [case("A", &["Given a"]), case("B", &["Given b"])];
        let out = export_webdriverio(&cases);
        assert_eq!(out.matches("});\n});\n\n\ndescribe('B'").count(), 1);
    }
}
