//! Errors for the operations casegen can refuse.
//!
//! Parsing never fails; malformed provider text degrades to a fallback
//! record. What remains are requests a caller made that cannot be honoured:
//! a step edit that names no case or leaves no steps, and a configuration no
//! run could be built from. Each error carries its category plus key/value
//! context naming the offending input, so callers branch on the category
//! and show the context instead of matching message text.

use std::fmt;

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// An edit to a run that would break it (unknown case, empty steps).
    Validation,
    /// A configuration value outside its allowed range.
    Config,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => f.write_str("validation"),
            ErrorCategory::Config => f.write_str("config"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasegenError {
    category: ErrorCategory,
    message: String,
    context: Vec<(String, String)>,
}

impl CasegenError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Validation, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Config, message)
    }

    fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Attach the input that caused the refusal, e.g. `("case_id", id)`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// First context value recorded under `key`.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    pub fn is_config_error(&self) -> bool {
        self.category == ErrorCategory::Config
    }
}

impl fmt::Display for CasegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.category, self.message)?;
        let mut context = self.context.iter();
        if let Some((key, value)) = context.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in context {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for CasegenError {}

pub type Result<T> = std::result::Result<T, CasegenError>;
