// Assertion record - one pass/fail fact, immutable once created

use serde::Serialize;

/// A single assertion outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionRecord {
    pub description: String,
    pub passed: bool,
    pub message: Option<String>,
    pub kind: Option<String>,
}

impl AssertionRecord {
    /// Create a passing record
    pub fn pass(description: impl Into<String>, message: Option<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            message,
            kind: None,
        }
    }

    /// Create a failing record. The failure message falls back to the
    /// runner's standard message when the assertion carried none of its own.
    pub fn fail(
        description: impl Into<String>,
        message: Option<String>,
        standard_message: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            passed: false,
            message: Some(message.unwrap_or_else(|| standard_message.into())),
            kind: Some(kind.into()),
        }
    }
}
