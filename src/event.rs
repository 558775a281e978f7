// Session lifecycle events - the exporter's input vocabulary
// One variant per runner hook; consumption order is the runner's dispatch order

use serde::{Deserialize, Serialize};

/// A lifecycle event emitted by the host test session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A named suite is starting
    SuiteStart { name: String },

    /// A named case (step) is starting inside the current suite
    CaseStart { name: String },

    /// A single assertion passed
    AssertionPass {
        source: String,
        message: Option<String>,
    },

    /// A single assertion failed
    AssertionFail {
        source: String,
        message: Option<String>,
        standard_message: String,
        kind: String,
    },

    /// The current suite finished
    SuiteDone,

    /// The session asked for the report to be rendered and persisted
    SessionSave,
}

impl SessionEvent {
    /// Short label for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            SessionEvent::SuiteStart { .. } => "suite-start",
            SessionEvent::CaseStart { .. } => "case-start",
            SessionEvent::AssertionPass { .. } => "assertion-pass",
            SessionEvent::AssertionFail { .. } => "assertion-fail",
            SessionEvent::SuiteDone => "suite-done",
            SessionEvent::SessionSave => "session-save",
        }
    }
}
