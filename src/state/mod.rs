// State module - report tree and aggregates
// Single tree per session, mutated only by the event router

pub mod assertion;
pub mod case;
pub mod suite;

pub use assertion::AssertionRecord;
pub use case::CaseAggregate;
pub use suite::SuiteAggregate;

use serde::Serialize;

/// Routing cursor. The in-progress suite and case live here by value;
/// finalization moves them into the tree, so a saved suite can never be
/// aliased by a still-live cursor.
#[derive(Debug, Default)]
enum Cursor {
    #[default]
    Idle,
    InSuite(SuiteAggregate),
    InCase(SuiteAggregate, CaseAggregate),
}

/// The report tree for one test session: finalized suites in arrival
/// order plus the routing cursor for the suite currently being built.
#[derive(Debug, Default, Serialize)]
pub struct ReportTree {
    suites: Vec<SuiteAggregate>,
    #[serde(skip)]
    cursor: Cursor,
}

impl ReportTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new suite, finalizing any suite still in progress first.
    /// Returns true when an unfinished suite had to be finalized.
    pub fn open_suite(&mut self, name: impl Into<String>) -> bool {
        let finalized = self.finalize_current();
        self.cursor = Cursor::InSuite(SuiteAggregate::new(name));
        finalized
    }

    /// Open a new case inside the current suite, closing any case still in
    /// progress. Returns false (and leaves the tree untouched) when no
    /// suite is current.
    pub fn open_case(&mut self, name: impl Into<String>) -> bool {
        match std::mem::take(&mut self.cursor) {
            Cursor::Idle => false,
            Cursor::InSuite(suite) => {
                self.cursor = Cursor::InCase(suite, CaseAggregate::new(name));
                true
            }
            Cursor::InCase(mut suite, case) => {
                suite.push_case(case);
                self.cursor = Cursor::InCase(suite, CaseAggregate::new(name));
                true
            }
        }
    }

    /// Append an assertion record to the current case. Returns false when
    /// no case is current; the record is dropped in that situation.
    pub fn record(&mut self, assertion: AssertionRecord) -> bool {
        match &mut self.cursor {
            Cursor::InCase(_, case) => {
                case.record(assertion);
                true
            }
            _ => false,
        }
    }

    /// Finalize the current suite: close any open case, move the suite into
    /// the permanent collection, and clear the cursor. Returns false when
    /// nothing was in progress. Finalization is one-way; a stored suite is
    /// never mutated again.
    pub fn finalize_current(&mut self) -> bool {
        match std::mem::take(&mut self.cursor) {
            Cursor::Idle => false,
            Cursor::InSuite(suite) => {
                self.suites.push(suite);
                true
            }
            Cursor::InCase(mut suite, case) => {
                suite.push_case(case);
                self.suites.push(suite);
                true
            }
        }
    }

    /// Finalized suites, in arrival order
    pub fn suites(&self) -> &[SuiteAggregate] {
        &self.suites
    }

    /// Look up a finalized suite by name
    pub fn suite(&self, name: &str) -> Option<&SuiteAggregate> {
        self.suites.iter().find(|s| s.name() == name)
    }

    /// Number of finalized suites
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// True when no suite has been finalized yet
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// True while a suite is being built
    pub fn in_suite(&self) -> bool {
        !matches!(self.cursor, Cursor::Idle)
    }

    /// True while a case is being built
    pub fn in_case(&self) -> bool {
        matches!(self.cursor, Cursor::InCase(..))
    }

    /// Check if every finalized suite passed
    pub fn all_passed(&self) -> bool {
        self.suites.iter().all(|s| s.passed())
    }
}
