// Case aggregate - an ordered sequence of assertion records

use crate::state::AssertionRecord;
use serde::Serialize;

/// A named step within a suite, owning its assertion records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseAggregate {
    name: String,
    assertions: Vec<AssertionRecord>,
}

impl CaseAggregate {
    /// Create an empty case
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assertions: Vec::new(),
        }
    }

    /// Append an assertion record
    pub fn record(&mut self, assertion: AssertionRecord) {
        self.assertions.push(assertion);
    }

    /// Case name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All assertion records, in arrival order
    pub fn assertions(&self) -> &[AssertionRecord] {
        &self.assertions
    }

    /// Derived pass state: AND over all assertions. A case with zero
    /// assertions counts as passed (vacuous truth).
    pub fn passed(&self) -> bool {
        self.assertions.iter().all(|a| a.passed)
    }

    /// Number of assertions
    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    /// True when no assertion has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_case_counts_as_passed() {
        // Fixed policy: zero assertions is a pass, not a failure.
        let case = CaseAggregate::new("submit form");
        assert!(case.passed());
        assert!(case.is_empty());
    }

    #[test]
    fn test_case_passes_only_when_all_assertions_pass() {
        let mut case = CaseAggregate::new("submit form");
        case.record(AssertionRecord::pass("a", None));
        assert!(case.passed());

        case.record(AssertionRecord::fail("b", None, "assert failed", "unknown"));
        assert!(!case.passed());
        assert_eq!(case.len(), 2);
    }

    #[test]
    fn test_assertions_keep_arrival_order() {
        let mut case = CaseAggregate::new("order");
        case.record(AssertionRecord::pass("first", None));
        case.record(AssertionRecord::pass("second", None));
        let descriptions: Vec<&str> = case
            .assertions()
            .iter()
            .map(|a| a.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }
}
