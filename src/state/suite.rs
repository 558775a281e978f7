// Suite aggregate - an ordered, name-keyed collection of cases

use crate::state::CaseAggregate;
use serde::Serialize;

/// A named group of cases corresponding to one suite of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteAggregate {
    name: String,
    cases: Vec<CaseAggregate>,
}

impl SuiteAggregate {
    /// Create an empty suite
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Append a finished case. Insertion order is render order.
    pub fn push_case(&mut self, case: CaseAggregate) {
        self.cases.push(case);
    }

    /// Suite name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cases, in insertion order
    pub fn cases(&self) -> &[CaseAggregate] {
        &self.cases
    }

    /// Look up a case by name
    pub fn case(&self, name: &str) -> Option<&CaseAggregate> {
        self.cases.iter().find(|c| c.name() == name)
    }

    /// Derived pass state: AND over all cases. A suite with zero cases
    /// counts as passed, matching the empty-case policy.
    pub fn passed(&self) -> bool {
        self.cases.iter().all(|c| c.passed())
    }

    /// Number of cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when the suite owns no cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
