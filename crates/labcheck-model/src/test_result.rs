use serde::{Deserialize, Serialize};

/// A single measured value plus the annotations of every rule it failed.
///
/// Failures form an append-only log: classification pushes to the end and
/// nothing ever removes or reorders entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub value: f64,
    failures: Vec<String>,
}

impl TestResult {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            failures: Vec::new(),
        }
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn push_failure(&mut self, annotation: impl Into<String>) {
        self.failures.push(annotation.into());
    }
}
