use labcheck_model::PatientRecord;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};
use crate::rule::{Rule, RuleId};

/// Requires a test value to lie strictly between `min` and `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    pub id: RuleId,
    pub test: String,
    pub min: f64,
    pub max: f64,
}

impl RangeRule {
    pub fn new(id: RuleId, test: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            id,
            test: test.into(),
            min,
            max,
        }
    }

    /// Both bounds are exclusive.
    pub fn accepts(&self, value: f64) -> bool {
        self.min < value && value < self.max
    }
}

impl Rule for RangeRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn target_test(&self) -> &str {
        &self.test
    }

    fn evaluate(&self, patient: &PatientRecord) -> Result<bool> {
        let value = patient
            .value_of(&self.test)
            .map_err(|_| RuleError::UnknownTestReference {
                rule_id: self.id,
                test: self.test.clone(),
            })?;
        Ok(self.accepts(value))
    }

    fn invariant_violation(&self) -> Option<String> {
        if self.min < self.max {
            return None;
        }
        Some(format!(
            "min {} is not below max {}; no value can pass",
            self.min, self.max
        ))
    }
}
