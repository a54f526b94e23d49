use labcheck_model::PatientRecord;
use serde::{Deserialize, Serialize};

use crate::comparator::Comparator;
use crate::error::{Result, RuleError};
use crate::rule::{Rule, RuleId};

/// Forbids `test1 <cmp1> val1` and `test2 <cmp2> val2` holding together.
///
/// Only `test2` is annotated on violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRule {
    pub id: RuleId,
    pub test1: String,
    pub cmp1: Comparator,
    pub val1: f64,
    pub test2: String,
    pub cmp2: Comparator,
    pub val2: f64,
}

impl InteractionRule {
    fn value_of(&self, patient: &PatientRecord, test: &str) -> Result<f64> {
        patient
            .value_of(test)
            .map_err(|_| RuleError::UnknownTestReference {
                rule_id: self.id,
                test: test.to_string(),
            })
    }
}

impl Rule for InteractionRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn target_test(&self) -> &str {
        &self.test2
    }

    fn evaluate(&self, patient: &PatientRecord) -> Result<bool> {
        // Both lookups happen before either predicate so a missing test2 is
        // reported even when the first predicate is false.
        let first = self.value_of(patient, &self.test1)?;
        let second = self.value_of(patient, &self.test2)?;
        let violated = self.cmp1.apply(first, self.val1) && self.cmp2.apply(second, self.val2);
        Ok(!violated)
    }
}
