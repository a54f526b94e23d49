use labcheck_model::PatientRecord;

use crate::error::Result;

/// Rule identifier as written in the rule file.
pub type RuleId = i64;

/// Contract shared by every rule kind.
pub trait Rule {
    fn id(&self) -> RuleId;

    /// Name of the test that receives the annotation when the rule fails.
    fn target_test(&self) -> &str;

    /// Evaluate against a patient. `Ok(true)` means the rule passes.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownTestReference`] when a referenced test is
    /// absent from the patient record.
    ///
    /// [`RuleError::UnknownTestReference`]: crate::RuleError::UnknownTestReference
    fn evaluate(&self, patient: &PatientRecord) -> Result<bool>;

    /// Describe a violated structural invariant, if any.
    ///
    /// Used for load-time warnings only; it never changes evaluation.
    fn invariant_violation(&self) -> Option<String> {
        None
    }
}
