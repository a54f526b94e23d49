//! Ordered rule catalogs and classification.

use labcheck_model::PatientRecord;
use tracing::{debug, info, warn};

use crate::error::{Result, RuleError};
use crate::interaction::InteractionRule;
use crate::range::RangeRule;
use crate::rule::Rule;

/// Default name of the range catalog.
pub const RANGE_CATALOG: &str = "Range";

/// Default name of the interaction catalog.
pub const INTERACTION_CATALOG: &str = "Interaction";

pub type RangeCatalog = RuleCatalog<RangeRule>;
pub type InteractionCatalog = RuleCatalog<InteractionRule>;

/// A named collection of rules of one kind, kept in declaration order.
#[derive(Debug, Clone)]
pub struct RuleCatalog<R> {
    name: String,
    rules: Vec<R>,
}

impl<R: Rule> RuleCatalog<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append one rule after all existing ones.
    ///
    /// Broken invariants and repeated ids are logged but the rule is kept.
    pub fn push(&mut self, rule: R) {
        if let Some(problem) = rule.invariant_violation() {
            warn!(catalog = %self.name, rule_id = rule.id(), test = rule.target_test(), "{problem}");
        }
        if self.rules.iter().any(|existing| existing.id() == rule.id()) {
            warn!(catalog = %self.name, rule_id = rule.id(), "duplicate rule id in catalog");
        }
        self.rules.push(rule);
    }

    /// Append rules in iteration order, after all existing ones.
    pub fn extend<I: IntoIterator<Item = R>>(&mut self, rules: I) {
        for rule in rules {
            self.push(rule);
        }
    }

    /// Annotation written for a failing rule.
    pub fn annotation(&self, rule: &R) -> String {
        format!("{} {}", self.name, rule.id())
    }

    /// Evaluate every rule in declaration order and append an annotation to
    /// the target test of each failing rule.
    ///
    /// Returns the number of annotations appended. Running the same catalog
    /// twice appends every annotation twice.
    ///
    /// # Errors
    ///
    /// Stops at the first rule that references a test missing from `patient`.
    /// Annotations from earlier rules stay in place.
    pub fn classify(&self, patient: &mut PatientRecord) -> Result<usize> {
        let mut appended = 0usize;
        for rule in &self.rules {
            let passes = rule
                .evaluate(patient)
                .map_err(|error| error.in_catalog(&self.name))?;
            if passes {
                continue;
            }
            let annotation = self.annotation(rule);
            debug!(catalog = %self.name, rule_id = rule.id(), test = rule.target_test(), "rule failed");
            patient
                .annotate(rule.target_test(), annotation)
                .map_err(|_| {
                    RuleError::UnknownTestReference {
                        rule_id: rule.id(),
                        test: rule.target_test().to_string(),
                    }
                    .in_catalog(&self.name)
                })?;
            appended += 1;
        }
        info!(
            catalog = %self.name,
            rules = self.rules.len(),
            annotations = appended,
            "classification complete"
        );
        Ok(appended)
    }
}

/// Object-safe view of a catalog, so catalogs of different rule kinds can be
/// applied together.
pub trait Classify {
    fn name(&self) -> &str;

    fn classify(&self, patient: &mut PatientRecord) -> Result<usize>;
}

impl<R: Rule> Classify for RuleCatalog<R> {
    fn name(&self) -> &str {
        RuleCatalog::name(self)
    }

    fn classify(&self, patient: &mut PatientRecord) -> Result<usize> {
        RuleCatalog::classify(self, patient)
    }
}

/// Apply catalogs to a patient strictly in the given order.
///
/// Returns the total number of annotations appended.
///
/// # Errors
///
/// Propagates the first evaluation error; later catalogs are not applied.
pub fn check(patient: &mut PatientRecord, catalogs: &[&dyn Classify]) -> Result<usize> {
    let mut total = 0usize;
    for catalog in catalogs {
        total += catalog.classify(patient)?;
    }
    Ok(total)
}
