//! Error types for rule resolution and evaluation.

use thiserror::Error;

use crate::rule::RuleId;

/// Errors raised while building or evaluating rules. All of them are fatal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuleError {
    /// Comparison symbol outside `<`, `<=`, `>`, `>=`, `=`.
    #[error("unresolved comparator '{symbol}' (expected one of <, <=, >, >=, =)")]
    UnresolvedComparator { symbol: String },

    /// A rule names a test the patient record does not contain.
    #[error("rule {rule_id} references unknown test '{test}'")]
    UnknownTestReference { rule_id: RuleId, test: String },

    /// Evaluation failure inside a named catalog.
    #[error("in {category} catalog")]
    Catalog {
        category: String,
        #[source]
        source: Box<RuleError>,
    },
}

impl RuleError {
    pub(crate) fn in_catalog(self, category: &str) -> Self {
        Self::Catalog {
            category: category.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping catalog context.
    pub fn root(&self) -> &RuleError {
        match self {
            Self::Catalog { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;
