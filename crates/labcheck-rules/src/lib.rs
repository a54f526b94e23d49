//! Rule model and evaluation engine.
//!
//! Two rule kinds share the [`Rule`] contract:
//!
//! - [`RangeRule`]: one test must lie strictly between a minimum and maximum.
//! - [`InteractionRule`]: two tests must not satisfy their predicates at the
//!   same time; the second test is annotated on violation.
//!
//! A [`RuleCatalog`] holds rules of one kind in declaration order and writes
//! `"<catalog> <id>"` annotations into a [`PatientRecord`] during
//! classification. [`check`] applies several catalogs in a fixed order.
//!
//! [`PatientRecord`]: labcheck_model::PatientRecord

mod catalog;
mod comparator;
mod error;
mod interaction;
mod range;
mod rule;

pub use catalog::{
    Classify, INTERACTION_CATALOG, InteractionCatalog, RANGE_CATALOG, RangeCatalog, RuleCatalog,
    check,
};
pub use comparator::Comparator;
pub use error::{Result, RuleError};
pub use interaction::InteractionRule;
pub use range::RangeRule;
pub use rule::{Rule, RuleId};
