//! Data model for a single patient's laboratory results.
//!
//! A [`PatientRecord`] owns an insertion-ordered collection of
//! [`TestResult`]s keyed by test name. Rule catalogs refer to tests only by
//! name and write failure annotations back through [`PatientRecord::annotate`].

pub mod error;
pub mod patient;
pub mod test_result;

pub use error::{ModelError, Result};
pub use patient::{PatientRecord, TestResults};
pub use test_result::TestResult;
