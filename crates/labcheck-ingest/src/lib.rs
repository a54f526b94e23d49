//! Loading of rule catalogs and patient records from tab-separated files.
//!
//! # File formats
//!
//! Rule files have no header row; fields are positional:
//!
//! - Range rules: `Id  Test  Min  Max`
//! - Interaction rules: `Id  Test1  Comparison1  Value1  Test2  Comparison2  Value2`
//!
//! A patient file starts with the patient name on its own line, followed by
//! one `TestName  Value` row per test.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use labcheck_ingest::{load_catalog, read_patient};
//! use labcheck_rules::{RANGE_CATALOG, RangeCatalog};
//!
//! let mut ranges = RangeCatalog::new(RANGE_CATALOG);
//! load_catalog(&mut ranges, Path::new("ranges.tsv"))?;
//! let patient = read_patient(Path::new("patient.tsv"))?;
//! ```

mod error;
mod patient;
mod rules;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Rule Files ===
pub use rules::{TsvRule, load_catalog, read_rules};

// === Patient Files ===
pub use patient::{parse_patient, read_patient};
