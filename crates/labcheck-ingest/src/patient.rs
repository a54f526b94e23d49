//! Patient file loading.

use std::path::Path;

use labcheck_model::{PatientRecord, TestResult};
use serde::Deserialize;
use tracing::{debug, info_span, warn};

use crate::error::Result;
use crate::tsv::{parse_field, read_rows, read_to_string};

#[derive(Debug, Deserialize)]
struct TestRow {
    name: String,
    value: String,
}

/// Read a patient file from disk.
///
/// # Errors
///
/// Fails if the file cannot be read or any test row is malformed.
pub fn read_patient(path: &Path) -> Result<PatientRecord> {
    let span = info_span!("load_patient", path = %path.display());
    let _guard = span.enter();
    let content = read_to_string(path)?;
    parse_patient(&content, path)
}

/// Parse patient file content. `path` is used only for diagnostics.
///
/// The first line is the patient name (trimmed); every following non-blank
/// line is a `TestName<TAB>Value` row. A repeated test name replaces the
/// earlier value but keeps its position.
pub fn parse_patient(content: &str, path: &Path) -> Result<PatientRecord> {
    let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
    let mut patient = PatientRecord::new(first.trim());

    for located in read_rows::<TestRow>(rest, path, 1)? {
        let value = parse_field(&located.row.value, "Value", path, located.line)?;
        if patient
            .tests
            .insert(located.row.name, TestResult::new(value))
            .is_some()
        {
            warn!(line = located.line, "duplicate test name; later value wins");
        }
    }

    debug!(tests = patient.tests.len(), "patient loaded");
    Ok(patient)
}
