//! Rendering of a classified patient record.

use anyhow::{Context, Result};
use labcheck_model::PatientRecord;

/// Marker appended to a test line that has failures.
const FAILURE_MARKER: &str = "*";

/// Render the record as text.
///
/// The patient name comes first, then one line per test in insertion order.
/// A failing test line ends with `\t*` and is followed by one tab-indented
/// line per annotation. No trailing newline.
pub fn render_text(patient: &PatientRecord) -> String {
    let mut lines = vec![patient.name.clone()];
    for (name, result) in patient.tests.iter() {
        let value = format_value(result.value);
        if !result.has_failures() {
            lines.push(format!("{name}\t{value}"));
            continue;
        }
        lines.push(format!("{name}\t{value}\t{FAILURE_MARKER}"));
        lines.extend(result.failures().iter().map(|failure| format!("\t{failure}")));
    }
    lines.join("\n")
}

/// Render the record as pretty-printed JSON.
pub fn render_json(patient: &PatientRecord) -> Result<String> {
    serde_json::to_string_pretty(patient).context("serialize patient record")
}

/// Format a measured value in its shortest round-trip form.
///
/// Integral values keep a trailing `.0`. Magnitudes at or above `1e16` or
/// below `1e-4` use exponent form with an explicit sign and at least two
/// exponent digits (`1e+20`, `1e-05`).
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let debug = format!("{value:?}");
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}
