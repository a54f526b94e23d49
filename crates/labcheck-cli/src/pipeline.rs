//! Orchestration: load both catalogs, load the patient, classify.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use labcheck_ingest::{load_catalog, read_patient};
use labcheck_model::PatientRecord;
use labcheck_rules::{
    INTERACTION_CATALOG, InteractionCatalog, RANGE_CATALOG, RangeCatalog, check,
};
use tracing::{info, info_span, trace};

use crate::logging::redact_value;

/// Input files for one run.
#[derive(Debug, Clone)]
pub struct CheckInputs {
    pub range_rules: PathBuf,
    pub interaction_rules: PathBuf,
    pub patient: PathBuf,
}

/// A classified patient record.
#[derive(Debug)]
pub struct CheckOutcome {
    pub patient: PatientRecord,
    /// Total annotations appended across both catalogs.
    pub annotations: usize,
}

/// Load both rule catalogs.
pub fn load_catalogs(inputs: &CheckInputs) -> Result<(RangeCatalog, InteractionCatalog)> {
    let mut ranges = RangeCatalog::new(RANGE_CATALOG);
    load_catalog(&mut ranges, &inputs.range_rules).with_context(|| {
        format!(
            "load range rules from {}",
            inputs.range_rules.display()
        )
    })?;

    let mut interactions = InteractionCatalog::new(INTERACTION_CATALOG);
    load_catalog(&mut interactions, &inputs.interaction_rules).with_context(|| {
        format!(
            "load interaction rules from {}",
            inputs.interaction_rules.display()
        )
    })?;

    Ok((ranges, interactions))
}

/// Run the full check: range catalog first, then interaction catalog.
pub fn run_check(inputs: &CheckInputs) -> Result<CheckOutcome> {
    let start = Instant::now();
    let (ranges, interactions) = load_catalogs(inputs)?;

    let mut patient = read_patient(&inputs.patient)
        .with_context(|| format!("load patient from {}", inputs.patient.display()))?;

    let span = info_span!("classify", patient = %redact_value(&patient.name));
    let _guard = span.enter();
    for (name, result) in patient.tests.iter() {
        trace!(test = name, value = %redact_value(&result.value.to_string()), "test value");
    }

    let annotations = check(&mut patient, &[&ranges, &interactions])
        .context("classify patient")?;

    info!(
        range_rules = ranges.len(),
        interaction_rules = interactions.len(),
        tests = patient.tests.len(),
        failing_tests = patient.failing_test_count(),
        annotations,
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );

    Ok(CheckOutcome {
        patient,
        annotations,
    })
}
