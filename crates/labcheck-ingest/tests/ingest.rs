//! Tests for rule and patient file loading.

use std::io::Write;
use std::path::{Path, PathBuf};

use labcheck_ingest::{IngestError, load_catalog, parse_patient, read_patient, read_rules};
use labcheck_rules::{
    Comparator, INTERACTION_CATALOG, InteractionCatalog, InteractionRule, RANGE_CATALOG,
    RangeCatalog, RangeRule, RuleError,
};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(content.as_bytes()).expect("write file");
    path
}

// --- Range rule files ---

#[test]
fn reads_range_rules_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ranges.tsv", "1\tGlucose\t70\t110\n2\tBUN\t7\t20.5\n");

    let rules: Vec<RangeRule> = read_rules(&path).unwrap();
    assert_eq!(
        rules,
        vec![
            RangeRule::new(1, "Glucose", 70.0, 110.0),
            RangeRule::new(2, "BUN", 7.0, 20.5),
        ]
    );
}

#[test]
fn malformed_range_bound_names_field_and_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ranges.tsv", "1\tGlucose\t70\t110\n2\tBUN\tlow\t20\n");

    let err = read_rules::<RangeRule>(&path).unwrap_err();
    match err {
        IngestError::MalformedField {
            line, field, value, ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(field, "Min");
            assert_eq!(value, "low");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_integer_rule_id_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ranges.tsv", "one\tGlucose\t70\t110\n");

    let err = read_rules::<RangeRule>(&path).unwrap_err();
    assert!(matches!(err, IngestError::MalformedField { field: "Id", .. }));
}

#[test]
fn short_rule_row_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ranges.tsv", "1\tGlucose\t70\n");

    let err = read_rules::<RangeRule>(&path).unwrap_err();
    assert!(matches!(err, IngestError::TsvParse { line: 1, .. }));
}

#[test]
fn missing_rule_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.tsv");

    let err = read_rules::<RangeRule>(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn load_catalog_appends_across_files() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "a.tsv", "1\tGlucose\t70\t110\n");
    let second = write_file(&dir, "b.tsv", "2\tBUN\t7\t20\n3\tSodium\t135\t145\n");

    let mut catalog = RangeCatalog::new(RANGE_CATALOG);
    assert_eq!(load_catalog(&mut catalog, &first).unwrap(), 1);
    assert_eq!(load_catalog(&mut catalog, &second).unwrap(), 2);

    let ids: Vec<i64> = catalog.rules().iter().map(|rule| rule.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn failed_load_leaves_catalog_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.tsv", "1\tGlucose\t70\t110\n2\tBUN\t7\tx\n");

    let mut catalog = RangeCatalog::new(RANGE_CATALOG);
    assert!(load_catalog(&mut catalog, &path).is_err());
    assert!(catalog.is_empty());
}

// --- Interaction rule files ---

#[test]
fn reads_interaction_rules() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "interactions.tsv",
        "2\tBUN\t>\t20\tCreatinine\t>\t1.2\n5\tSodium\t<=\t130\tPotassium\t=\t6\n",
    );

    let mut catalog = InteractionCatalog::new(INTERACTION_CATALOG);
    load_catalog(&mut catalog, &path).unwrap();
    assert_eq!(
        catalog.rules()[0],
        InteractionRule {
            id: 2,
            test1: "BUN".to_string(),
            cmp1: Comparator::Greater,
            val1: 20.0,
            test2: "Creatinine".to_string(),
            cmp2: Comparator::Greater,
            val2: 1.2,
        }
    );
    assert_eq!(catalog.rules()[1].cmp1, Comparator::LessOrEqual);
    assert_eq!(catalog.rules()[1].cmp2, Comparator::Equal);
}

#[test]
fn unknown_comparator_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "interactions.tsv",
        "2\tBUN\t>\t20\tCreatinine\t>\t1.2\n3\tBUN\t!=\t20\tCreatinine\t>\t1.2\n",
    );

    let err = read_rules::<InteractionRule>(&path).unwrap_err();
    match err {
        IngestError::Rule { line, source, .. } => {
            assert_eq!(line, 2);
            assert_eq!(
                source,
                RuleError::UnresolvedComparator {
                    symbol: "!=".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

// --- Patient files ---

#[test]
fn reads_patient_name_and_tests_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "patient.tsv",
        "  Jane Doe  \nGlucose\t115\nBUN\t25\nCreatinine\t1.5\n",
    );

    let patient = read_patient(&path).unwrap();
    assert_eq!(patient.name, "Jane Doe");
    let tests: Vec<(&str, f64)> = patient
        .tests
        .iter()
        .map(|(name, result)| (name, result.value))
        .collect();
    assert_eq!(
        tests,
        vec![("Glucose", 115.0), ("BUN", 25.0), ("Creatinine", 1.5)]
    );
    assert_eq!(patient.failing_test_count(), 0);
}

#[test]
fn patient_duplicate_test_keeps_first_position() {
    let patient = parse_patient(
        "Jane Doe\nGlucose\t90\nBUN\t12\nGlucose\t115\n",
        Path::new("patient.tsv"),
    )
    .unwrap();

    let tests: Vec<(&str, f64)> = patient
        .tests
        .iter()
        .map(|(name, result)| (name, result.value))
        .collect();
    assert_eq!(tests, vec![("Glucose", 115.0), ("BUN", 12.0)]);
}

#[test]
fn empty_patient_file_has_no_tests() {
    let patient = parse_patient("", Path::new("patient.tsv")).unwrap();
    assert_eq!(patient.name, "");
    assert!(patient.tests.is_empty());
}

#[test]
fn patient_name_only() {
    let patient = parse_patient("Jane Doe\r\n", Path::new("patient.tsv")).unwrap();
    assert_eq!(patient.name, "Jane Doe");
    assert!(patient.tests.is_empty());
}

#[test]
fn patient_bom_is_stripped() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "patient.tsv", "\u{feff}Jane Doe\nGlucose\t90\n");

    let patient = read_patient(&path).unwrap();
    assert_eq!(patient.name, "Jane Doe");
}

#[test]
fn malformed_patient_value_reports_file_line() {
    let err = parse_patient(
        "Jane Doe\nGlucose\t90\nBUN\thigh\n",
        Path::new("patient.tsv"),
    )
    .unwrap_err();

    match err {
        IngestError::MalformedField {
            line, field, value, ..
        } => {
            assert_eq!(line, 3);
            assert_eq!(field, "Value");
            assert_eq!(value, "high");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_value_after_blank_line_reports_file_line() {
    let err = parse_patient("Jane\nA\t1\n\nB\tx\n", Path::new("patient.tsv")).unwrap_err();

    assert!(
        matches!(err, IngestError::MalformedField { line: 4, field: "Value", .. }),
        "{err}"
    );
}

#[test]
fn malformed_rule_after_blank_line_reports_file_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "ranges.tsv",
        "1\tGlucose\t70\t110\n\n\n2\tBUN\t7\thigh\n",
    );

    let err = read_rules::<RangeRule>(&path).unwrap_err();
    assert!(
        matches!(err, IngestError::MalformedField { line: 4, field: "Max", .. }),
        "{err}"
    );
}
