//! Rule file loading.

use std::path::Path;

use labcheck_rules::{Comparator, InteractionRule, RangeRule, Rule, RuleCatalog};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, info_span};

use crate::error::{IngestError, Result};
use crate::tsv::{parse_field, read_rows, read_to_string};

/// A rule kind that can be built from one headerless tab-separated row.
pub trait TsvRule: Rule + Sized {
    /// Raw row shape, deserialized positionally.
    type Row: DeserializeOwned;

    fn from_row(row: Self::Row, path: &Path, line: u64) -> Result<Self>;
}

#[derive(Debug, Deserialize)]
pub struct RangeRow {
    id: String,
    test: String,
    min: String,
    max: String,
}

impl TsvRule for RangeRule {
    type Row = RangeRow;

    fn from_row(row: RangeRow, path: &Path, line: u64) -> Result<Self> {
        Ok(RangeRule {
            id: parse_field(&row.id, "Id", path, line)?,
            test: row.test,
            min: parse_field(&row.min, "Min", path, line)?,
            max: parse_field(&row.max, "Max", path, line)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct InteractionRow {
    id: String,
    test1: String,
    comparison1: String,
    value1: String,
    test2: String,
    comparison2: String,
    value2: String,
}

impl TsvRule for InteractionRule {
    type Row = InteractionRow;

    fn from_row(row: InteractionRow, path: &Path, line: u64) -> Result<Self> {
        Ok(InteractionRule {
            id: parse_field(&row.id, "Id", path, line)?,
            test1: row.test1,
            cmp1: parse_comparator(&row.comparison1, path, line)?,
            val1: parse_field(&row.value1, "Value1", path, line)?,
            test2: row.test2,
            cmp2: parse_comparator(&row.comparison2, path, line)?,
            val2: parse_field(&row.value2, "Value2", path, line)?,
        })
    }
}

fn parse_comparator(raw: &str, path: &Path, line: u64) -> Result<Comparator> {
    raw.parse().map_err(|source| IngestError::Rule {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Read every rule in a file, in file order.
///
/// # Errors
///
/// Fails on the first unreadable file, short row, malformed numeric field or
/// unknown comparator. No partial result is returned.
pub fn read_rules<R: TsvRule>(path: &Path) -> Result<Vec<R>> {
    let content = read_to_string(path)?;
    let rows = read_rows::<R::Row>(&content, path, 0)?;
    let mut rules = Vec::with_capacity(rows.len());
    for located in rows {
        rules.push(R::from_row(located.row, path, located.line)?);
    }
    debug!(path = %path.display(), rules = rules.len(), "read rule file");
    Ok(rules)
}

/// Append the rules in `path` to `catalog`, after any rules it already holds.
///
/// Returns the number of rules added. On error the catalog is unchanged.
pub fn load_catalog<R: TsvRule>(catalog: &mut RuleCatalog<R>, path: &Path) -> Result<usize> {
    let span = info_span!("load_rules", catalog = catalog.name(), path = %path.display());
    let _guard = span.enter();
    let rules = read_rules::<R>(path)?;
    let added = rules.len();
    catalog.extend(rules);
    info!(added, total = catalog.len(), "rules loaded");
    Ok(added)
}
