//! Shared tab-separated reading helpers.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::{IngestError, Result};

/// UTF-8 byte order mark, tolerated at the start of a file.
const UTF8_BOM: char = '\u{feff}';

/// A deserialized row together with its 1-based line number in the file.
pub(crate) struct Located<T> {
    pub line: u64,
    pub row: T,
}

pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| IngestError::from_io(path, e))?;
    Ok(content
        .strip_prefix(UTF8_BOM)
        .map(str::to_string)
        .unwrap_or(content))
}

/// Read headerless tab-separated rows positionally into `T`.
///
/// `line_offset` is added to reported line numbers when `content` does not
/// start at the top of the file.
pub(crate) fn read_rows<T: DeserializeOwned>(
    content: &str,
    path: &Path,
    line_offset: u64,
) -> Result<Vec<Located<T>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::TsvParse {
            path: path.to_path_buf(),
            line: e.position().map_or(0, |p| line_at(content, p)) + line_offset,
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| line_at(content, p)) + line_offset;
        let row = record
            .deserialize::<T>(None)
            .map_err(|e| IngestError::TsvParse {
                path: path.to_path_buf(),
                line,
                message: e.to_string(),
            })?;
        rows.push(Located { line, row });
    }
    Ok(rows)
}

/// 1-based line of a reader position.
///
/// `csv::Position::line` does not count skipped blank lines, and a record's
/// byte offset points just past the previous terminator, before any blank
/// lines. Skip those terminators, then count newlines up to the record start.
fn line_at(content: &str, position: &csv::Position) -> u64 {
    let bytes = content.as_bytes();
    let mut start = usize::try_from(position.byte()).map_or(bytes.len(), |b| b.min(bytes.len()));
    while start < bytes.len() && matches!(bytes[start], b'\n' | b'\r') {
        start += 1;
    }
    bytes[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

/// Parse a numeric field, trimming surrounding whitespace first.
pub(crate) fn parse_field<T: FromStr>(
    raw: &str,
    field: &'static str,
    path: &Path,
    line: u64,
) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| IngestError::MalformedField {
            path: path.to_path_buf(),
            line,
            field,
            value: raw.to_string(),
        })
}
