//! Traffic row loading from CSV or TSV flow exports.
//!
//! The first line is the header. A line containing a tab is split on tabs,
//! otherwise on commas. Each row becomes one upper-cased text made of its
//! non-empty cells joined by single spaces, plus a malicious/benign flag
//! taken from the `Label` column.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use tracing::{info, warn};

use crate::engine::alphabet::{to_upper, trim};
use crate::error::LoadError;

/// Short-row warnings emitted before further ones are suppressed.
const WARN_LIMIT: usize = 20;

/// Label header names, in lookup order.
const LABEL_COLUMNS: [&[u8]; 2] = [b"Label", b"label"];

/// One scanned text and its ground-truth label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSample {
    pub text: Vec<u8>,
    pub malicious: bool,
}

#[derive(Debug, Default)]
pub struct Dataset {
    pub rows: Vec<RowSample>,
    /// Total length of all row texts kept.
    pub bytes_consumed: usize,
    /// Rows that produced no text.
    pub rows_skipped: usize,
}

/// Load rows from `path`, stopping before the cumulative text length would
/// exceed `text_bytes`. A budget of 0 means unlimited.
pub fn load_rows(path: &Path, text_bytes: usize) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::OpenData {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_rows(BufReader::new(file), text_bytes, path)?;
    info!(
        rows = dataset.rows.len(),
        skipped = dataset.rows_skipped,
        "Rows loaded"
    );
    info!(bytes = dataset.bytes_consumed, "Bytes budget used");
    if dataset.rows.is_empty() {
        return Err(LoadError::NoRows(path.to_path_buf()));
    }
    Ok(dataset)
}

/// Read rows from any buffered source; `source` names it in errors.
pub fn read_rows<R: BufRead>(
    reader: R,
    text_bytes: usize,
    source: &Path,
) -> Result<Dataset, LoadError> {
    let read_err = |err| LoadError::Read {
        path: source.to_path_buf(),
        source: err,
    };
    let mut lines = reader.split(b'\n');

    let header = match lines.next() {
        Some(line) => line.map_err(read_err)?,
        None => return Err(LoadError::EmptyData(source.to_path_buf())),
    };
    let header_cols = split_row(&header);
    let label_idx = find_label_column(&header_cols);

    let mut dataset = Dataset::default();
    let mut warning_count = 0usize;
    let mut total_rows = 0usize;

    for line in lines {
        let line = line.map_err(read_err)?;
        if trim(&line).is_empty() {
            continue;
        }
        total_rows += 1;

        let mut cols = split_row(&line);
        if cols.len() < header_cols.len() {
            if warning_count < WARN_LIMIT {
                warn!(
                    row = total_rows,
                    "Row has fewer columns than header; padding missing values"
                );
                if warning_count + 1 == WARN_LIMIT {
                    warn!("Further short-row warnings will be suppressed");
                }
            }
            warning_count += 1;
            cols.resize(header_cols.len(), &[]);
        }

        let text = build_row_text(&cols);
        if text.is_empty() {
            dataset.rows_skipped += 1;
            continue;
        }

        let prospective = dataset.bytes_consumed + text.len();
        if text_bytes > 0 && prospective > text_bytes {
            break;
        }
        dataset.bytes_consumed = prospective;

        let malicious = label_idx
            .and_then(|idx| cols.get(idx))
            .is_some_and(|label| label_is_malicious(label));
        dataset.rows.push(RowSample { text, malicious });
    }
    Ok(dataset)
}

/// Index of the label column. `Label` takes precedence over `label`; among
/// duplicates of one name the last wins.
fn find_label_column(header_cols: &[&[u8]]) -> Option<usize> {
    LABEL_COLUMNS
        .iter()
        .find_map(|name| header_cols.iter().rposition(|col| col == name))
}

/// Split one line into trimmed cells. A trailing delimiter does not add an
/// empty final cell; a trailing carriage return after it does.
pub fn split_row(line: &[u8]) -> Vec<&[u8]> {
    let delim = if line.contains(&b'\t') { b'\t' } else { b',' };
    let mut cols: Vec<&[u8]> = line.split(|&b| b == delim).map(trim).collect();
    if line.ends_with(&[delim]) || line.is_empty() {
        cols.pop();
    }
    cols
}

/// Upper-case the non-empty cells and join them with single spaces.
pub fn build_row_text(cols: &[&[u8]]) -> Vec<u8> {
    cols.iter()
        .filter(|col| !col.is_empty())
        .map(|col| to_upper(col))
        .collect_vec()
        .join(&b' ')
}

/// Anything labelled other than `BENIGN` is malicious; an empty label is not.
pub fn label_is_malicious(label: &[u8]) -> bool {
    !label.is_empty() && !label.eq_ignore_ascii_case(b"BENIGN")
}
