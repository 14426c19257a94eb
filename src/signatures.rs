//! Signature (pattern) file loading.
//!
//! One pattern per line. Lines are trimmed, blank lines skipped, and the
//! remaining patterns upper-cased to match the case-folded row text. Bytes
//! outside ASCII are kept as they are.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::engine::alphabet::{to_upper, trim};
use crate::error::LoadError;

/// Load at most `limit` patterns from `path`.
pub fn load_patterns(path: &Path, limit: Option<usize>) -> Result<Vec<Vec<u8>>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::OpenPatterns {
        path: path.to_path_buf(),
        source,
    })?;
    let patterns = read_patterns(BufReader::new(file), limit).map_err(|source| {
        LoadError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    if patterns.is_empty() {
        return Err(LoadError::NoPatterns(path.to_path_buf()));
    }
    Ok(patterns)
}

/// Read patterns from any buffered source.
pub fn read_patterns<R: BufRead>(reader: R, limit: Option<usize>) -> std::io::Result<Vec<Vec<u8>>> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut patterns = Vec::new();
    if limit == 0 {
        return Ok(patterns);
    }
    for line in reader.split(b'\n') {
        let line = line?;
        let cleaned = trim(&line);
        if cleaned.is_empty() {
            continue;
        }
        patterns.push(to_upper(cleaned));
        if patterns.len() >= limit {
            break;
        }
    }
    Ok(patterns)
}
