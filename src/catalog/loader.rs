//! Generic CSV-to-catalog loading contract.
//!
//! Mirrors the teacher's `srs_setup.rs` split between "this must exist or
//! the process refuses to start" (structural failure) and "this individual
//! row is malformed" (logged and skipped). There is intentionally no
//! fallback path: spec.md §9 documents hard-coded fallback dictionaries as
//! a source of silently-wrong answers, so a catalog either loads fully from
//! its CSV or the load fails.

#![forbid(unsafe_code)]

use std::path::Path;

use super::CatalogError;

/// Read a CSV file (by path) or an embedded blob (by string) and hand each
/// record to `parse_row`. A row that fails to parse is logged via
/// `tracing::warn!` and skipped; a structural failure (missing file,
/// unreadable header) is propagated as `CatalogError`.
pub fn load_rows<T>(
    source_name: &'static str,
    reader: csv::Reader<impl std::io::Read>,
    mut parse_row: impl FnMut(&csv::StringRecord) -> Option<T>,
) -> Result<Vec<T>, CatalogError> {
    let mut reader = reader;
    let mut out = Vec::new();
    for (line_no, record) in reader.records().enumerate() {
        let record = record.map_err(|e| CatalogError::Structural {
            file: source_name,
            reason: format!("unreadable record at line {}: {e}", line_no + 2),
        })?;
        match parse_row(&record) {
            Some(row) => out.push(row),
            None => {
                tracing::warn!(
                    file = source_name,
                    line = line_no + 2,
                    "skipping malformed row"
                );
            }
        }
    }
    Ok(out)
}

/// Open a catalog CSV from disk, with headers.
pub fn reader_from_path(path: &Path) -> Result<csv::Reader<std::fs::File>, CatalogError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .flexible(false)
        .from_path(path)
        .map_err(|e| CatalogError::Structural {
            file: Box::leak(path.display().to_string().into_boxed_str()),
            reason: e.to_string(),
        })
}

/// Open a catalog CSV from an embedded string blob (used for defaults shipped
/// with the crate and by tests).
pub fn reader_from_str(source_name: &'static str, blob: &str) -> csv::Reader<&[u8]> {
    let _ = source_name;
    csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .flexible(false)
        .from_reader(blob.as_bytes())
}

/// Parse a field by name-position with a clear panic-free error on failure.
pub fn field<'a>(record: &'a csv::StringRecord, idx: usize, file: &'static str) -> Result<&'a str, CatalogError> {
    record.get(idx).ok_or(CatalogError::Structural {
        file,
        reason: format!("missing column at index {idx}"),
    })
}

pub fn parse_f64(s: &str) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Case- and separator-insensitive key normalization for catalog lookups
/// (spec.md §3.1: `"Carbon Steel" == "carbon_steel"`).
pub fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '-' | '_' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_is_case_and_separator_insensitive() {
        assert_eq!(normalize_key("Carbon Steel"), normalize_key("carbon_steel"));
        assert_eq!(normalize_key("316L"), normalize_key("316l"));
    }
}
