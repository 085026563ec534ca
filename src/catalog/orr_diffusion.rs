//! `orr_diffusion_limits.csv` — tabulated diffusion-limited ORR current density.

#![forbid(unsafe_code)]

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::{field, load_rows, parse_f64, reader_from_path, reader_from_str};
use super::CatalogError;

const FILE: &str = "orr_diffusion_limits.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrrDiffusionRow {
    pub condition: String,
    pub temperature_c: f64,
    pub electrolyte: String,
    pub i_lim_a_m2: f64,
    pub i_lim_ma_cm2: f64,
    pub source: String,
    pub notes: String,
}

/// Table of tabulated ORR diffusion-limited current density points.
///
/// Lookup is by nearest tabulated temperature for a matching electrolyte;
/// spec.md §4.6 forbids a "% per °C" heuristic for *extrapolation* beyond
/// the table, but interpolation/nearest-match *within* it is an ordinary
/// table lookup.
#[derive(Debug, Clone)]
pub struct OrrDiffusionTable {
    rows: Vec<OrrDiffusionRow>,
}

impl OrrDiffusionTable {
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::build(reader_from_path(path)?)
    }

    pub fn load_embedded(blob: &str) -> Result<Self, CatalogError> {
        Self::build(reader_from_str(FILE, blob))
    }

    fn build(reader: csv::Reader<impl std::io::Read>) -> Result<Self, CatalogError> {
        let rows = load_rows(FILE, reader, |rec| {
            let condition = field(rec, 0, FILE).ok()?.to_string();
            let temperature_c = parse_f64(field(rec, 1, FILE).ok()?)?;
            let electrolyte = field(rec, 2, FILE).ok()?.to_string();
            let i_lim_a_m2 = parse_f64(field(rec, 3, FILE).ok()?)?;
            let i_lim_ma_cm2 = parse_f64(field(rec, 4, FILE).ok()?)?;
            let source = field(rec, 5, FILE).ok()?.to_string();
            let notes = field(rec, 6, FILE).ok().unwrap_or("").to_string();
            if source.is_empty() {
                return None;
            }
            Some(OrrDiffusionRow {
                condition,
                temperature_c,
                electrolyte,
                i_lim_a_m2,
                i_lim_ma_cm2,
                source,
                notes,
            })
        })?;
        if rows.is_empty() {
            return Err(CatalogError::Empty { file: FILE });
        }
        Ok(Self { rows })
    }

    /// Nearest tabulated point for the given electrolyte, by temperature.
    pub fn nearest(&self, electrolyte: &str, temperature_c: f64) -> Option<&OrrDiffusionRow> {
        self.rows
            .iter()
            .filter(|r| r.electrolyte.eq_ignore_ascii_case(electrolyte))
            .min_by(|a, b| {
                (a.temperature_c - temperature_c)
                    .abs()
                    .total_cmp(&(b.temperature_c - temperature_c).abs())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "condition,temperature_C,electrolyte,i_lim_A_m2,i_lim_mA_cm2,source,notes\n\
aerated,25.0,seawater,2.5,0.25,ASTM G82 supplement,8 mg/L DO\n\
aerated,5.0,seawater,1.2,0.12,ASTM G82 supplement,cold seawater\n";

    #[test]
    fn finds_nearest_temperature_point() {
        let table = OrrDiffusionTable::load_embedded(SAMPLE).unwrap();
        let row = table.nearest("seawater", 22.0).unwrap();
        assert!((row.temperature_c - 25.0).abs() < 1e-9);
    }
}
