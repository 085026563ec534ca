//! `astm_g48_cpt_data.csv` — critical pitting / crevice temperature table.

#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::{field, load_rows, normalize_key, parse_f64, reader_from_path, reader_from_str};
use super::CatalogError;

const FILE: &str = "astm_g48_cpt_data.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CptRow {
    pub material: String,
    pub uns: String,
    pub cpt_c: f64,
    pub cct_c: f64,
    pub test_solution: String,
    pub source: String,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct CptTable {
    by_key: HashMap<String, CptRow>,
}

impl CptTable {
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::build(reader_from_path(path)?)
    }

    pub fn load_embedded(blob: &str) -> Result<Self, CatalogError> {
        Self::build(reader_from_str(FILE, blob))
    }

    fn build(reader: csv::Reader<impl std::io::Read>) -> Result<Self, CatalogError> {
        let rows = load_rows(FILE, reader, |rec| {
            let material = field(rec, 0, FILE).ok()?.to_string();
            let uns = field(rec, 1, FILE).ok()?.to_string();
            let cpt_c = parse_f64(field(rec, 2, FILE).ok()?)?;
            let cct_c = parse_f64(field(rec, 3, FILE).ok()?)?;
            let test_solution = field(rec, 4, FILE).ok()?.to_string();
            let source = field(rec, 5, FILE).ok()?.to_string();
            let notes = field(rec, 6, FILE).ok().unwrap_or("").to_string();
            if source.is_empty() {
                return None;
            }
            Some(CptRow { material, uns, cpt_c, cct_c, test_solution, source, notes })
        })?;
        if rows.is_empty() {
            return Err(CatalogError::Empty { file: FILE });
        }
        let mut by_key = HashMap::with_capacity(rows.len());
        for row in rows {
            by_key.insert(normalize_key(&row.material), row.clone());
            by_key.entry(normalize_key(&row.uns)).or_insert(row);
        }
        Ok(Self { by_key })
    }

    pub fn get(&self, key: &str) -> Option<&CptRow> {
        self.by_key.get(&normalize_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "material,UNS,CPT_C,CCT_C,test_solution,source,notes\n\
SS316,UNS S31600,10.0,2.5,ASTM G48 Method A,ASTM G48,ferric chloride\n";

    #[test]
    fn loads_cpt_row() {
        let table = CptTable::load_embedded(SAMPLE).unwrap();
        let row = table.get("316l").or_else(|| table.get("SS316")).unwrap();
        assert!((row.cpt_c - 10.0).abs() < 1e-9);
    }
}
