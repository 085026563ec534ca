//! `materials_compositions.csv` — per-alloy composition catalog.

#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::{field, load_rows, normalize_key, parse_bool, parse_f64, reader_from_path, reader_from_str};
use super::CatalogError;

const FILE: &str = "materials_compositions.csv";

/// Grade family used to select a temperature-coefficient row (spec.md §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeFamily {
    Austenitic,
    Duplex,
    SuperAustenitic,
    Nickel,
    Ferritic,
    CarbonSteel,
    Nonferrous,
}

impl GradeFamily {
    fn parse(s: &str) -> Option<Self> {
        Some(match normalize_key(s).as_str() {
            "AUSTENITIC" => GradeFamily::Austenitic,
            "DUPLEX" => GradeFamily::Duplex,
            "SUPER_AUSTENITIC" | "SUPERAUSTENITIC" => GradeFamily::SuperAustenitic,
            "NICKEL" => GradeFamily::Nickel,
            "FERRITIC" => GradeFamily::Ferritic,
            "CARBON_STEEL" | "CARBONSTEEL" => GradeFamily::CarbonSteel,
            "NONFERROUS" => GradeFamily::Nonferrous,
            _ => return None,
        })
    }
}

/// A single alloy's composition and identity, as read from `materials_compositions.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Composition {
    pub common_name: String,
    pub uns: String,
    pub cr_wt_pct: f64,
    pub ni_wt_pct: f64,
    pub mo_wt_pct: f64,
    pub n_wt_pct: f64,
    pub fe_balance: bool,
    pub density_kg_m3: f64,
    pub grade: GradeFamily,
    /// Electrons transferred per dissolution event (spec.md §4.5: hardcoding
    /// this to 2 for every material was a documented bug).
    pub n_electrons: u8,
    pub source: String,
}

impl Composition {
    /// PREN = %Cr + 3.3·%Mo + 16·%N (spec.md §4.8).
    pub fn pren(&self) -> f64 {
        self.cr_wt_pct + 3.3 * self.mo_wt_pct + 16.0 * self.n_wt_pct
    }
}

/// The full composition catalog, keyed by a normalized common name.
#[derive(Debug, Clone)]
pub struct MaterialCompositions {
    by_key: HashMap<String, Composition>,
}

impl MaterialCompositions {
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::build(reader_from_path(path)?)
    }

    pub fn load_embedded(blob: &str) -> Result<Self, CatalogError> {
        Self::build(reader_from_str(FILE, blob))
    }

    fn build(reader: csv::Reader<impl std::io::Read>) -> Result<Self, CatalogError> {
        let rows = load_rows(FILE, reader, |rec| {
            let common_name = field(rec, 0, FILE).ok()?.to_string();
            let uns = field(rec, 1, FILE).ok()?.to_string();
            let cr = parse_f64(field(rec, 2, FILE).ok()?)?;
            let ni = parse_f64(field(rec, 3, FILE).ok()?)?;
            let mo = parse_f64(field(rec, 4, FILE).ok()?)?;
            let n = parse_f64(field(rec, 5, FILE).ok()?)?;
            let fe_balance = parse_bool(field(rec, 6, FILE).ok()?)?;
            let density_kg_m3 = parse_f64(field(rec, 7, FILE).ok()?)?;
            let grade = GradeFamily::parse(field(rec, 8, FILE).ok()?)?;
            let n_electrons: u8 = field(rec, 9, FILE).ok()?.trim().parse().ok()?;
            let source = field(rec, 10, FILE).ok()?.to_string();
            if source.is_empty() {
                return None;
            }
            Some(Composition {
                common_name,
                uns,
                cr_wt_pct: cr,
                ni_wt_pct: ni,
                mo_wt_pct: mo,
                n_wt_pct: n,
                fe_balance,
                density_kg_m3,
                grade,
                n_electrons,
                source,
            })
        })?;
        if rows.is_empty() {
            return Err(CatalogError::Empty { file: FILE });
        }
        let mut by_key = HashMap::with_capacity(rows.len());
        for row in rows {
            by_key.insert(normalize_key(&row.common_name), row.clone());
            by_key.entry(normalize_key(&row.uns)).or_insert(row);
        }
        Ok(Self { by_key })
    }

    pub fn get(&self, key: &str) -> Option<&Composition> {
        self.by_key.get(&normalize_key(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Composition> {
        self.by_key.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "common_name,UNS,Cr,Ni,Mo,N,Fe_bal,density_kg_m3,grade_type,n_electrons,source\n\
SS316,UNS S31600,17.0,11.0,2.5,0.05,true,8000,austenitic,2,ASM Handbook Vol 13A\n\
2205,UNS S32205,22.0,5.5,3.1,0.17,true,7800,duplex,2,ASTM A240\n\
HY80,UNS K31820,0.6,2.3,0.35,0.0,true,7850,carbon_steel,2,MIL-S-16216\n";

    #[test]
    fn loads_and_resolves_by_name_and_uns() {
        let cat = MaterialCompositions::load_embedded(SAMPLE).unwrap();
        assert!(cat.get("SS316").is_some());
        assert!(cat.get("ss_316").is_some());
        assert!(cat.get("UNS S31600").is_some());
    }

    #[test]
    fn pren_matches_2205_reference_value() {
        let cat = MaterialCompositions::load_embedded(SAMPLE).unwrap();
        let c2205 = cat.get("2205").unwrap();
        assert!((c2205.pren() - 35.0).abs() < 0.5, "PREN = {}", c2205.pren());
    }
}
