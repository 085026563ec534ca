//! `iso18070_chloride_thresholds.csv` and `iso18070_temperature_coefficients.csv`.

#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::{field, load_rows, normalize_key, parse_f64, reader_from_path, reader_from_str};
use super::materials::GradeFamily;
use super::CatalogError;

const THRESHOLDS_FILE: &str = "iso18070_chloride_thresholds.csv";
const COEFFS_FILE: &str = "iso18070_temperature_coefficients.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChlorideThresholdRow {
    pub material: String,
    pub uns: String,
    pub threshold_25c_mg_l: f64,
    pub reference_ph: f64,
    pub reference_temperature_c: f64,
    pub source: String,
    pub notes: String,
    pub resistance_category: String,
}

#[derive(Debug, Clone)]
pub struct ChlorideThresholdTable {
    by_key: HashMap<String, ChlorideThresholdRow>,
}

impl ChlorideThresholdTable {
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::build(reader_from_path(path)?)
    }

    pub fn load_embedded(blob: &str) -> Result<Self, CatalogError> {
        Self::build(reader_from_str(THRESHOLDS_FILE, blob))
    }

    fn build(reader: csv::Reader<impl std::io::Read>) -> Result<Self, CatalogError> {
        let rows = load_rows(THRESHOLDS_FILE, reader, |rec| {
            let material = field(rec, 0, THRESHOLDS_FILE).ok()?.to_string();
            let uns = field(rec, 1, THRESHOLDS_FILE).ok()?.to_string();
            let threshold_25c_mg_l = parse_f64(field(rec, 2, THRESHOLDS_FILE).ok()?)?;
            let reference_ph = parse_f64(field(rec, 3, THRESHOLDS_FILE).ok()?)?;
            let reference_temperature_c = parse_f64(field(rec, 4, THRESHOLDS_FILE).ok()?)?;
            let source = field(rec, 5, THRESHOLDS_FILE).ok()?.to_string();
            let notes = field(rec, 6, THRESHOLDS_FILE).ok().unwrap_or("").to_string();
            let resistance_category = field(rec, 7, THRESHOLDS_FILE).ok().unwrap_or("").to_string();
            if source.is_empty() {
                return None;
            }
            Some(ChlorideThresholdRow {
                material,
                uns,
                threshold_25c_mg_l,
                reference_ph,
                reference_temperature_c,
                source,
                notes,
                resistance_category,
            })
        })?;
        if rows.is_empty() {
            return Err(CatalogError::Empty { file: THRESHOLDS_FILE });
        }
        let mut by_key = HashMap::with_capacity(rows.len());
        for row in rows {
            by_key.insert(normalize_key(&row.material), row.clone());
            by_key.entry(normalize_key(&row.uns)).or_insert(row);
        }
        Ok(Self { by_key })
    }

    pub fn get(&self, key: &str) -> Option<&ChlorideThresholdRow> {
        self.by_key.get(&normalize_key(key))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureCoefficientRow {
    pub grade: GradeFamily,
    /// Exponential decay constant `k`, 1/°C, in `Cl_thr(T) = Cl_thr(25)·exp(-k·(T-25))`.
    pub k_per_c: f64,
    pub source: String,
    pub notes: String,
    pub formula: String,
}

#[derive(Debug, Clone)]
pub struct TemperatureCoefficientTable {
    by_grade: HashMap<GradeFamily, TemperatureCoefficientRow>,
}

impl TemperatureCoefficientTable {
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::build(reader_from_path(path)?)
    }

    pub fn load_embedded(blob: &str) -> Result<Self, CatalogError> {
        Self::build(reader_from_str(COEFFS_FILE, blob))
    }

    fn build(reader: csv::Reader<impl std::io::Read>) -> Result<Self, CatalogError> {
        let rows = load_rows(COEFFS_FILE, reader, |rec| {
            let grade_str = field(rec, 0, COEFFS_FILE).ok()?;
            let grade = parse_grade(grade_str)?;
            let k_per_c = parse_f64(field(rec, 1, COEFFS_FILE).ok()?)?;
            let source = field(rec, 2, COEFFS_FILE).ok()?.to_string();
            let notes = field(rec, 3, COEFFS_FILE).ok().unwrap_or("").to_string();
            let formula = field(rec, 4, COEFFS_FILE).ok().unwrap_or("").to_string();
            if source.is_empty() {
                return None;
            }
            Some(TemperatureCoefficientRow { grade, k_per_c, source, notes, formula })
        })?;
        if rows.is_empty() {
            return Err(CatalogError::Empty { file: COEFFS_FILE });
        }
        let mut by_grade = HashMap::with_capacity(rows.len());
        for row in rows {
            by_grade.insert(row.grade, row);
        }
        Ok(Self { by_grade })
    }

    pub fn get(&self, grade: GradeFamily) -> Option<&TemperatureCoefficientRow> {
        self.by_grade.get(&grade)
    }
}

fn parse_grade(s: &str) -> Option<GradeFamily> {
    match normalize_key(s).as_str() {
        "AUSTENITIC" => Some(GradeFamily::Austenitic),
        "DUPLEX" => Some(GradeFamily::Duplex),
        "SUPER_AUSTENITIC" | "SUPERAUSTENITIC" => Some(GradeFamily::SuperAustenitic),
        "NICKEL" => Some(GradeFamily::Nickel),
        "FERRITIC" => Some(GradeFamily::Ferritic),
        "CARBON_STEEL" | "CARBONSTEEL" => Some(GradeFamily::CarbonSteel),
        "NONFERROUS" => Some(GradeFamily::Nonferrous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESH_SAMPLE: &str = "material,UNS,threshold_25C_mg_L,pH,temperature_C,source,notes,resistance_category\n\
SS316,UNS S31600,1000.0,7.0,25.0,ISO 18070,baseline,moderate\n";

    const COEF_SAMPLE: &str = "grade_type,temp_coefficient_per_C,source,notes,formula\n\
austenitic,0.03,ISO 18070,standard decay,exp(-k*(T-25))\n";

    #[test]
    fn threshold_decays_with_temperature() {
        let thresh = ChlorideThresholdTable::load_embedded(THRESH_SAMPLE).unwrap();
        let coef = TemperatureCoefficientTable::load_embedded(COEF_SAMPLE).unwrap();
        let row = thresh.get("SS316").unwrap();
        let k = coef.get(GradeFamily::Austenitic).unwrap().k_per_c;
        let at_60 = row.threshold_25c_mg_l * (-k * (60.0 - 25.0)).exp();
        assert!(at_60 < row.threshold_25c_mg_l);
    }
}
