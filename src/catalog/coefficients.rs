//! `{material}{reaction}Coeffs.csv` — per-(material, reaction) response-surface
//! coefficients, six floats in the normative order `p00, p10, p01, p20, p11,
//! p02` (spec.md §6.2), plus the pH-interpolation window for that reaction.

#![forbid(unsafe_code)]

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::{field, load_rows, parse_f64, reader_from_path, reader_from_str};
use super::CatalogError;

/// The reaction a coefficient block was fitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactionKind {
    /// Oxygen reduction reaction (cathodic).
    Orr,
    /// Hydrogen evolution reaction (cathodic).
    Her,
    /// Bare-metal oxidation (anodic).
    Oxidation,
    /// Passive-film-limited dissolution (anodic).
    Passivation,
    /// Pitting-initiation branch (anodic).
    Pitting,
}

impl ReactionKind {
    pub fn is_cathodic(self) -> bool {
        matches!(self, ReactionKind::Orr | ReactionKind::Her)
    }

    pub fn file_suffix(self) -> &'static str {
        match self {
            ReactionKind::Orr => "ORR",
            ReactionKind::Her => "HER",
            ReactionKind::Oxidation => "Oxidation",
            ReactionKind::Passivation => "Passivation",
            ReactionKind::Pitting => "Pitting",
        }
    }
}

/// Six-term quadratic response-surface coefficients (spec.md §3.1, §4.3) plus
/// the reaction's pH interpolation window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResponseSurfaceCoeffs {
    pub p00: f64,
    pub p10: f64,
    pub p01: f64,
    pub p20: f64,
    pub p11: f64,
    pub p02: f64,
    pub ph_min: f64,
    pub ph_max: f64,
}

impl ResponseSurfaceCoeffs {
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::build(
            path.file_name().and_then(|s| s.to_str()).unwrap_or("coeffs.csv"),
            reader_from_path(path)?,
        )
    }

    pub fn load_embedded(name: &'static str, blob: &str) -> Result<Self, CatalogError> {
        Self::build(name, reader_from_str(name, blob))
    }

    fn build(name: &str, reader: csv::Reader<impl std::io::Read>) -> Result<Self, CatalogError> {
        let name_static: &'static str = Box::leak(name.to_string().into_boxed_str());
        let rows = load_rows(name_static, reader, |rec| {
            let p00 = parse_f64(field(rec, 0, name_static).ok()?)?;
            let p10 = parse_f64(field(rec, 1, name_static).ok()?)?;
            let p01 = parse_f64(field(rec, 2, name_static).ok()?)?;
            let p20 = parse_f64(field(rec, 3, name_static).ok()?)?;
            let p11 = parse_f64(field(rec, 4, name_static).ok()?)?;
            let p02 = parse_f64(field(rec, 5, name_static).ok()?)?;
            let ph_min = parse_f64(field(rec, 6, name_static).ok()?)?;
            let ph_max = parse_f64(field(rec, 7, name_static).ok()?)?;
            Some(ResponseSurfaceCoeffs { p00, p10, p01, p20, p11, p02, ph_min, ph_max })
        })?;
        rows.into_iter().next().ok_or(CatalogError::Empty { file: name_static })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "p00,p10,p01,p20,p11,p02,pH_min,pH_max\n\
50000.0,120.5,15.2,0.0,0.0,0.0,6.0,9.0\n";

    #[test]
    fn loads_single_row_coefficient_block() {
        let coeffs = ResponseSurfaceCoeffs::load_embedded("SS316ORRCoeffs.csv", SAMPLE).unwrap();
        assert!((coeffs.p00 - 50000.0).abs() < 1e-9);
        assert!((coeffs.ph_max - 9.0).abs() < 1e-9);
    }
}
