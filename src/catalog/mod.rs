//! Immutable, process-lifetime data catalogs (spec.md §3.1, §4.2).
//!
//! Each sub-catalog loads from one CSV file with a header row; the final
//! column is always a citation. A **structural** failure (missing file,
//! unreadable header, empty catalog) fails the whole load — there is no
//! fallback dictionary (spec.md §9: "shared mutable fallbacks" is a
//! documented anti-pattern in the source this crate replaces). A
//! **row-level** parse failure is logged via `tracing::warn!` and the row
//! is skipped.
//!
//! [`Catalogs::load`] is the single place CSV files are touched; everything
//! downstream borrows from the resulting immutable struct.

#![forbid(unsafe_code)]

pub mod chloride;
pub mod coefficients;
pub mod cpt;
pub mod galvanic_series;
pub mod loader;
pub mod materials;
pub mod orr_diffusion;

use std::collections::HashMap;
use std::path::Path;

pub use chloride::{ChlorideThresholdTable, TemperatureCoefficientTable};
pub use coefficients::{ReactionKind, ResponseSurfaceCoeffs};
pub use cpt::CptTable;
pub use galvanic_series::GalvanicSeriesTable;
pub use materials::{Composition, GradeFamily, MaterialCompositions};
pub use orr_diffusion::OrrDiffusionTable;

/// Failures that can occur while constructing a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file is missing, unreadable, or its header does not match the
    /// normative schema (spec.md §6.2).
    #[error("structural failure loading {file}: {reason}")]
    Structural { file: &'static str, reason: String },
    /// The file parsed, but produced zero valid rows.
    #[error("catalog {file} loaded with zero valid rows")]
    Empty { file: &'static str },
    /// A material/reaction pair had no corresponding coefficient file.
    #[error("no response-surface coefficients for {material}/{reaction:?}")]
    MissingCoefficients { material: String, reaction: ReactionKind },
}

const REACTION_SUFFIXES: [(&str, ReactionKind); 5] = [
    ("ORR", ReactionKind::Orr),
    ("HER", ReactionKind::Her),
    ("Oxidation", ReactionKind::Oxidation),
    ("Passivation", ReactionKind::Passivation),
    ("Pitting", ReactionKind::Pitting),
];

/// Parse `{material}{Reaction}Coeffs.csv` into `(material, reaction)`.
fn parse_coeffs_filename(stem: &str) -> Option<(String, ReactionKind)> {
    let body = stem.strip_suffix("Coeffs")?;
    for (suffix, kind) in REACTION_SUFFIXES {
        if let Some(material) = body.strip_suffix(suffix) {
            if !material.is_empty() {
                return Some((material.to_string(), kind));
            }
        }
    }
    None
}

/// The complete set of immutable catalogs the numerical core reads from.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub compositions: MaterialCompositions,
    pub cpt: CptTable,
    pub galvanic_series: GalvanicSeriesTable,
    pub chloride_thresholds: ChlorideThresholdTable,
    pub temperature_coefficients: TemperatureCoefficientTable,
    pub orr_diffusion: OrrDiffusionTable,
    response_surface: HashMap<(String, ReactionKind), ResponseSurfaceCoeffs>,
}

impl Catalogs {
    /// Load every catalog from CSV files in `dir`, following the normative
    /// filenames in spec.md §6.2. Per-(material, reaction) coefficient files
    /// are discovered by scanning `dir` for `*Coeffs.csv`.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let compositions = MaterialCompositions::load_from_path(&dir.join("materials_compositions.csv"))?;
        let cpt = CptTable::load_from_path(&dir.join("astm_g48_cpt_data.csv"))?;
        let galvanic_series = GalvanicSeriesTable::load_from_path(&dir.join("astm_g82_galvanic_series.csv"))?;
        let chloride_thresholds =
            ChlorideThresholdTable::load_from_path(&dir.join("iso18070_chloride_thresholds.csv"))?;
        let temperature_coefficients =
            TemperatureCoefficientTable::load_from_path(&dir.join("iso18070_temperature_coefficients.csv"))?;
        let orr_diffusion = OrrDiffusionTable::load_from_path(&dir.join("orr_diffusion_limits.csv"))?;

        let mut response_surface = HashMap::new();
        let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::Structural {
            file: "data directory",
            reason: e.to_string(),
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::Structural {
                file: "data directory",
                reason: e.to_string(),
            })?;
            let path = entry.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else { continue };
            let Some((material, reaction)) = parse_coeffs_filename(stem) else { continue };
            let coeffs = ResponseSurfaceCoeffs::load_from_path(&path)?;
            response_surface.insert((loader::normalize_key(&material), reaction), coeffs);
        }

        tracing::info!(
            materials = compositions.iter().count(),
            coefficient_blocks = response_surface.len(),
            "catalogs loaded"
        );

        Ok(Self {
            compositions,
            cpt,
            galvanic_series,
            chloride_thresholds,
            temperature_coefficients,
            orr_diffusion,
            response_surface,
        })
    }

    /// Construct the catalogs from the CSV blobs bundled with the crate
    /// (the NRL six-alloy dataset), for tests and as a zero-config default.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        let compositions =
            MaterialCompositions::load_embedded(include_str!("../../data/materials_compositions.csv"))?;
        let cpt = CptTable::load_embedded(include_str!("../../data/astm_g48_cpt_data.csv"))?;
        let galvanic_series =
            GalvanicSeriesTable::load_embedded(include_str!("../../data/astm_g82_galvanic_series.csv"))?;
        let chloride_thresholds = ChlorideThresholdTable::load_embedded(include_str!(
            "../../data/iso18070_chloride_thresholds.csv"
        ))?;
        let temperature_coefficients = TemperatureCoefficientTable::load_embedded(include_str!(
            "../../data/iso18070_temperature_coefficients.csv"
        ))?;
        let orr_diffusion =
            OrrDiffusionTable::load_embedded(include_str!("../../data/orr_diffusion_limits.csv"))?;

        macro_rules! coeffs {
            ($material:literal, $suffix:literal, $kind:expr) => {
                (
                    (loader::normalize_key($material), $kind),
                    ResponseSurfaceCoeffs::load_embedded(
                        concat!($material, $suffix, "Coeffs.csv"),
                        include_str!(concat!("../../data/", $material, $suffix, "Coeffs.csv")),
                    )?,
                )
            };
        }

        let response_surface = HashMap::from([
            coeffs!("HY80", "ORR", ReactionKind::Orr),
            coeffs!("HY80", "Oxidation", ReactionKind::Oxidation),
            coeffs!("HY100", "ORR", ReactionKind::Orr),
            coeffs!("HY100", "Oxidation", ReactionKind::Oxidation),
            coeffs!("SS316", "ORR", ReactionKind::Orr),
            coeffs!("SS316", "Passivation", ReactionKind::Passivation),
            coeffs!("SS316", "Pitting", ReactionKind::Pitting),
            coeffs!("Ti", "ORR", ReactionKind::Orr),
            coeffs!("Ti", "Passivation", ReactionKind::Passivation),
            coeffs!("I625", "ORR", ReactionKind::Orr),
            coeffs!("I625", "Passivation", ReactionKind::Passivation),
            coeffs!("CuNi", "ORR", ReactionKind::Orr),
            coeffs!("CuNi", "Oxidation", ReactionKind::Oxidation),
        ]);

        Ok(Self {
            compositions,
            cpt,
            galvanic_series,
            chloride_thresholds,
            temperature_coefficients,
            orr_diffusion,
            response_surface,
        })
    }

    /// Response-surface coefficients for a (material, reaction) pair, keyed
    /// by normalized material name.
    pub fn response_surface(&self, material_key: &str, reaction: ReactionKind) -> Option<&ResponseSurfaceCoeffs> {
        self.response_surface.get(&(loader::normalize_key(material_key), reaction))
    }

    /// Every reaction this catalog has response-surface coefficients for, on
    /// the given material.
    pub fn reactions_for(&self, material_key: &str) -> Vec<ReactionKind> {
        let key = loader::normalize_key(material_key);
        self.response_surface.keys().filter(|(m, _)| *m == key).map(|(_, r)| *r).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogs_load_deterministically() {
        let a = Catalogs::load_embedded().unwrap();
        let b = Catalogs::load_embedded().unwrap();
        assert_eq!(a.compositions.iter().count(), b.compositions.iter().count());
        assert_eq!(a.reactions_for("SS316").len(), b.reactions_for("SS316").len());
    }

    #[test]
    fn ss316_has_orr_passivation_and_pitting() {
        let cat = Catalogs::load_embedded().unwrap();
        let reactions = cat.reactions_for("ss316");
        assert!(reactions.contains(&ReactionKind::Orr));
        assert!(reactions.contains(&ReactionKind::Passivation));
        assert!(reactions.contains(&ReactionKind::Pitting));
    }

    #[test]
    fn parses_coeffs_filename() {
        assert_eq!(
            parse_coeffs_filename("SS316ORRCoeffs"),
            Some(("SS316".to_string(), ReactionKind::Orr))
        );
        assert_eq!(
            parse_coeffs_filename("HY80OxidationCoeffs"),
            Some(("HY80".to_string(), ReactionKind::Oxidation))
        );
        assert_eq!(parse_coeffs_filename("not_a_coeffs_file"), None);
    }
}
