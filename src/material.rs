//! Material identity resolution and reaction-set construction (spec.md §9:
//! "Material id aliasing").
//!
//! This module is the seam between the static catalogs
//! ([`crate::catalog::Catalogs`]) and the kinetics layer
//! ([`crate::kinetics`]): it resolves a caller-supplied material id through
//! an alias table, then builds a [`Material`] carrying one
//! [`ReactionSpec`] per reaction the catalogs have response-surface
//! coefficients for, with Butler–Volmer parameters derived from each
//! reaction's activation energy.

#![forbid(unsafe_code)]

use crate::catalog::{Catalogs, Composition, ReactionKind};
use crate::kinetics::{AnodicReaction, CathodicReaction};
use crate::mass_transfer::{self, Geometry, MassTransferError};
use crate::redox::{self, RedoxError};
use crate::response_surface::{delta_g, ResponseSurfaceError};
use crate::units::{Potential, Reference, Temperature, R};

/// The six alloys this crate's bundled catalogs cover (spec.md §3, NRL
/// six-alloy dataset).
pub const CANONICAL_MATERIAL_IDS: [&str; 6] = ["HY80", "HY100", "SS316", "Ti", "I625", "CuNi"];

/// A Butler–Volmer prefactor (A/cm²) combined with the response-surface
/// ΔG to produce an exchange current density via `i0 = A·exp(-ΔG/RT)`.
/// One shared prefactor across reactions is a simplification documented
/// here rather than buried in a magic number at the call site.
const I0_PREFACTOR_A_CM2: f64 = 1.0;

/// Standard transfer coefficients used when a reaction-specific value is
/// not separately tabulated. 0.5 is the ordinary default for an outer-sphere
/// one-electron-like step; materials with measured values would override it.
const DEFAULT_ALPHA: f64 = 0.5;
const DEFAULT_BETA: f64 = 0.5;

/// O₂ + 2H₂O + 4e⁻ → 4OH⁻ reversible potential vs SHE at pH 0, 25 °C.
const E0_ORR_SHE: f64 = 1.229;
/// 2H⁺ + 2e⁻ → H₂ reversible potential vs SHE at pH 0 (exactly 0 by definition).
const E0_HER_SHE: f64 = 0.0;

/// Resolve a caller-supplied material id (brand name, UNS number, or
/// informal spelling) to one of the [`CANONICAL_MATERIAL_IDS`].
pub fn resolve_material_id(raw: &str) -> Option<&'static str> {
    let key = raw.trim().to_ascii_uppercase().replace(['-', ' ', '_'], "");
    Some(match key.as_str() {
        "HY80" => "HY80",
        "HY100" => "HY100",
        "316" | "316L" | "SS316" | "SS316L" | "UNSS31600" | "UNSS31603" => "SS316",
        "TI" | "TITANIUM" | "TIGRADE2" | "GRADE2" | "UNSR50400" => "Ti",
        "625" | "I625" | "INCONEL625" | "UNSN06625" => "I625",
        "CUNI" | "9010CUNI" | "CUNI9010" | "UNSC70600" => "CuNi",
        _ => return None,
    })
}

/// Resolve `raw_id` to a composition, accepting any alloy the composition
/// catalog knows about rather than only the six NRL canonical alloys
/// (spec.md §4.5: "Unknown materials are accepted for Tier-1 pitting (if
/// composition is in the catalog)"). Canonical ids still resolve through
/// [`resolve_material_id`] first so the returned id matches what
/// [`build_material`]/galvanic use; anything else falls back to a direct,
/// case/separator-insensitive catalog lookup with no kinetics attached.
pub fn lookup_composition<'a>(catalogs: &'a Catalogs, raw_id: &str) -> Option<(String, &'a Composition)> {
    if let Some(id) = resolve_material_id(raw_id) {
        return catalogs.compositions.get(id).map(|c| (id.to_string(), c));
    }
    catalogs.compositions.get(raw_id).map(|c| (c.common_name.clone(), c))
}

/// Flow conditions supplied for an operation's environment, used to derive a
/// mass-transfer-limited ORR current density rather than reading a single
/// static catalog row (spec.md §4.4, §4.7).
#[derive(Debug, Clone, Copy)]
pub struct FlowConditions {
    pub geometry: Geometry,
    pub velocity_m_s: f64,
}

/// A reaction attached to a material, already wired with kinetic parameters
/// from the response-surface evaluation at a given state point.
#[derive(Debug, Clone, Copy)]
pub enum ReactionSpec {
    Cathodic { kind: ReactionKind, reaction: CathodicReaction },
    Anodic { kind: ReactionKind, reaction: AnodicReaction },
}

impl ReactionSpec {
    pub fn kind(&self) -> ReactionKind {
        match self {
            ReactionSpec::Cathodic { kind, .. } => *kind,
            ReactionSpec::Anodic { kind, .. } => *kind,
        }
    }
}

/// A resolved material: its composition plus every reaction the catalogs
/// support at the requested state point.
#[derive(Debug, Clone)]
pub struct Material {
    pub id: &'static str,
    pub composition: Composition,
    pub reactions: Vec<ReactionSpec>,
}

impl Material {
    pub fn cathodic(&self, kind: ReactionKind) -> Option<&CathodicReaction> {
        self.reactions.iter().find_map(|r| match r {
            ReactionSpec::Cathodic { kind: k, reaction } if *k == kind => Some(reaction),
            _ => None,
        })
    }

    pub fn anodic(&self, kind: ReactionKind) -> Option<&AnodicReaction> {
        self.reactions.iter().find_map(|r| match r {
            ReactionSpec::Anodic { kind: k, reaction } if *k == kind => Some(reaction),
            _ => None,
        })
    }
}

/// Failures building a [`Material`] at a given state point.
#[derive(Debug, thiserror::Error)]
pub enum MaterialError {
    #[error("unknown material id '{0}'")]
    UnknownMaterial(String),
    #[error("material '{0}' has no composition entry in the catalog")]
    MissingComposition(String),
    #[error(transparent)]
    ResponseSurface(#[from] ResponseSurfaceError),
    #[error(transparent)]
    Redox(#[from] RedoxError),
    #[error(transparent)]
    MassTransfer(#[from] MassTransferError),
}

/// The dissolved-oxygen concentration (mg/L) the bundled ORR diffusion-limit
/// catalog was measured at (see `data/orr_diffusion_limits.csv`'s header
/// comment). Tabulated `i_lim` scales linearly with bulk DO at fixed flow
/// when no explicit flow geometry is supplied (Fick's law at constant mass-
/// transfer coefficient).
const ORR_CATALOG_REFERENCE_DO_MG_L: f64 = 8.0;

/// Build every reaction a material has response-surface coefficients for,
/// evaluated at `(cl_molar, t, ph)`.
///
/// Reversible potentials: HER uses a fixed pH-corrected thermodynamic value
/// (Nernstian 59 mV/pH shift at 25 °C, scaled by `RT/F` at other
/// temperatures). ORR's reversible potential and limiting current both
/// depend on dissolved oxygen (spec.md §4.4): when `do_mg_l` is supplied,
/// `E_N` is solved via [`crate::redox::dissolved_oxygen_to_eh`] instead of
/// the fixed thermodynamic value, and `i_lim` is either mass-transfer-
/// derived (when `flow` is also supplied) or scaled off the tabulated
/// reference row by the DO ratio. Anodic reactions use the material's
/// free-corrosion potential from the galvanic-series table as a stand-in for
/// a true standard potential — adequate for Tafel evaluation near the
/// operating point, not a thermodynamic half-cell value.
pub fn build_material(
    catalogs: &Catalogs,
    raw_id: &str,
    cl_molar: f64,
    t: Temperature,
    ph: f64,
    do_mg_l: Option<f64>,
    flow: Option<FlowConditions>,
) -> Result<Material, MaterialError> {
    let id = resolve_material_id(raw_id).ok_or_else(|| MaterialError::UnknownMaterial(raw_id.to_string()))?;
    let composition = catalogs.compositions.get(id).ok_or_else(|| MaterialError::MissingComposition(id.to_string()))?.clone();

    let nernst_shift = (std::f64::consts::LN_10 * R * t.as_kelvin() / crate::units::F) * ph;
    let e_rev_anodic = catalogs
        .galvanic_series
        .get(id)
        .map(|row| row.e_corr_she())
        .unwrap_or(Potential::new(-0.4, Reference::She));

    let mut reactions = Vec::new();
    for kind in catalogs.reactions_for(id) {
        let coeffs = match catalogs.response_surface(id, kind) {
            Some(c) => c,
            None => continue,
        };
        let g = delta_g(id, kind, coeffs, cl_molar, t, ph)?;

        match kind {
            ReactionKind::Orr => {
                let i0 = I0_PREFACTOR_A_CM2 * (-g / (R * t.as_kelvin())).exp();

                let e_rev = match do_mg_l {
                    Some(do_val) => redox::dissolved_oxygen_to_eh(do_val, ph, t)?,
                    None => Potential::she(E0_ORR_SHE - nernst_shift),
                };

                let tabulated_i_lim =
                    catalogs.orr_diffusion.nearest("seawater", t.as_celsius()).map(|row| row.i_lim_ma_cm2 / 1000.0);
                let i_lim = match (flow, do_mg_l) {
                    (Some(fc), Some(do_val)) => {
                        Some(mass_transfer::limiting_current_density_a_cm2(fc.geometry, fc.velocity_m_s, t, do_val)?)
                    }
                    (None, Some(do_val)) => {
                        tabulated_i_lim.map(|i_ref| i_ref * (do_val / ORR_CATALOG_REFERENCE_DO_MG_L).max(0.0))
                    }
                    (_, None) => tabulated_i_lim,
                };

                reactions.push(ReactionSpec::Cathodic {
                    kind,
                    reaction: CathodicReaction { e_rev, i0_a_cm2: i0, alpha: DEFAULT_ALPHA, z: 4, i_lim_a_cm2: i_lim },
                });
            }
            ReactionKind::Her => {
                let i0 = I0_PREFACTOR_A_CM2 * (-g / (R * t.as_kelvin())).exp();
                reactions.push(ReactionSpec::Cathodic {
                    kind,
                    reaction: CathodicReaction {
                        e_rev: Potential::she(E0_HER_SHE - nernst_shift),
                        i0_a_cm2: i0,
                        alpha: DEFAULT_ALPHA,
                        z: 2,
                        i_lim_a_cm2: None,
                    },
                });
            }
            ReactionKind::Oxidation => {
                let i0 = I0_PREFACTOR_A_CM2 * (-g / (R * t.as_kelvin())).exp();
                reactions.push(ReactionSpec::Anodic {
                    kind,
                    reaction: AnodicReaction {
                        e_rev: e_rev_anodic,
                        i0_a_cm2: i0,
                        beta: DEFAULT_BETA,
                        z: composition.n_electrons,
                        film_resistance_ohm_cm2: None,
                    },
                });
            }
            ReactionKind::Passivation => {
                let i0 = I0_PREFACTOR_A_CM2 * (-g / (R * t.as_kelvin())).exp();
                // Higher PREN alloys grow a more resistive film; this scaling
                // is an engineering stand-in, not a measured film resistance.
                let film_resistance = 200.0 * composition.pren().max(1.0);
                reactions.push(ReactionSpec::Anodic {
                    kind,
                    reaction: AnodicReaction {
                        e_rev: e_rev_anodic,
                        i0_a_cm2: i0,
                        beta: DEFAULT_BETA,
                        z: composition.n_electrons,
                        film_resistance_ohm_cm2: Some(film_resistance),
                    },
                });
            }
            ReactionKind::Pitting => {
                let i0 = I0_PREFACTOR_A_CM2 * (-g / (R * t.as_kelvin())).exp();
                reactions.push(ReactionSpec::Anodic {
                    kind,
                    reaction: AnodicReaction {
                        e_rev: e_rev_anodic,
                        i0_a_cm2: i0,
                        beta: DEFAULT_BETA,
                        z: composition.n_electrons,
                        film_resistance_ohm_cm2: None,
                    },
                });
            }
        }
    }

    Ok(Material { id, composition, reactions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;

    #[test]
    fn resolves_known_aliases() {
        assert_eq!(resolve_material_id("316L"), Some("SS316"));
        assert_eq!(resolve_material_id("UNS S31600"), Some("SS316"));
        assert_eq!(resolve_material_id("HY-80"), Some("HY80"));
        assert_eq!(resolve_material_id("Inconel 625"), Some("I625"));
        assert_eq!(resolve_material_id("unknown-alloy"), None);
    }

    #[test]
    fn builds_ss316_with_orr_passivation_and_pitting() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let material = build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        assert!(material.cathodic(ReactionKind::Orr).is_some());
        assert!(material.anodic(ReactionKind::Passivation).is_some());
        assert!(material.anodic(ReactionKind::Pitting).is_some());
    }

    #[test]
    fn rejects_unresolvable_material_id() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let err =
            build_material(&catalogs, "not-a-real-alloy", 0.5, Temperature::celsius(25.0), 8.0, None, None).unwrap_err();
        matches!(err, MaterialError::UnknownMaterial(_));
    }

    #[test]
    fn higher_dissolved_oxygen_raises_orr_limiting_current() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let t = Temperature::celsius(25.0);
        let low_do = build_material(&catalogs, "SS316", 0.536, t, 8.1, Some(2.0), None).unwrap();
        let high_do = build_material(&catalogs, "SS316", 0.536, t, 8.1, Some(8.0), None).unwrap();
        let low_i_lim = low_do.cathodic(ReactionKind::Orr).unwrap().i_lim_a_cm2.unwrap();
        let high_i_lim = high_do.cathodic(ReactionKind::Orr).unwrap().i_lim_a_cm2.unwrap();
        assert!(high_i_lim > low_i_lim);
    }

    #[test]
    fn lookup_composition_accepts_non_canonical_alloys() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let (id, composition) = lookup_composition(&catalogs, "SS2205").unwrap();
        assert_eq!(id, "SS2205");
        assert!(composition.pren() > 30.0);
        assert!(lookup_composition(&catalogs, "not-a-real-alloy").is_none());
    }
}
