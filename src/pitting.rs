//! Dual-tier pitting/crevice corrosion risk assessment (spec.md §4.8).
//!
//! Tier 1 is always available (even for alloys outside the NRL six-alloy
//! set, provided they have a composition catalog entry): it combines the
//! ASTM G48 critical-pitting-temperature margin and the ISO 18070
//! chloride-threshold margin into a risk level, falling back to a PREN-only
//! heuristic when neither tabulated value exists. Tier 2 is mechanistic —
//! comparing the material's pitting potential against its free-standing
//! corrosion potential, solved via [`crate::galvanic::solve_self_corrosion`]
//! — and requires dissolved oxygen to be present (the free-standing
//! potential is only meaningful in an aerated solution). It degrades
//! gracefully to [`Tier2Status::Unavailable`] with a self-describing reason
//! rather than failing the whole assessment when DO is absent or a material
//! has no tabulated pitting reaction.

#![forbid(unsafe_code)]

use crate::catalog::{Catalogs, Composition, ReactionKind};
use crate::galvanic;
use crate::material::Material;
use crate::units::Temperature;

#[derive(Debug, thiserror::Error)]
pub enum PittingError {
    #[error("chloride concentration must be non-negative, got {0} mg/L")]
    NegativeChloride(f64),
    #[error("no composition or PREN available for material '{0}'; Tier 1 cannot proceed")]
    NoTier1Basis(String),
}

/// A coarse, four-level pitting risk classification shared by both tiers
/// (spec.md §3.2/§4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum PittingRisk {
    Low,
    Moderate,
    High,
    Critical,
}

/// Tier-1 result: always computed from tabulated data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Tier1Assessment {
    pub pren: f64,
    pub cpt_c: Option<f64>,
    pub chloride_threshold_at_t_mg_l: Option<f64>,
    pub basis: &'static str,
    pub risk: PittingRisk,
}

/// Tier-2 result: mechanistic, and allowed to be unavailable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Tier2Status {
    Available { e_pit_v_she: f64, e_corr_v_she: f64, margin_v: f64, risk: PittingRisk },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PittingAssessment {
    pub tier1: Tier1Assessment,
    pub tier2: Tier2Status,
    pub overall_risk: PittingRisk,
    /// Set when the two tiers disagree by more than one risk step
    /// (spec.md §4.8 "disagreement record").
    pub disagreement: Option<String>,
}

/// Classify a CPT margin (`t_c - cpt_c`, positive means the service
/// temperature has already reached or exceeded the tabulated critical
/// pitting temperature).
fn cpt_margin_risk(t_c: f64, cpt_c: f64) -> PittingRisk {
    let margin = t_c - cpt_c;
    if margin >= 15.0 {
        PittingRisk::Critical
    } else if margin >= 0.0 {
        PittingRisk::High
    } else if margin >= -10.0 {
        PittingRisk::Moderate
    } else {
        PittingRisk::Low
    }
}

/// Classify a chloride-threshold ratio (`cl_mg_l / threshold_at_t`).
fn chloride_margin_risk(ratio: f64) -> PittingRisk {
    if ratio >= 10.0 {
        PittingRisk::Critical
    } else if ratio >= 1.0 {
        PittingRisk::High
    } else if ratio >= 0.5 {
        PittingRisk::Moderate
    } else {
        PittingRisk::Low
    }
}

/// Tier 1 only needs a material's id (to look up tabulated CPT/chloride-
/// threshold rows) and composition (for PREN and the temperature
/// coefficient's grade key) — never the fully kinetics-wired [`Material`].
/// This lets it run for any alloy with a composition catalog entry
/// (spec.md §4.5), not only the six canonical NRL alloys [`assess`] requires.
pub fn tier1_only(
    catalogs: &Catalogs,
    material_id: &str,
    composition: &Composition,
    cl_mg_l: f64,
    t: Temperature,
) -> Result<Tier1Assessment, PittingError> {
    if cl_mg_l < 0.0 {
        return Err(PittingError::NegativeChloride(cl_mg_l));
    }
    let pren = composition.pren();
    let t_c = t.as_celsius();

    let cpt_c = catalogs.cpt.get(material_id).map(|row| row.cpt_c);
    let threshold_at_t = catalogs.chloride_thresholds.get(material_id).map(|row| {
        let k = catalogs
            .temperature_coefficients
            .get(composition.grade)
            .map(|row| row.k_per_c)
            .unwrap_or(0.0);
        row.threshold_25c_mg_l * (-k * (t_c - 25.0)).exp()
    });

    // spec.md §4.8: Tier 1 combines both margins when both are tabulated,
    // rather than cascading and only ever reporting one basis.
    let (risk, basis) = match (cpt_c, threshold_at_t) {
        (Some(cpt_c), Some(threshold)) => {
            let risk = cpt_margin_risk(t_c, cpt_c).max(chloride_margin_risk(cl_mg_l / threshold));
            (risk, "ASTM G48 critical pitting temperature + ISO 18070 chloride threshold margins")
        }
        (Some(cpt_c), None) => (cpt_margin_risk(t_c, cpt_c), "ASTM G48 critical pitting temperature margin"),
        (None, Some(threshold)) => {
            (chloride_margin_risk(cl_mg_l / threshold), "ISO 18070 chloride threshold margin")
        }
        (None, None) => {
            // Neither tabulated value exists: fall back to a PREN-only
            // heuristic. This is intentionally the lowest-confidence path.
            let risk = if pren >= 40.0 {
                PittingRisk::Low
            } else if pren >= 25.0 {
                PittingRisk::Moderate
            } else if pren >= 15.0 {
                PittingRisk::High
            } else {
                PittingRisk::Critical
            };
            (risk, "PREN heuristic")
        }
    };

    Ok(Tier1Assessment { pren, cpt_c, chloride_threshold_at_t_mg_l: threshold_at_t, basis, risk })
}

/// Tier 2 requires dissolved oxygen: the free-standing corrosion potential
/// solved by [`galvanic::solve_self_corrosion`] is only meaningful in an
/// aerated solution (without a cathodic reactant the couple has no current
/// to balance against). Absent or non-positive DO degrades to
/// [`Tier2Status::Unavailable`] rather than silently assuming aeration.
fn tier2(material: &Material, t: Temperature, do_mg_l: Option<f64>) -> Tier2Status {
    if !do_mg_l.is_some_and(|do_val| do_val > 0.0) {
        return Tier2Status::Unavailable {
            reason: "dissolved oxygen concentration not provided (or non-positive); Tier 2 requires \
                     an aerated solution to solve the material's free-standing corrosion potential"
                .to_string(),
        };
    }
    let Some(pitting_reaction) = material.anodic(ReactionKind::Pitting) else {
        return Tier2Status::Unavailable {
            reason: format!("no tabulated pitting reaction for material '{}'; Tier 2 requires \
                              response-surface coefficients this material's catalog entry lacks", material.id),
        };
    };

    let e_corr = match galvanic::solve_self_corrosion(material, t) {
        Ok(result) => result.e_mix_v_she,
        Err(err) => {
            return Tier2Status::Unavailable {
                reason: format!("could not solve free-standing corrosion potential for material '{}': {err}", material.id),
            };
        }
    };

    let e_pit = pitting_reaction.e_rev.to_she().volts();
    let margin = e_pit - e_corr;
    let risk = if margin < 0.0 {
        PittingRisk::Critical
    } else if margin < 0.05 {
        PittingRisk::High
    } else if margin < 0.15 {
        PittingRisk::Moderate
    } else {
        PittingRisk::Low
    };

    Tier2Status::Available { e_pit_v_she: e_pit, e_corr_v_she: e_corr, margin_v: margin, risk }
}

/// Run both tiers and combine them (spec.md §4.8: overall risk is the worse
/// of the two; tiers disagreeing by more than one step is recorded, not
/// silently resolved).
pub fn assess(
    catalogs: &Catalogs,
    material: &Material,
    cl_mg_l: f64,
    t: Temperature,
    do_mg_l: Option<f64>,
) -> Result<PittingAssessment, PittingError> {
    let tier1 = tier1_only(catalogs, material.id, &material.composition, cl_mg_l, t)?;
    let tier2 = tier2(material, t, do_mg_l);

    let overall_risk = match &tier2 {
        Tier2Status::Available { risk, .. } => tier1.risk.max(*risk),
        Tier2Status::Unavailable { .. } => tier1.risk,
    };

    let disagreement = match &tier2 {
        Tier2Status::Available { risk, .. } => {
            let step_gap = (rank(tier1.risk) - rank(*risk)).abs();
            if step_gap > 1 {
                Some(format!(
                    "Tier 1 ({:?}, via {}) and Tier 2 ({:?}) disagree by {} risk steps",
                    tier1.risk, tier1.basis, risk, step_gap
                ))
            } else {
                None
            }
        }
        Tier2Status::Unavailable { .. } => None,
    };

    Ok(PittingAssessment { tier1, tier2, overall_risk, disagreement })
}

fn rank(risk: PittingRisk) -> i32 {
    match risk {
        PittingRisk::Low => 0,
        PittingRisk::Moderate => 1,
        PittingRisk::High => 2,
        PittingRisk::Critical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::material::build_material;

    #[test]
    fn ss316_tier2_available_hy80_tier2_unavailable() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let ss316 =
            build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, Some(8.0), None).unwrap();
        let hy80 =
            build_material(&catalogs, "HY80", 0.536, Temperature::celsius(25.0), 8.1, Some(8.0), None).unwrap();

        let ss_result = assess(&catalogs, &ss316, 19_000.0, Temperature::celsius(25.0), Some(8.0)).unwrap();
        assert!(matches!(ss_result.tier2, Tier2Status::Available { .. }));

        let hy80_result = assess(&catalogs, &hy80, 19_000.0, Temperature::celsius(25.0), Some(8.0)).unwrap();
        assert!(matches!(hy80_result.tier2, Tier2Status::Unavailable { .. }));
    }

    #[test]
    fn tier2_unavailable_without_dissolved_oxygen() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let ss316 =
            build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let result = assess(&catalogs, &ss316, 19_000.0, Temperature::celsius(25.0), None).unwrap();
        assert!(matches!(result.tier2, Tier2Status::Unavailable { .. }));
    }

    #[test]
    fn higher_chloride_never_lowers_overall_risk() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let ss316 = build_material(&catalogs, "SS316", 0.1, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let low_cl = assess(&catalogs, &ss316, 100.0, Temperature::celsius(25.0), None).unwrap();
        let high_cl = assess(&catalogs, &ss316, 25_000.0, Temperature::celsius(25.0), None).unwrap();
        assert!(rank(high_cl.tier1.risk) >= rank(low_cl.tier1.risk));
    }

    #[test]
    fn large_cpt_and_chloride_margins_combine_to_critical() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let ss316 = build_material(&catalogs, "SS316", 0.536, Temperature::celsius(90.0), 8.1, None, None).unwrap();
        let result = assess(&catalogs, &ss316, 50_000.0, Temperature::celsius(90.0), None).unwrap();
        assert_eq!(result.tier1.risk, PittingRisk::Critical);
    }

    #[test]
    fn rejects_negative_chloride() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let ss316 =
            build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let err = assess(&catalogs, &ss316, -1.0, Temperature::celsius(25.0), None).unwrap_err();
        matches!(err, PittingError::NegativeChloride(_));
    }
}
