//! Mixed-potential (galvanic couple) solver (spec.md §4.7).
//!
//! Two materials in electrical and electrolytic contact settle at a single
//! mixed potential `E_mix` where the area-weighted sum of every electrode
//! reaction's current (anodic positive, cathodic negative) is zero. This
//! module brackets and bisects for `E_mix`, then reports each material's
//! anodic-branch current there — the actual metal-loss rate, not the
//! (by definition, near-zero) net current.

#![forbid(unsafe_code)]

use crate::kinetics::KineticsError;
use crate::material::Material;
use crate::units::{Potential, Temperature, F, SECONDS_PER_YEAR};

/// Maximum bisection iterations before giving up on bracketing `E_mix`.
pub const MAX_BISECTION_ITERATIONS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum GalvanicError {
    #[error("area ratio must be positive for both materials, got {area_a} cm^2 and {area_b} cm^2")]
    NonPositiveArea { area_a: f64, area_b: f64 },
    #[error("could not bracket a root for E_mix within [{e_min}, {e_max}] V (SHE)")]
    FailedToBracketRoot { e_min: f64, e_max: f64 },
    #[error(transparent)]
    Kinetics(#[from] KineticsError),
}

/// Coarse severity classification of a galvanic couple, by
/// `current_ratio = i_galvanic / i_isolated_anode` (spec.md §4.7 point 6):
/// `<=1` Negligible, `<=3` Minor, `<=10` Moderate, `>10` Severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GalvanicSeverity {
    Negligible,
    Minor,
    Moderate,
    Severe,
}

fn severity_from_current_ratio(current_ratio: f64) -> GalvanicSeverity {
    match current_ratio {
        r if r <= 1.0 => GalvanicSeverity::Negligible,
        r if r <= 3.0 => GalvanicSeverity::Minor,
        r if r <= 10.0 => GalvanicSeverity::Moderate,
        _ => GalvanicSeverity::Severe,
    }
}

/// Result of solving a two-material galvanic couple.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GalvanicResult {
    pub e_mix_v_she: f64,
    pub anode_material: String,
    pub anodic_current_density_a_cm2: f64,
    pub anode_corrosion_rate_mm_per_year: f64,
    /// `i_galvanic / i_isolated_anode`: the anode's current in the couple
    /// relative to what it would corrode at on its own (spec.md §4.7/§6.1).
    pub current_ratio: f64,
    /// The area-weighted net current density at `E_mix` (near-zero by
    /// construction) — reported alongside the anodic-branch current so the
    /// two are never conflated (spec.md §9).
    pub net_current_density_a_cm2: f64,
    pub severity: GalvanicSeverity,
}

fn total_current_density_a_cm2(material: &Material, e: Potential, t: Temperature) -> Result<f64, KineticsError> {
    let mut total = 0.0;
    for reaction in &material.reactions {
        total += match reaction {
            crate::material::ReactionSpec::Cathodic { reaction, .. } => reaction.current_density_a_cm2(e, t)?,
            crate::material::ReactionSpec::Anodic { reaction, .. } => reaction.current_density_a_cm2(e, t)?,
        };
    }
    Ok(total)
}

fn anodic_current_density_a_cm2(material: &Material, e: Potential, t: Temperature) -> Result<f64, KineticsError> {
    let mut total = 0.0;
    for reaction in &material.reactions {
        if let crate::material::ReactionSpec::Anodic { reaction, .. } = reaction {
            total += reaction.current_density_a_cm2(e, t)?;
        }
    }
    Ok(total)
}

/// Approximate molar mass (g/mol) used for Faraday rate conversion. These
/// are bulk alloy stand-ins (dominant-element basis), not a composition-
/// weighted average — adequate for an order-of-magnitude corrosion rate.
fn approx_molar_mass_g_mol(material_id: &str) -> f64 {
    match material_id {
        "HY80" | "HY100" => 55.85,  // Fe basis
        "SS316" => 55.85,           // Fe-dominant stainless basis
        "Ti" => 47.87,
        "I625" => 58.69,            // Ni basis
        "CuNi" => 63.55,            // Cu basis
        _ => 55.85,
    }
}

/// Solve the mixed potential for a galvanic couple between `material_a` (area
/// `area_a_cm2`) and `material_b` (area `area_b_cm2`), then report the anodic
/// member's corrosion rate there.
///
/// Identical material ids short-circuit to a zero-severity result at each
/// material's own free-corrosion potential — there is no driving force, and
/// bisecting would otherwise need to resolve a degenerate root.
pub fn solve_couple(
    material_a: &Material,
    area_a_cm2: f64,
    material_b: &Material,
    area_b_cm2: f64,
    t: Temperature,
) -> Result<GalvanicResult, GalvanicError> {
    if area_a_cm2 <= 0.0 || area_b_cm2 <= 0.0 {
        return Err(GalvanicError::NonPositiveArea { area_a: area_a_cm2, area_b: area_b_cm2 });
    }

    if material_a.id == material_b.id {
        let e_mix = material_a
            .anodic(crate::catalog::ReactionKind::Passivation)
            .or_else(|| material_a.anodic(crate::catalog::ReactionKind::Oxidation))
            .map(|r| r.e_rev)
            .unwrap_or(Potential::she(0.0));
        return Ok(GalvanicResult {
            e_mix_v_she: e_mix.to_she().volts(),
            anode_material: material_a.id.to_string(),
            anodic_current_density_a_cm2: 0.0,
            anode_corrosion_rate_mm_per_year: 0.0,
            current_ratio: 1.0,
            net_current_density_a_cm2: 0.0,
            severity: GalvanicSeverity::Negligible,
        });
    }

    let objective = |e_v: f64| -> Result<f64, GalvanicError> {
        let e = Potential::she(e_v);
        let i_a = total_current_density_a_cm2(material_a, e, t)?;
        let i_b = total_current_density_a_cm2(material_b, e, t)?;
        Ok(area_a_cm2 * i_a + area_b_cm2 * i_b)
    };

    let mut e_lo = -1.2;
    let mut e_hi = 1.5;
    let mut f_lo = objective(e_lo)?;
    let f_hi = objective(e_hi)?;
    if f_lo.signum() == f_hi.signum() {
        return Err(GalvanicError::FailedToBracketRoot { e_min: e_lo, e_max: e_hi });
    }

    let mut e_mid = e_lo;
    for _ in 0..MAX_BISECTION_ITERATIONS {
        e_mid = 0.5 * (e_lo + e_hi);
        let f_mid = objective(e_mid)?;
        if f_mid.abs() < 1e-15 || (e_hi - e_lo).abs() < 1e-9 {
            break;
        }
        if f_mid.signum() == f_lo.signum() {
            e_lo = e_mid;
            f_lo = f_mid;
        } else {
            e_hi = e_mid;
        }
    }

    let e_mix = Potential::she(e_mid);
    let i_anodic_a = anodic_current_density_a_cm2(material_a, e_mix, t)?;
    let i_anodic_b = anodic_current_density_a_cm2(material_b, e_mix, t)?;
    let net_current_density_a_cm2 =
        (area_a_cm2 * total_current_density_a_cm2(material_a, e_mix, t)?
            + area_b_cm2 * total_current_density_a_cm2(material_b, e_mix, t)?)
            / (area_a_cm2 + area_b_cm2);

    let (anode, anode_id, anode_current, anode_area_correction) = if i_anodic_a.abs() >= i_anodic_b.abs() {
        (material_a, material_a.id, i_anodic_a, area_b_cm2 / area_a_cm2)
    } else {
        (material_b, material_b.id, i_anodic_b, area_a_cm2 / area_b_cm2)
    };

    // Galvanic acceleration scales the attacked metal's effective current by
    // the cathode/anode area ratio (the classic "small anode, large cathode"
    // severity driver); the per-reaction Tafel evaluation above already used
    // the true area-weighted E_mix, so this only affects the reported rate
    // when the anode is the smaller member of the couple.
    let effective_current = anode_current.abs() * anode_area_correction.max(1.0);

    let molar_mass = approx_molar_mass_g_mol(anode_id);
    let density_kg_m3 = anode.composition.density_kg_m3;
    let n = anode.composition.n_electrons;

    let rate_mm_per_year = corrosion_rate_mm_per_year(effective_current, molar_mass, density_kg_m3, n);

    // current_ratio = i_galvanic / i_isolated_anode (spec.md §4.7 point 6):
    // the anode's coupled current against what it would draw corroding alone.
    let isolated = solve_self_corrosion(anode, t)?;
    let i_isolated = isolated.anodic_current_density_a_cm2.max(CURRENT_RATIO_FLOOR_A_CM2);
    let current_ratio = effective_current / i_isolated;
    let severity = severity_from_current_ratio(current_ratio);

    Ok(GalvanicResult {
        e_mix_v_she: e_mix.volts(),
        anode_material: anode_id.to_string(),
        anodic_current_density_a_cm2: effective_current,
        anode_corrosion_rate_mm_per_year: rate_mm_per_year,
        current_ratio,
        net_current_density_a_cm2,
        severity,
    })
}

/// Floor for the isolated-anode current used as `current_ratio`'s
/// denominator, avoiding a division blow-up when a material's self-corrosion
/// current underflows to numerically zero.
const CURRENT_RATIO_FLOOR_A_CM2: f64 = 1e-15;

fn corrosion_rate_mm_per_year(i_a_cm2: f64, molar_mass_g_mol: f64, density_kg_m3: f64, n_electrons: u8) -> f64 {
    let density_g_cm3 = density_kg_m3 / 1000.0;
    let rate_cm_per_year = i_a_cm2 * molar_mass_g_mol * SECONDS_PER_YEAR / (f64::from(n_electrons) * F * density_g_cm3);
    rate_cm_per_year * 10.0
}

/// Solve a single material's own free-corrosion potential: the point where
/// its cathodic and anodic reactions balance (`Σ i = 0`). This is the
/// one-electrode special case of [`solve_couple`] — no second material or
/// area ratio involved — used for predicting a bare surface's corrosion
/// rate in aerated, chloride-bearing service rather than a galvanic couple.
pub fn solve_self_corrosion(material: &Material, t: Temperature) -> Result<GalvanicResult, GalvanicError> {
    let objective = |e_v: f64| -> Result<f64, GalvanicError> {
        Ok(total_current_density_a_cm2(material, Potential::she(e_v), t)?)
    };

    let mut e_lo = -1.2;
    let mut e_hi = 1.5;
    let mut f_lo = objective(e_lo)?;
    let f_hi = objective(e_hi)?;
    if f_lo.signum() == f_hi.signum() {
        return Err(GalvanicError::FailedToBracketRoot { e_min: e_lo, e_max: e_hi });
    }

    let mut e_mid = e_lo;
    for _ in 0..MAX_BISECTION_ITERATIONS {
        e_mid = 0.5 * (e_lo + e_hi);
        let f_mid = objective(e_mid)?;
        if f_mid.abs() < 1e-15 || (e_hi - e_lo).abs() < 1e-9 {
            break;
        }
        if f_mid.signum() == f_lo.signum() {
            e_lo = e_mid;
            f_lo = f_mid;
        } else {
            e_hi = e_mid;
        }
    }

    let e_corr = Potential::she(e_mid);
    let i_anodic = anodic_current_density_a_cm2(material, e_corr, t)?.abs();
    let rate = corrosion_rate_mm_per_year(
        i_anodic,
        approx_molar_mass_g_mol(material.id),
        material.composition.density_kg_m3,
        material.composition.n_electrons,
    );

    // A single free-standing electrode has no galvanic partner to compare
    // against, so current_ratio is trivially 1 (the anode vs. itself) and
    // severity is always Negligible — this is the reference point
    // `solve_couple`'s current_ratio is measured against, not a couple.
    Ok(GalvanicResult {
        e_mix_v_she: e_corr.volts(),
        anode_material: material.id.to_string(),
        anodic_current_density_a_cm2: i_anodic,
        anode_corrosion_rate_mm_per_year: rate,
        current_ratio: 1.0,
        net_current_density_a_cm2: 0.0,
        severity: GalvanicSeverity::Negligible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::material::build_material;

    #[test]
    fn identical_materials_short_circuit_to_negligible() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let m = build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let result = solve_couple(&m, 10.0, &m, 10.0, Temperature::celsius(25.0)).unwrap();
        assert_eq!(result.severity, GalvanicSeverity::Negligible);
        assert_eq!(result.anodic_current_density_a_cm2, 0.0);
        assert_eq!(result.current_ratio, 1.0);
    }

    #[test]
    fn hy80_is_the_anode_against_ss316() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let hy80 = build_material(&catalogs, "HY80", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let ss316 = build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let result = solve_couple(&hy80, 10.0, &ss316, 10.0, Temperature::celsius(25.0)).unwrap();
        assert_eq!(result.anode_material, "HY80");
        assert!(result.anode_corrosion_rate_mm_per_year > 0.0);
        assert!(result.current_ratio >= 1.0);
    }

    #[test]
    fn larger_cathode_area_raises_current_ratio() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let hy80 = build_material(&catalogs, "HY80", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let ss316 = build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let small_cathode = solve_couple(&hy80, 10.0, &ss316, 10.0, Temperature::celsius(25.0)).unwrap();
        let large_cathode = solve_couple(&hy80, 1.0, &ss316, 50.0, Temperature::celsius(25.0)).unwrap();
        assert!(large_cathode.current_ratio > small_cathode.current_ratio);
    }

    #[test]
    fn rejects_non_positive_area() {
        let catalogs = Catalogs::load_embedded().unwrap();
        let m = build_material(&catalogs, "SS316", 0.536, Temperature::celsius(25.0), 8.1, None, None).unwrap();
        let err = solve_couple(&m, 0.0, &m, 10.0, Temperature::celsius(25.0)).unwrap_err();
        matches!(err, GalvanicError::NonPositiveArea { .. });
    }
}
