//! Dissolved-oxygen ↔ redox-potential conversions (spec.md §4.x, "Redox
//! conversion").
//!
//! The oxygen reduction reaction sets the solution's redox potential; this
//! module converts between a measured dissolved-oxygen concentration and
//! the equivalent Eh/ORP via the Nernst equation, and back. Both directions
//! go through [`crate::units::Potential`] so the reference electrode is
//! never ambiguous.

#![forbid(unsafe_code)]

use crate::chemistry::oxygen_saturation_mg_l;
use crate::units::{Potential, Reference, Temperature, F, R};

/// O₂ + 2H₂O + 4e⁻ → 4OH⁻ standard potential vs SHE, volts (25 °C, pH 0 basis
/// before the Nernstian pH term is applied).
const E0_ORR_SHE: f64 = 1.229;

/// Below this dissolved-oxygen concentration (mg/L) the Nernst equation's
/// log term diverges; readings are clamped here rather than producing an
/// unbounded potential.
pub const DO_FLOOR_MG_L: f64 = 0.01;

/// Failures converting between dissolved oxygen and redox potential.
#[derive(Debug, thiserror::Error)]
pub enum RedoxError {
    #[error("dissolved oxygen {0} mg/L is negative")]
    NegativeDissolvedOxygen(f64),
    #[error("pH {0} is outside the physically meaningful range [0, 14]")]
    PhOutOfRange(f64),
}

fn molar_o2_from_mg_l(do_mg_l: f64) -> f64 {
    const O2_MOLAR_MASS_G_MOL: f64 = 31.998;
    // Approximate 1 L of dilute aqueous solution as 1 kg; adequate at the
    // ppm-level oxygen concentrations this module deals with.
    (do_mg_l / 1000.0) / O2_MOLAR_MASS_G_MOL
}

/// Convert a dissolved-oxygen concentration (mg/L) and solution pH to the
/// equivalent redox potential (Eh), via the four-electron ORR Nernst
/// equation at 25 °C reference kinetics, corrected for `t`.
///
/// DO is clamped at [`DO_FLOOR_MG_L`] to keep the logarithm finite; this
/// clamp is a physical statement ("anaerobic, oxygen below detection"), not
/// an error.
pub fn dissolved_oxygen_to_eh(
    do_mg_l: f64,
    ph: f64,
    t: Temperature,
) -> Result<Potential, RedoxError> {
    if do_mg_l < 0.0 {
        return Err(RedoxError::NegativeDissolvedOxygen(do_mg_l));
    }
    if !(0.0..=14.0).contains(&ph) {
        return Err(RedoxError::PhOutOfRange(ph));
    }

    let do_clamped = do_mg_l.max(DO_FLOOR_MG_L);
    let po2_equiv = molar_o2_from_mg_l(do_clamped).max(1e-12);
    let t_k = t.as_kelvin();

    // E = E0 - (RT/nF)*ln(1/(PO2 * [H+]^4)) ; n = 4, with PO2 standing in for
    // the oxygen activity term relative to its saturation reference.
    let h_activity: f64 = 10f64.powf(-ph);
    let reaction_quotient = 1.0 / (po2_equiv * h_activity.powi(4));
    let e = E0_ORR_SHE - (R * t_k) / (4.0 * F) * reaction_quotient.ln();

    Ok(Potential::she(e))
}

/// Invert [`dissolved_oxygen_to_eh`]: given a measured Eh/ORP and pH, solve
/// for the dissolved-oxygen concentration (mg/L) that would produce it at
/// `t`. Saturates at the air-equilibrium solubility from
/// [`crate::chemistry::oxygen_saturation_mg_l`].
pub fn eh_to_dissolved_oxygen(
    eh: Potential,
    ph: f64,
    t: Temperature,
    salinity_psu: f64,
) -> Result<f64, RedoxError> {
    if !(0.0..=14.0).contains(&ph) {
        return Err(RedoxError::PhOutOfRange(ph));
    }
    let she = eh.to_she();
    let t_k = t.as_kelvin();
    let h_activity: f64 = 10f64.powf(-ph);

    let exponent = (she.volts() - E0_ORR_SHE) * (4.0 * F) / (R * t_k);
    let reaction_quotient = exponent.exp();
    let po2_equiv = 1.0 / (reaction_quotient * h_activity.powi(4));
    let o2_mol = po2_equiv.max(0.0);
    const O2_MOLAR_MASS_G_MOL: f64 = 31.998;
    let do_mg_l = o2_mol * O2_MOLAR_MASS_G_MOL * 1000.0;

    let ceiling = oxygen_saturation_mg_l(t, salinity_psu);
    Ok(do_mg_l.clamp(DO_FLOOR_MG_L, ceiling.max(DO_FLOOR_MG_L)))
}

/// Convert a measured potential in an arbitrary reference frame to ORP
/// expressed vs SHE — a thin, explicit wrapper so callers never have to
/// remember which frame ORP meters report in (commonly Ag/AgCl).
pub fn orp_to_eh(orp: Potential) -> Potential {
    orp.to(Reference::She)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_dissolved_oxygen() {
        let err = dissolved_oxygen_to_eh(-1.0, 8.0, Temperature::celsius(25.0)).unwrap_err();
        matches!(err, RedoxError::NegativeDissolvedOxygen(_));
    }

    #[test]
    fn higher_dissolved_oxygen_raises_eh() {
        let low = dissolved_oxygen_to_eh(1.0, 8.0, Temperature::celsius(25.0)).unwrap();
        let high = dissolved_oxygen_to_eh(8.0, 8.0, Temperature::celsius(25.0)).unwrap();
        assert!(high.volts() > low.volts());
    }

    #[test]
    fn round_trip_do_to_eh_to_do_is_approximately_identity() {
        let t = Temperature::celsius(25.0);
        let original_do = 6.5;
        let eh = dissolved_oxygen_to_eh(original_do, 8.0, t).unwrap();
        let recovered = eh_to_dissolved_oxygen(eh, 8.0, t, 35.0).unwrap();
        assert!(
            (recovered - original_do).abs() < 1e-6,
            "expected round trip to recover {original_do}, got {recovered}"
        );
    }

    #[test]
    fn eh_to_do_saturates_at_air_equilibrium_ceiling() {
        let t = Temperature::celsius(25.0);
        // An implausibly high Eh should saturate at the DO ceiling, not blow past it.
        let extreme = Potential::she(2.0);
        let do_mg_l = eh_to_dissolved_oxygen(extreme, 8.0, t, 35.0).unwrap();
        let ceiling = oxygen_saturation_mg_l(t, 35.0);
        assert!(do_mg_l <= ceiling + 1e-9);
    }
}
