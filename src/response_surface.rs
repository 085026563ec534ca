//! Polynomial response-surface evaluator (spec.md §4.3).
//!
//! Evaluates the six-term quadratic `ΔG = p00 + p10·Cl + p01·T_K + p20·Cl² +
//! p11·Cl·T_K + p02·T_K²` and applies linear pH interpolation between
//! `0.9·ΔG` and `1.1·ΔG` over the reaction's validated pH window.
//!
//! The single most important invariant here is that `T` is converted to
//! Kelvin through [`crate::units::Temperature::as_kelvin`] before it ever
//! reaches the polynomial. Feeding Celsius silently produced wrong ΔG for
//! every material in the system this crate replaces — see spec.md §4.3.

#![forbid(unsafe_code)]

use crate::catalog::{ReactionKind, ResponseSurfaceCoeffs};
use crate::units::Temperature;

/// Failures from evaluating or validating a response-surface polynomial.
#[derive(Debug, thiserror::Error)]
pub enum ResponseSurfaceError {
    /// ΔG evaluated to zero or negative for a reaction whose Butler–Volmer
    /// form requires a strictly positive activation energy (all ORR/HER/
    /// oxidation paths — spec.md §4.3). This is never silently clamped.
    #[error(
        "coefficients out of validated region for {material}/{reaction:?} at \
         Cl={cl_molar:.4} M, T={t_celsius:.1} °C, pH={ph:.2}: ΔG = {delta_g:.1} J/mol"
    )]
    OutOfValidatedRegion {
        material: String,
        reaction: ReactionKind,
        cl_molar: f64,
        t_celsius: f64,
        ph: f64,
        delta_g: f64,
    },
    /// The requested pH lies outside the reaction's fitted interpolation window.
    #[error("pH {ph} outside fitted window [{ph_min}, {ph_max}] for {material}/{reaction:?}")]
    PhOutOfWindow { material: String, reaction: ReactionKind, ph: f64, ph_min: f64, ph_max: f64 },
}

/// Evaluate ΔG (J/mol) without the pH correction, at `(Cl_molar, T)`.
///
/// This is the raw quadratic; callers needing the reaction's actual
/// activation energy should use [`delta_g`], which applies the pH
/// interpolation and the positivity check.
pub fn delta_g_no_ph(coeffs: &ResponseSurfaceCoeffs, cl_molar: f64, t: Temperature) -> f64 {
    let t_k = t.as_kelvin();
    coeffs.p00
        + coeffs.p10 * cl_molar
        + coeffs.p01 * t_k
        + coeffs.p20 * cl_molar * cl_molar
        + coeffs.p11 * cl_molar * t_k
        + coeffs.p02 * t_k * t_k
}

/// Evaluate ΔG (J/mol) at `(Cl_molar, T, pH)`, including linear pH
/// interpolation between `0.9·ΔG_no_pH` and `1.1·ΔG_no_pH` across the
/// reaction's fitted pH window (spec.md §4.3).
///
/// Returns `OutOfValidatedRegion` if the result is non-positive — the
/// operating point lies outside the polynomial's validated region and a
/// Butler–Volmer evaluation built on it would be meaningless.
pub fn delta_g(
    material: &str,
    reaction: ReactionKind,
    coeffs: &ResponseSurfaceCoeffs,
    cl_molar: f64,
    t: Temperature,
    ph: f64,
) -> Result<f64, ResponseSurfaceError> {
    let base = delta_g_no_ph(coeffs, cl_molar, t);
    let delta_g_max = 1.1 * base;
    let delta_g_min = 0.9 * base;
    let span = coeffs.ph_max - coeffs.ph_min;
    let slope = if span.abs() > f64::EPSILON { (delta_g_max - delta_g_min) / span } else { 0.0 };
    let value = slope * (ph - coeffs.ph_min) + delta_g_min;

    if value <= 0.0 {
        return Err(ResponseSurfaceError::OutOfValidatedRegion {
            material: material.to_string(),
            reaction,
            cl_molar,
            t_celsius: t.as_celsius(),
            ph,
            delta_g: value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Temperature;

    fn coeffs() -> ResponseSurfaceCoeffs {
        ResponseSurfaceCoeffs {
            p00: 47_000.0,
            p10: 120.0,
            p01: 5.0,
            p20: 10.0,
            p11: 0.5,
            p02: 0.001,
            ph_min: 4.0,
            ph_max: 10.0,
        }
    }

    #[test]
    fn celsius_vs_kelvin_changes_the_result_materially() {
        let c = coeffs();
        let at_celsius_value = delta_g_no_ph(&c, 0.5, Temperature::celsius(25.0));
        let if_fed_as_kelvin_by_mistake = delta_g_no_ph(&c, 0.5, Temperature::kelvin(25.0));
        assert!(
            (at_celsius_value - if_fed_as_kelvin_by_mistake).abs() > 1000.0,
            "feeding a bare Celsius number as Kelvin must produce a materially different ΔG"
        );
    }

    #[test]
    fn positive_delta_g_inside_fitted_region() {
        let c = coeffs();
        let g = delta_g("SS316", ReactionKind::Orr, &c, 0.536, Temperature::celsius(25.0), 8.0).unwrap();
        assert!(g > 0.0);
    }

    #[test]
    fn non_positive_delta_g_is_an_explicit_failure() {
        let mut c = coeffs();
        c.p00 = -100_000.0; // force an out-of-region polynomial
        let err = delta_g("HY80", ReactionKind::Orr, &c, 0.536, Temperature::celsius(25.0), 8.0).unwrap_err();
        match err {
            ResponseSurfaceError::OutOfValidatedRegion { material, reaction, .. } => {
                assert_eq!(material, "HY80");
                assert_eq!(reaction, ReactionKind::Orr);
            }
            other => panic!("expected OutOfValidatedRegion, got {other:?}"),
        }
    }

    #[test]
    fn ph_interpolation_is_monotone_between_min_and_max() {
        let c = coeffs();
        let t = Temperature::celsius(25.0);
        let g_low = delta_g("SS316", ReactionKind::Orr, &c, 0.5, t, c.ph_min).unwrap();
        let g_high = delta_g("SS316", ReactionKind::Orr, &c, 0.5, t, c.ph_max).unwrap();
        assert!(g_low < g_high);
    }
}
