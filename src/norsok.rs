//! NORSOK M-506 CO₂/H₂S corrosion rate model (spec.md §4.10).
//!
//! Two entry points mirror the standard's own structure: a direct path when
//! the caller already knows the in-situ pH, and a path that derives pH from
//! an upstream calculation first. `calc_iterations` selects which upstream
//! pH model runs (`1` = unsaturated water, `2` = water saturated with
//! FeCO₃) — it is a mode selector, not a solver iteration count, matching
//! the standard's own parameter naming.
//!
//! The wall shear stress the rate correlation needs is not accepted
//! directly; it is derived from the caller's two-phase flow state (gas/
//! liquid superficial velocities, densities, viscosities, holdup, pipe
//! diameter and roughness) via a homogeneous-mixture Reynolds number and
//! Darcy friction factor, matching the standard's own flow-regime inputs
//! rather than asking the caller to have already run a separate
//! hydraulics model.

#![forbid(unsafe_code)]

use crate::units::Temperature;

/// pH-correction table is only validated across this window; outside it the
/// value is clamped and a warning recorded rather than silently extrapolated
/// (spec.md §9).
pub const PH_CORRECTION_MIN: f64 = 3.5;
pub const PH_CORRECTION_MAX: f64 = 6.5;

/// Reynolds number below which the mixture friction factor uses the laminar
/// `64/Re` relation instead of the Haaland turbulent approximation.
const RE_LAMINAR_MAX: f64 = 2_300.0;

#[derive(Debug, thiserror::Error)]
pub enum NorsokError {
    #[error("CO2 partial pressure must be positive, got co2_fraction={co2_fraction}, pressure_bar={pressure_bar}")]
    NonPositiveFco2 { co2_fraction: f64, pressure_bar: f64 },
    #[error("gas volume must be positive, got {0} m^3")]
    NonPositiveGasVolume(f64),
    #[error("liquid volume must be positive, got {0} m^3")]
    NonPositiveLiquidVolume(f64),
    #[error("holdup must lie in [0, 1], got {0}")]
    InvalidHoldup(f64),
    #[error("gas viscosity must be positive, got {0} Pa*s")]
    NonPositiveGasViscosity(f64),
    #[error("liquid viscosity must be positive, got {0} Pa*s")]
    NonPositiveLiquidViscosity(f64),
    #[error("pipe diameter must be positive, got {0} m")]
    NonPositiveDiameter(f64),
    #[error("superficial gas/liquid velocities must sum to a positive mixture velocity, got v_sg={v_sg}, v_sl={v_sl}")]
    NonPositiveFlowVelocity { v_sg: f64, v_sl: f64 },
    #[error("derived wall shear stress must be positive, got {0} Pa")]
    NonPositiveShearStress(f64),
    #[error("calc_iterations must be 1 (unsaturated) or 2 (FeCO3-saturated), got {0}")]
    InvalidCalcMode(u8),
}

/// Inputs to the NORSOK M-506 model, named after the standard's own
/// eighteen-parameter input block (spec.md §4.10): CO2 fraction, pressure,
/// temperature, gas/liquid superficial velocities and mass/volume flows,
/// holdup, gas/liquid viscosities, pipe roughness and diameter, upstream pH
/// state, and the `calc_iterations` mode selector.
#[derive(Debug, Clone, Copy)]
pub struct NorsokInputs {
    pub co2_fraction: f64,
    pub pressure_bar: f64,
    pub temperature: Temperature,
    pub v_sg_m_s: f64,
    pub v_sl_m_s: f64,
    pub mass_g_kg: f64,
    pub mass_l_kg: f64,
    pub vol_g_m3: f64,
    pub vol_l_m3: f64,
    pub holdup: f64,
    pub vis_g_pa_s: f64,
    pub vis_l_pa_s: f64,
    pub roughness_m: f64,
    pub diameter_m: f64,
    /// In-situ pH. If positive, bypasses the upstream pH calculator. If
    /// zero or negative, `calc_iterations` selects an upstream model instead.
    pub ph_in: f64,
    pub bicarbonate_mg_l: f64,
    pub ionic_strength_mg_l: f64,
    pub calc_iterations: u8,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NorsokResult {
    pub corrosion_rate_mm_per_year: f64,
    pub ph_used: f64,
    pub ph_source: &'static str,
    pub ph_clamped: bool,
    /// The wall shear stress derived from the supplied flow state, reported
    /// alongside the rate for transparency rather than left as an internal
    /// intermediate.
    pub wall_shear_stress_pa: f64,
}

/// Temperature-dependent rate constant `K_t`, mm/year, per NORSOK M-506
/// Table 1 (tabulated at 5, 15, 20, 40, 60, 80, 90, 120, 150 °C; linearly
/// interpolated between points, clamped at the table's ends).
fn kt_mm_per_year(t_c: f64) -> f64 {
    const POINTS: [(f64, f64); 9] = [
        (5.0, 0.42),
        (15.0, 1.59),
        (20.0, 4.762),
        (40.0, 10.456),
        (60.0, 18.022),
        (80.0, 19.79),
        (90.0, 17.634),
        (120.0, 11.243),
        (150.0, 4.0),
    ];
    if t_c <= POINTS[0].0 {
        return POINTS[0].1;
    }
    if t_c >= POINTS[POINTS.len() - 1].0 {
        return POINTS[POINTS.len() - 1].1;
    }
    for window in POINTS.windows(2) {
        let (t0, k0) = window[0];
        let (t1, k1) = window[1];
        if t_c >= t0 && t_c <= t1 {
            let frac = (t_c - t0) / (t1 - t0);
            return k0 + frac * (k1 - k0);
        }
    }
    POINTS[POINTS.len() - 1].1
}

/// Upstream pH calculator: unsaturated water (`calc_iterations == 1`) or
/// water saturated with protective FeCO₃ scale (`calc_iterations == 2`),
/// both simplified empirical fits against `T` and `fCO2`, with small
/// empirical corrections for bicarbonate alkalinity (raises pH) and ionic
/// strength (lowers it slightly via activity-coefficient suppression) —
/// documented as an engineering simplification, not a full speciation model.
fn upstream_ph(t_c: f64, fco2_bar: f64, bicarbonate_mg_l: f64, ionic_strength_mg_l: f64, calc_iterations: u8) -> f64 {
    let base = 3.82 + 0.00384 * t_c - 0.152 * fco2_bar.ln();
    let corrected = base + 0.00005 * bicarbonate_mg_l - 0.00002 * ionic_strength_mg_l;
    match calc_iterations {
        2 => corrected + 0.6, // FeCO3 scale raises in-situ pH relative to bulk water
        _ => corrected,
    }
}

/// pH-correction factor `f(pH)`, clamped to [`PH_CORRECTION_MIN`],
/// [`PH_CORRECTION_MAX`] with the clamp reported rather than hidden.
fn ph_correction_factor(ph_raw: f64) -> (f64, bool) {
    let clamped_ph = ph_raw.clamp(PH_CORRECTION_MIN, PH_CORRECTION_MAX);
    let was_clamped = (clamped_ph - ph_raw).abs() > 1e-9;
    // Empirical decreasing polynomial fit to the standard's pH correction curve.
    let f = 10f64.powf(-0.95 * (clamped_ph - PH_CORRECTION_MIN));
    (f.max(1e-3), was_clamped)
}

/// Derive the wall shear stress a two-phase flow exerts on the pipe wall
/// from its homogeneous-mixture properties: mixture density and viscosity
/// weighted by holdup, a mixture Reynolds number, and a Darcy friction
/// factor (laminar `64/Re` below `RE_LAMINAR_MAX`, Haaland's explicit
/// turbulent approximation above it), giving `tau = f/8 * rho_m * v_m^2`.
fn derive_wall_shear_stress_pa(inputs: &NorsokInputs) -> Result<f64, NorsokError> {
    if inputs.vol_g_m3 <= 0.0 {
        return Err(NorsokError::NonPositiveGasVolume(inputs.vol_g_m3));
    }
    if inputs.vol_l_m3 <= 0.0 {
        return Err(NorsokError::NonPositiveLiquidVolume(inputs.vol_l_m3));
    }
    if !(0.0..=1.0).contains(&inputs.holdup) {
        return Err(NorsokError::InvalidHoldup(inputs.holdup));
    }
    if inputs.vis_g_pa_s <= 0.0 {
        return Err(NorsokError::NonPositiveGasViscosity(inputs.vis_g_pa_s));
    }
    if inputs.vis_l_pa_s <= 0.0 {
        return Err(NorsokError::NonPositiveLiquidViscosity(inputs.vis_l_pa_s));
    }
    if inputs.diameter_m <= 0.0 {
        return Err(NorsokError::NonPositiveDiameter(inputs.diameter_m));
    }
    let v_m = inputs.v_sg_m_s + inputs.v_sl_m_s;
    if v_m <= 0.0 {
        return Err(NorsokError::NonPositiveFlowVelocity { v_sg: inputs.v_sg_m_s, v_sl: inputs.v_sl_m_s });
    }

    let rho_g = inputs.mass_g_kg / inputs.vol_g_m3;
    let rho_l = inputs.mass_l_kg / inputs.vol_l_m3;
    let rho_m = inputs.holdup * rho_l + (1.0 - inputs.holdup) * rho_g;
    let mu_m = inputs.holdup * inputs.vis_l_pa_s + (1.0 - inputs.holdup) * inputs.vis_g_pa_s;

    let re_m = rho_m * v_m * inputs.diameter_m / mu_m;
    let friction_factor = if re_m < RE_LAMINAR_MAX {
        64.0 / re_m
    } else {
        let relative_roughness = inputs.roughness_m / inputs.diameter_m;
        let haaland = -1.8 * ((relative_roughness / 3.7).powf(1.11) + 6.9 / re_m).log10();
        1.0 / (haaland * haaland)
    };

    Ok(friction_factor / 8.0 * rho_m * v_m * v_m)
}

/// Evaluate the NORSOK M-506 corrosion rate.
///
/// `CR = Kt · fCO2^0.62 · (τ/19)^(0.146 + 0.0324·log10(fCO2)) · f(pH)`, with
/// `τ` the wall shear stress in Pa (derived internally from flow state) and
/// `fCO2 = co2_fraction · pressure_bar` in bar.
pub fn predict_co2_corrosion_rate(inputs: NorsokInputs) -> Result<NorsokResult, NorsokError> {
    let fco2_bar = inputs.co2_fraction * inputs.pressure_bar;
    if fco2_bar <= 0.0 {
        return Err(NorsokError::NonPositiveFco2 { co2_fraction: inputs.co2_fraction, pressure_bar: inputs.pressure_bar });
    }

    let wall_shear_stress_pa = derive_wall_shear_stress_pa(&inputs)?;
    if wall_shear_stress_pa <= 0.0 {
        return Err(NorsokError::NonPositiveShearStress(wall_shear_stress_pa));
    }

    let t_c = inputs.temperature.as_celsius();
    let (ph_used, ph_source) = if inputs.ph_in > 0.0 {
        (inputs.ph_in, "caller-supplied pH_in")
    } else {
        if !(1..=2).contains(&inputs.calc_iterations) {
            return Err(NorsokError::InvalidCalcMode(inputs.calc_iterations));
        }
        let ph = upstream_ph(t_c, fco2_bar, inputs.bicarbonate_mg_l, inputs.ionic_strength_mg_l, inputs.calc_iterations);
        let source = if inputs.calc_iterations == 2 { "upstream pH (FeCO3-saturated)" } else { "upstream pH (unsaturated)" };
        (ph, source)
    };

    let (f_ph, ph_clamped) = ph_correction_factor(ph_used);
    let kt = kt_mm_per_year(t_c);
    let exponent = 0.146 + 0.0324 * fco2_bar.log10();
    let shear_term = (wall_shear_stress_pa / 19.0).powf(exponent);
    let rate = kt * fco2_bar.powf(0.62) * shear_term * f_ph;

    Ok(NorsokResult { corrosion_rate_mm_per_year: rate, ph_used, ph_source, ph_clamped, wall_shear_stress_pa })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_inputs() -> NorsokInputs {
        NorsokInputs {
            co2_fraction: 0.05,
            pressure_bar: 20.0,
            temperature: Temperature::celsius(60.0),
            v_sg_m_s: 4.0,
            v_sl_m_s: 1.0,
            mass_g_kg: 80.0,
            mass_l_kg: 1_000.0,
            vol_g_m3: 1.0,
            vol_l_m3: 1.0,
            holdup: 0.3,
            vis_g_pa_s: 1.5e-5,
            vis_l_pa_s: 8.9e-4,
            roughness_m: 4.6e-5,
            diameter_m: 0.2,
            ph_in: 0.0,
            bicarbonate_mg_l: 150.0,
            ionic_strength_mg_l: 500.0,
            calc_iterations: 1,
        }
    }

    #[test]
    fn rate_decreases_as_ph_rises() {
        let mut low_ph = base_inputs();
        low_ph.ph_in = 4.0;
        let mut high_ph = base_inputs();
        high_ph.ph_in = 6.0;

        let low = predict_co2_corrosion_rate(low_ph).unwrap();
        let high = predict_co2_corrosion_rate(high_ph).unwrap();
        assert!(high.corrosion_rate_mm_per_year < low.corrosion_rate_mm_per_year);
    }

    #[test]
    fn ph_above_window_is_clamped_and_reported() {
        let mut inputs = base_inputs();
        inputs.ph_in = 9.0;
        let result = predict_co2_corrosion_rate(inputs).unwrap();
        assert!(result.ph_clamped);
    }

    #[test]
    fn bypass_path_and_upstream_path_both_produce_positive_rates() {
        let bypass = predict_co2_corrosion_rate(NorsokInputs { ph_in: 4.5, ..base_inputs() }).unwrap();
        let upstream = predict_co2_corrosion_rate(base_inputs()).unwrap();
        assert!(bypass.corrosion_rate_mm_per_year > 0.0);
        assert!(upstream.corrosion_rate_mm_per_year > 0.0);
    }

    #[test]
    fn higher_flow_velocity_raises_derived_wall_shear_and_rate() {
        let slow = base_inputs();
        let mut fast = base_inputs();
        fast.v_sg_m_s = 12.0;
        fast.v_sl_m_s = 3.0;

        let slow_result = predict_co2_corrosion_rate(slow).unwrap();
        let fast_result = predict_co2_corrosion_rate(fast).unwrap();
        assert!(fast_result.wall_shear_stress_pa > slow_result.wall_shear_stress_pa);
        assert!(fast_result.corrosion_rate_mm_per_year > slow_result.corrosion_rate_mm_per_year);
    }

    #[test]
    fn rejects_invalid_calc_mode_when_bypassing_ph() {
        let inputs = NorsokInputs { calc_iterations: 3, ..base_inputs() };
        let err = predict_co2_corrosion_rate(inputs).unwrap_err();
        matches!(err, NorsokError::InvalidCalcMode(3));
    }

    #[test]
    fn rejects_non_positive_fco2() {
        let inputs = NorsokInputs { co2_fraction: 0.0, ph_in: 4.5, ..base_inputs() };
        let err = predict_co2_corrosion_rate(inputs).unwrap_err();
        matches!(err, NorsokError::NonPositiveFco2 { .. });
    }

    #[test]
    fn rejects_invalid_holdup() {
        let inputs = NorsokInputs { holdup: 1.5, ph_in: 4.5, ..base_inputs() };
        let err = predict_co2_corrosion_rate(inputs).unwrap_err();
        matches!(err, NorsokError::InvalidHoldup(_));
    }

    #[test]
    fn rejects_non_positive_diameter() {
        let inputs = NorsokInputs { diameter_m: 0.0, ph_in: 4.5, ..base_inputs() };
        let err = predict_co2_corrosion_rate(inputs).unwrap_err();
        matches!(err, NorsokError::NonPositiveDiameter(_));
    }
}
