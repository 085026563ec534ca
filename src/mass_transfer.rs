//! Mass-transfer correlations for diffusion-limited current density
//! (spec.md §4.6).
//!
//! Given a flow geometry and velocity, this module computes a Sherwood
//! number from Reynolds/Schmidt correlations, turns it into a mass-transfer
//! coefficient, and converts that to a limiting current density via
//! Faraday's law. Extrapolating a tabulated limiting current to a different
//! temperature is done by scaling on the ratio of oxygen saturation
//! concentrations at the two temperatures — never a flat "% per °C" rule
//! (spec.md §9: a historical defect in the system this crate replaces).

#![forbid(unsafe_code)]

use crate::chemistry::{nacl_diffusivity_m2_s, oxygen_saturation_mg_l, water_density_kg_m3, water_viscosity_pa_s};
use crate::units::{Temperature, F};

/// Reynolds number below which pipe flow is treated as laminar.
const RE_LAMINAR_MAX: f64 = 2_300.0;
/// Reynolds number above which pipe/plate flow is treated as fully turbulent.
/// Below this, the transitional regime uses the laminar correlation
/// directly — the turbulent correlation is not validated there and must not
/// be extrapolated into it (spec.md §4.6).
const RE_TURBULENT_MIN: f64 = 10_000.0;
/// Graetz number above which pipe laminar flow is treated as fully
/// developed (`Sh = 3.66`) rather than entrance-region (`Sh =
/// 1.86·Gz^(1/3)`).
const GZ_ENTRANCE_MAX: f64 = 2_000.0;

#[derive(Debug, thiserror::Error)]
pub enum MassTransferError {
    #[error("velocity must be positive, got {0} m/s")]
    NonPositiveVelocity(f64),
    #[error("characteristic length must be positive, got {0} m")]
    NonPositiveLength(f64),
    #[error("pipe length must be positive, got {0} m")]
    NonPositivePipeLength(f64),
    #[error("dissolved oxygen concentration must be non-negative, got {0} mg/L")]
    NegativeDissolvedOxygen(f64),
}

/// Flow geometry a limiting-current calculation is evaluated against.
#[derive(Debug, Clone, Copy)]
pub enum Geometry {
    /// Internal flow through a circular pipe of the given internal diameter
    /// and length (the length feeds the Graetz number for laminar entrance
    /// effects — spec.md §4.6).
    Pipe { diameter_m: f64, length_m: f64 },
    /// External flow over a flat plate of the given length in the flow direction.
    FlatPlate { length_m: f64 },
}

impl Geometry {
    fn characteristic_length_m(self) -> f64 {
        match self {
            Geometry::Pipe { diameter_m, .. } => diameter_m,
            Geometry::FlatPlate { length_m } => length_m,
        }
    }
}

fn kinematic_viscosity_m2_s(t: Temperature) -> f64 {
    water_viscosity_pa_s(t) / water_density_kg_m3(t)
}

/// Reynolds number `Re = u·L/ν`.
pub fn reynolds_number(velocity_m_s: f64, geometry: Geometry, t: Temperature) -> f64 {
    velocity_m_s * geometry.characteristic_length_m() / kinematic_viscosity_m2_s(t)
}

/// Schmidt number `Sc = ν/D`, for the dissolved species' diffusivity `d_m2_s`.
pub fn schmidt_number(t: Temperature, d_m2_s: f64) -> f64 {
    kinematic_viscosity_m2_s(t) / d_m2_s
}

/// Sherwood number for the given geometry, Reynolds, and Schmidt numbers.
///
/// Pipe flow: below `RE_TURBULENT_MIN` (laminar and the transitional
/// 2300–10000 band alike — spec.md §4.6 pins the transitional regime to the
/// laminar correlation rather than blending toward turbulent), the Graetz
/// number `Gz = (d/L)·Re·Sc` selects entrance-region (`Sh = 1.86·Gz^(1/3)`,
/// `Gz ≤ 2000`) or fully-developed (`Sh = 3.66`) laminar mass transfer.
/// At or above `RE_TURBULENT_MIN`, the Linton–Sherwood correlation
/// `Sh = 0.023·Re^0.8·Sc^(1/3)` applies.
///
/// Flat plate: below `RE_TURBULENT_MIN` uses `Sh = 0.664·Re^0.5·Sc^(1/3)`;
/// at or above it, `Sh = 0.037·Re^0.8·Sc^(1/3)`.
pub fn sherwood_number(geometry: Geometry, re: f64, sc: f64) -> f64 {
    match geometry {
        Geometry::Pipe { diameter_m, length_m } => {
            if re >= RE_TURBULENT_MIN {
                0.023 * re.powf(0.8) * sc.powf(1.0 / 3.0)
            } else {
                let gz = (diameter_m / length_m) * re * sc;
                if gz <= GZ_ENTRANCE_MAX {
                    1.86 * gz.powf(1.0 / 3.0)
                } else {
                    3.66
                }
            }
        }
        Geometry::FlatPlate { .. } => {
            if re >= RE_TURBULENT_MIN {
                0.037 * re.powf(0.8) * sc.powf(1.0 / 3.0)
            } else {
                0.664 * re.sqrt() * sc.powf(1.0 / 3.0)
            }
        }
    }
}

/// Diffusion-limited current density (A/cm²) for oxygen reduction (`z = 4`)
/// at the given geometry, flow velocity, temperature, salinity, and bulk
/// dissolved-oxygen concentration.
///
/// `k_m = Sh·D/L`; `i_lim = z·F·k_m·C_bulk` (Faraday's law applied to the
/// mass-transfer-limited flux).
pub fn limiting_current_density_a_cm2(
    geometry: Geometry,
    velocity_m_s: f64,
    t: Temperature,
    do_mg_l: f64,
) -> Result<f64, MassTransferError> {
    if velocity_m_s <= 0.0 {
        return Err(MassTransferError::NonPositiveVelocity(velocity_m_s));
    }
    if geometry.characteristic_length_m() <= 0.0 {
        return Err(MassTransferError::NonPositiveLength(geometry.characteristic_length_m()));
    }
    if let Geometry::Pipe { length_m, .. } = geometry {
        if length_m <= 0.0 {
            return Err(MassTransferError::NonPositivePipeLength(length_m));
        }
    }
    if do_mg_l < 0.0 {
        return Err(MassTransferError::NegativeDissolvedOxygen(do_mg_l));
    }

    const O2_DIFFUSIVITY_M2_S_25C: f64 = 2.1e-9;
    // Scale O2 diffusivity with temperature using the same Stokes-Einstein
    // viscosity ratio as the NaCl correlation, since both are governed by
    // the same solvent viscosity change.
    let d_ref = nacl_diffusivity_m2_s(Temperature::celsius(25.0));
    let d_t = nacl_diffusivity_m2_s(t);
    let diffusivity = O2_DIFFUSIVITY_M2_S_25C * (d_t / d_ref);

    let re = reynolds_number(velocity_m_s, geometry, t);
    let sc = schmidt_number(t, diffusivity);
    let sh = sherwood_number(geometry, re, sc);
    let k_m_m_s = sh * diffusivity / geometry.characteristic_length_m();

    const O2_MOLAR_MASS_G_MOL: f64 = 31.998;
    let c_bulk_mol_m3 = (do_mg_l / 1000.0) / O2_MOLAR_MASS_G_MOL * 1000.0;
    let z = 4.0;
    let i_lim_a_m2 = z * F * k_m_m_s * c_bulk_mol_m3;
    Ok(i_lim_a_m2 / 1.0e4) // A/m^2 -> A/cm^2
}

/// Extrapolate a tabulated limiting current density to a different
/// temperature by the ratio of oxygen-saturation concentrations at the two
/// temperatures, holding salinity fixed. This replaces a flat "x% per °C"
/// rule with a physically grounded scaling (spec.md §9).
pub fn extrapolate_limiting_current_by_saturation_ratio(
    tabulated_i_lim_ma_cm2: f64,
    tabulated_t: Temperature,
    target_t: Temperature,
    salinity_psu: f64,
) -> f64 {
    let c_tabulated = oxygen_saturation_mg_l(tabulated_t, salinity_psu).max(1e-9);
    let c_target = oxygen_saturation_mg_l(target_t, salinity_psu);
    tabulated_i_lim_ma_cm2 * (c_target / c_tabulated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turbulent_pipe_flow_has_higher_sherwood_than_laminar() {
        let t = Temperature::celsius(25.0);
        let pipe = Geometry::Pipe { diameter_m: 0.05, length_m: 2.0 };
        let laminar = limiting_current_density_a_cm2(pipe, 0.02, t, 7.0).unwrap();
        let turbulent = limiting_current_density_a_cm2(pipe, 3.0, t, 7.0).unwrap();
        assert!(turbulent > laminar);
    }

    #[test]
    fn transitional_band_never_invokes_the_turbulent_correlation() {
        let t = Temperature::celsius(25.0);
        let pipe = Geometry::Pipe { diameter_m: 0.05, length_m: 2.0 };
        let nu = kinematic_viscosity_m2_s(t);
        // velocity chosen so Re sits inside (RE_LAMINAR_MAX, RE_TURBULENT_MIN).
        let velocity_m_s = 5_000.0 * nu / 0.05;
        let re = reynolds_number(velocity_m_s, pipe, t);
        assert!(re > RE_LAMINAR_MAX && re < RE_TURBULENT_MIN);
        let sc = schmidt_number(t, 2.1e-9);
        let sh_transitional = sherwood_number(pipe, re, sc);
        let sh_at_laminar_edge = sherwood_number(pipe, RE_LAMINAR_MAX, sc);
        // still governed by the Graetz/laminar branch, not a jump toward the
        // turbulent correlation's much steeper Re^0.8 growth.
        assert!(sh_transitional < sh_at_laminar_edge * 2.0);
    }

    #[test]
    fn rejects_non_positive_velocity() {
        let t = Temperature::celsius(25.0);
        let pipe = Geometry::Pipe { diameter_m: 0.05, length_m: 2.0 };
        let err = limiting_current_density_a_cm2(pipe, 0.0, t, 7.0).unwrap_err();
        matches!(err, MassTransferError::NonPositiveVelocity(_));
    }

    #[test]
    fn rejects_non_positive_pipe_length() {
        let t = Temperature::celsius(25.0);
        let pipe = Geometry::Pipe { diameter_m: 0.05, length_m: 0.0 };
        let err = limiting_current_density_a_cm2(pipe, 1.0, t, 7.0).unwrap_err();
        matches!(err, MassTransferError::NonPositivePipeLength(_));
    }

    #[test]
    fn saturation_ratio_extrapolation_decreases_with_temperature() {
        let tabulated_t = Temperature::celsius(25.0);
        let warmer = Temperature::celsius(40.0);
        let scaled = extrapolate_limiting_current_by_saturation_ratio(0.25, tabulated_t, warmer, 35.0);
        assert!(scaled < 0.25);
    }
}
