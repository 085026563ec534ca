//! Solution chemistry: dissolved-oxygen solubility, NaCl transport
//! properties, and salinity estimation (spec.md §2, "Solution chemistry").
//!
//! These are auxiliary correlations consumed by [`crate::redox`] and
//! [`crate::mass_transfer`]; none of them touch the catalogs directly.

#![forbid(unsafe_code)]

use crate::units::Temperature;

/// Standard seawater salinity, practical salinity units (PSU).
pub const STANDARD_SEAWATER_SALINITY_PSU: f64 = 35.0;

/// Dynamic viscosity of water, Pa·s, via a Vogel-type correlation.
/// Valid roughly 0–100 °C; used only for Reynolds/Schmidt numbers where
/// engineering accuracy (a few percent) is sufficient.
pub fn water_viscosity_pa_s(t: Temperature) -> f64 {
    let t_c = t.as_celsius();
    // Vogel equation: mu = A * exp(B / (C + T)), T in Celsius.
    const A: f64 = 2.414e-5;
    const B: f64 = 247.8;
    const C: f64 = 133.15;
    A * 10f64.powf(B / (t_c + C))
}

/// Density of liquid water, kg/m³, via a simple quadratic fit (0–100 °C).
pub fn water_density_kg_m3(t: Temperature) -> f64 {
    let t_c = t.as_celsius();
    999.842_59 + 6.793_952e-2 * t_c - 9.095_290e-3 * t_c * t_c
}

/// Dissolved-oxygen saturation concentration in air-equilibrated water,
/// mg/L, via the Garcia & Gordon (1992) combined fit (Benson & Krause
/// coefficients). `salinity_psu` is practical salinity; `t` must lie within
/// the fit's validated range, approximately 0–40 °C.
///
/// Returns `C*` in mg/L (converted from µmol/kg using O₂'s molar mass and
/// the water density at `t`).
pub fn oxygen_saturation_mg_l(t: Temperature, salinity_psu: f64) -> f64 {
    const A0: f64 = 5.808_71;
    const A1: f64 = 3.202_91;
    const A2: f64 = 4.178_87;
    const A3: f64 = 5.100_06;
    const A4: f64 = -9.866_43e-2;
    const A5: f64 = 3.803_69;
    const B0: f64 = -7.015_77e-3;
    const B1: f64 = -7.700_28e-3;
    const B2: f64 = -1.138_64e-2;
    const B3: f64 = -9.515_19e-3;
    const C0: f64 = -2.759_15e-7;

    let t_c = t.as_celsius();
    // Scaled temperature per Garcia & Gordon: Ts = ln((298.15 - t)/(273.15 + t)).
    let ts = ((298.15 - t_c) / (273.15 + t_c)).ln();
    let s = salinity_psu;

    let ln_c_umol_kg = A0
        + A1 * ts
        + A2 * ts.powi(2)
        + A3 * ts.powi(3)
        + A4 * ts.powi(4)
        + A5 * ts.powi(5)
        + s * (B0 + B1 * ts + B2 * ts.powi(2) + B3 * ts.powi(3))
        + C0 * s * s;

    let c_umol_kg = ln_c_umol_kg.exp();
    const O2_MOLAR_MASS_G_MOL: f64 = 31.998;
    let density_kg_l = water_density_kg_m3(t) / 1000.0;
    // umol/kg -> mg/L: (umol/kg * 1e-6 mol/umol * g/mol) * (kg/L via density) * 1000 mg/g
    c_umol_kg * 1e-6 * O2_MOLAR_MASS_G_MOL * density_kg_l * 1000.0
}

/// Estimate practical salinity (PSU) from chloride concentration, via the
/// classical chlorinity relationship `S = 1.80655 · Cl (g/kg)`. This is an
/// engineering approximation (no ionic-strength correction); it assumes a
/// seawater-like major-ion ratio.
pub fn salinity_from_chloride_mg_l(cl_mg_l: f64) -> f64 {
    let cl_g_kg = (cl_mg_l.max(0.0) / 1000.0) / 1.025; // approx kg/L seawater density
    1.806_55 * cl_g_kg
}

/// NaCl diffusivity in water, m²/s, scaled from a 25 °C reference value by
/// the Stokes–Einstein temperature/viscosity ratio. Reference value
/// `1.61e-9 m²/s` is the commonly tabulated infinite-dilution NaCl
/// diffusivity at 25 °C.
pub fn nacl_diffusivity_m2_s(t: Temperature) -> f64 {
    const D_REF: f64 = 1.61e-9;
    const T_REF: Temperature = Temperature::celsius(25.0);
    let mu_ref = water_viscosity_pa_s(T_REF);
    let mu_t = water_viscosity_pa_s(t);
    D_REF * (t.as_kelvin() / T_REF.as_kelvin()) * (mu_ref / mu_t)
}

/// NaCl solution electrical conductivity, S/m, from molar concentration and
/// temperature — a simple engineering correlation (linear in concentration
/// at low-to-moderate molarity, with an Arrhenius-like temperature scaling).
/// Not a substitute for measured conductivity; order-of-magnitude only.
pub fn nacl_conductivity_s_m(molarity: f64, t: Temperature) -> f64 {
    const LAMBDA_25C_S_M2_PER_MOL: f64 = 0.0126; // molar conductivity of NaCl near infinite dilution
    let base = LAMBDA_25C_S_M2_PER_MOL * molarity.max(0.0);
    let t_c = t.as_celsius();
    // +~2%/°C temperature coefficient, typical of aqueous electrolytes.
    base * (1.0 + 0.02 * (t_c - 25.0))
}

/// Water activity of an aqueous NaCl solution at molality `m` (mol/kg),
/// via the simplified van't Hoff form `a_w = exp(-2·φ·M_w·m)` with a
/// constant osmotic coefficient `φ ≈ 0.93` representative of seawater-range
/// concentrations. Documented as an engineering estimate, not a Pitzer fit.
pub fn nacl_water_activity(molality_mol_kg: f64) -> f64 {
    const PHI: f64 = 0.93;
    const M_WATER_KG_MOL: f64 = 0.018_015;
    (-2.0 * PHI * M_WATER_KG_MOL * molality_mol_kg.max(0.0)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oxygen_saturation_decreases_with_temperature() {
        let low_t = oxygen_saturation_mg_l(Temperature::celsius(5.0), STANDARD_SEAWATER_SALINITY_PSU);
        let high_t = oxygen_saturation_mg_l(Temperature::celsius(30.0), STANDARD_SEAWATER_SALINITY_PSU);
        assert!(low_t > high_t, "DO saturation should fall as T rises: {low_t} vs {high_t}");
    }

    #[test]
    fn oxygen_saturation_near_8_mg_l_for_seawater_at_25c() {
        let c = oxygen_saturation_mg_l(Temperature::celsius(25.0), STANDARD_SEAWATER_SALINITY_PSU);
        assert!((c - 8.0).abs() < 2.0, "expected roughly 6-8 mg/L, got {c}");
    }

    #[test]
    fn salinity_from_seawater_chloride_is_about_35_psu() {
        let s = salinity_from_chloride_mg_l(19_000.0);
        assert!((s - 35.0).abs() < 5.0, "expected roughly 35 PSU, got {s}");
    }

    #[test]
    fn nacl_diffusivity_increases_with_temperature() {
        let low = nacl_diffusivity_m2_s(Temperature::celsius(5.0));
        let high = nacl_diffusivity_m2_s(Temperature::celsius(60.0));
        assert!(high > low);
    }
}
