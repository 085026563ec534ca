//! Simplified Pourbaix (E–pH) diagrams (spec.md §4.9).
//!
//! These are textbook-simplified thermodynamic stability diagrams: straight
//! Nernstian boundary lines for water stability plus a small set of fixed
//! boundary constants per metal, calibrated to match commonly published
//! diagrams at 25 °C. They are explicitly **not** a PHREEQC-grade
//! speciation calculation — no activity coefficients, no complexation, no
//! temperature dependence beyond the water lines' own Nernst slope.

#![forbid(unsafe_code)]

/// Nernst slope, V/pH unit, at 25 °C (`2.303·RT/F`).
const NERNST_SLOPE_25C: f64 = 0.0591;

#[derive(Debug, thiserror::Error)]
pub enum PourbaixError {
    #[error("pH {0} is outside the physically meaningful range [0, 14]")]
    PhOutOfRange(f64),
}

/// A metal this module has a simplified diagram for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PourbaixMetal {
    Fe,
    Cr,
    Ni,
    Cu,
    Ti,
    Al,
}

/// Region of an E–pH diagram a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PourbaixRegion {
    /// Below the metal's reduction line: the metal itself is the stable species.
    Immunity,
    /// Above the immunity line but within a pH band where an oxide/hydroxide
    /// film is the stable, protective species.
    Passivation,
    /// Above the immunity line and outside the passivation pH band: a
    /// soluble ionic species is stable and general corrosion is expected.
    Corrosion,
}

/// One straight boundary line of an E–pH diagram, `E = intercept - slope·pH`.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct BoundaryLine {
    pub label: &'static str,
    pub intercept_v_she: f64,
    pub slope_v_per_ph: f64,
}

impl BoundaryLine {
    pub fn e_at_ph(&self, ph: f64) -> f64 {
        self.intercept_v_she - self.slope_v_per_ph * ph
    }
}

fn check_ph(ph: f64) -> Result<(), PourbaixError> {
    if !(0.0..=14.0).contains(&ph) {
        return Err(PourbaixError::PhOutOfRange(ph));
    }
    Ok(())
}

/// The water-oxidation line (O₂/H₂O), above which water itself oxidizes.
pub fn water_oxygen_line() -> BoundaryLine {
    BoundaryLine { label: "O2/H2O", intercept_v_she: 1.229, slope_v_per_ph: NERNST_SLOPE_25C }
}

/// The water-reduction line (H₂O/H₂), below which water itself reduces.
pub fn water_hydrogen_line() -> BoundaryLine {
    BoundaryLine { label: "H2O/H2", intercept_v_she: 0.0, slope_v_per_ph: NERNST_SLOPE_25C }
}

/// Simplified immunity boundary and passivation pH band for each supported
/// metal, calibrated against commonly published diagrams at 25 °C.
struct MetalDiagram {
    immunity_line: BoundaryLine,
    passivation_ph_min: f64,
    passivation_ph_max: f64,
}

fn diagram_for(metal: PourbaixMetal) -> MetalDiagram {
    match metal {
        PourbaixMetal::Fe => MetalDiagram {
            immunity_line: BoundaryLine { label: "Fe/Fe2+", intercept_v_she: -0.44, slope_v_per_ph: 0.0591 },
            passivation_ph_min: 9.0,
            passivation_ph_max: 13.0,
        },
        PourbaixMetal::Cr => MetalDiagram {
            immunity_line: BoundaryLine { label: "Cr/Cr2+", intercept_v_she: -0.91, slope_v_per_ph: 0.0591 },
            passivation_ph_min: 4.0,
            passivation_ph_max: 13.0,
        },
        PourbaixMetal::Ni => MetalDiagram {
            immunity_line: BoundaryLine { label: "Ni/Ni2+", intercept_v_she: -0.25, slope_v_per_ph: 0.0591 },
            passivation_ph_min: 8.0,
            passivation_ph_max: 12.0,
        },
        PourbaixMetal::Cu => MetalDiagram {
            immunity_line: BoundaryLine { label: "Cu/Cu2+", intercept_v_she: 0.34, slope_v_per_ph: 0.0296 },
            passivation_ph_min: 6.5,
            passivation_ph_max: 11.5,
        },
        PourbaixMetal::Ti => MetalDiagram {
            immunity_line: BoundaryLine { label: "Ti/Ti2+", intercept_v_she: -1.63, slope_v_per_ph: 0.0591 },
            passivation_ph_min: 2.0,
            passivation_ph_max: 13.0,
        },
        PourbaixMetal::Al => MetalDiagram {
            immunity_line: BoundaryLine { label: "Al/Al3+", intercept_v_she: -1.66, slope_v_per_ph: 0.0591 },
            passivation_ph_min: 4.0,
            passivation_ph_max: 8.5,
        },
    }
}

/// Every boundary line for `metal`'s diagram: the two water lines plus the
/// metal's own immunity line, for plotting.
pub fn generate_diagram(metal: PourbaixMetal) -> Vec<BoundaryLine> {
    let d = diagram_for(metal);
    vec![water_oxygen_line(), water_hydrogen_line(), d.immunity_line]
}

/// Classify an `(E, pH)` point into immunity, passivation, or corrosion for
/// `metal`'s simplified diagram.
pub fn classify_point(metal: PourbaixMetal, e_v_she: f64, ph: f64) -> Result<PourbaixRegion, PourbaixError> {
    check_ph(ph)?;
    let d = diagram_for(metal);
    if e_v_she <= d.immunity_line.e_at_ph(ph) {
        return Ok(PourbaixRegion::Immunity);
    }
    if ph >= d.passivation_ph_min && ph <= d.passivation_ph_max {
        Ok(PourbaixRegion::Passivation)
    } else {
        Ok(PourbaixRegion::Corrosion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn very_negative_potential_is_immune_for_iron() {
        let region = classify_point(PourbaixMetal::Fe, -1.0, 7.0).unwrap();
        assert_eq!(region, PourbaixRegion::Immunity);
    }

    #[test]
    fn neutral_ph_moderate_potential_is_passive_for_iron() {
        let region = classify_point(PourbaixMetal::Fe, 0.2, 10.0).unwrap();
        assert_eq!(region, PourbaixRegion::Passivation);
    }

    #[test]
    fn acidic_ph_moderate_potential_is_corrosion_for_iron() {
        let region = classify_point(PourbaixMetal::Fe, 0.2, 2.0).unwrap();
        assert_eq!(region, PourbaixRegion::Corrosion);
    }

    #[test]
    fn rejects_ph_out_of_range() {
        let err = classify_point(PourbaixMetal::Fe, 0.0, 15.0).unwrap_err();
        matches!(err, PourbaixError::PhOutOfRange(_));
    }
}
