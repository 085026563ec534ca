//! Physical constants, reference electrodes, and unit-tagged scalars.
//!
//! ## Invariants
//!
//! - Every temperature carried across module boundaries is a [`Temperature`],
//!   never a bare `f64` — this is the only way to make the Celsius/Kelvin bug
//!   documented in `spec.md` §4.3 structurally impossible.
//! - Every potential carried across module boundaries is a [`Potential`],
//!   tagged with the [`Reference`] electrode it was measured against.
//!   Crossing a reference boundary without going through [`Potential::to`]
//!   is a type error, not a runtime one.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Faraday constant, C/mol.
pub const F: f64 = 96_485.0;

/// Universal gas constant, J/mol/K.
pub const R: f64 = 8.314;

/// 0 °C in Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// E(SCE) vs SHE, volts. ASTM G82 reference.
pub const E_SCE_VS_SHE: f64 = 0.241;

/// E(Ag/AgCl, saturated KCl) vs SHE, volts.
pub const E_AGAGCL_VS_SHE: f64 = 0.197;

/// Seconds per year (365.25-day Julian year), used by Faraday rate conversion.
pub const SECONDS_PER_YEAR: f64 = 3.1536e7;

/// A reference electrode a [`Potential`] is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    /// Standard hydrogen electrode — the crate's internal canonical frame.
    She,
    /// Saturated calomel electrode (ASTM G82 I/O convention).
    Sce,
    /// Silver/silver-chloride, saturated KCl.
    AgAgCl,
}

impl Reference {
    /// Fixed offset of this reference vs SHE, in volts (`E_this = E_she - offset`).
    fn offset_vs_she(self) -> f64 {
        match self {
            Reference::She => 0.0,
            Reference::Sce => E_SCE_VS_SHE,
            Reference::AgAgCl => E_AGAGCL_VS_SHE,
        }
    }
}

/// An electrochemical potential tagged with its reference electrode.
///
/// Conversion between references is a linear shift; it is only reachable
/// through [`Potential::to`], so a conversion point is always explicit and
/// (when warranted) can be logged as a [`crate::provenance::Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Potential {
    volts: f64,
    reference: Reference,
}

impl Potential {
    /// Construct a potential in the given reference frame.
    pub fn new(volts: f64, reference: Reference) -> Self {
        Self { volts, reference }
    }

    /// Construct a potential already in the SHE frame.
    pub fn she(volts: f64) -> Self {
        Self::new(volts, Reference::She)
    }

    /// Numeric value in this potential's own reference frame.
    pub fn volts(self) -> f64 {
        self.volts
    }

    /// The reference electrode this potential is tagged with.
    pub fn reference(self) -> Reference {
        self.reference
    }

    /// Convert to the SHE frame.
    pub fn to_she(self) -> Potential {
        self.to(Reference::She)
    }

    /// Convert to an arbitrary reference frame.
    ///
    /// `E(target) = E(she) - offset(target)`, where `E(she) = E(self) +
    /// offset(self)`.
    pub fn to(self, target: Reference) -> Potential {
        if self.reference == target {
            return self;
        }
        let she = self.volts + self.reference.offset_vs_she();
        let out = she - target.offset_vs_she();
        Potential { volts: out, reference: target }
    }
}

impl fmt::Display for Potential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.reference {
            Reference::She => "V(SHE)",
            Reference::Sce => "V(SCE)",
            Reference::AgAgCl => "V(Ag/AgCl)",
        };
        write!(f, "{:.4} {}", self.volts, label)
    }
}

/// A temperature tagged with its unit, convertible only through explicit methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    is_kelvin: bool,
}

impl Temperature {
    /// Construct from a Celsius value.
    pub const fn celsius(c: f64) -> Self {
        Self { value: c, is_kelvin: false }
    }

    /// Construct from a Kelvin value.
    pub const fn kelvin(k: f64) -> Self {
        Self { value: k, is_kelvin: true }
    }

    /// Value in Celsius.
    pub fn as_celsius(self) -> f64 {
        if self.is_kelvin {
            self.value - KELVIN_OFFSET
        } else {
            self.value
        }
    }

    /// Value in Kelvin. This is the **only** place a Celsius value becomes
    /// Kelvin; the response-surface polynomial (spec.md §4.3) must call
    /// this explicitly rather than consuming a bare `f64`.
    pub fn as_kelvin(self) -> f64 {
        if self.is_kelvin {
            self.value
        } else {
            self.value + KELVIN_OFFSET
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn she_sce_round_trip_is_identity_within_a_microvolt() {
        let original = Potential::she(0.123_456);
        let round_tripped = original.to(Reference::Sce).to(Reference::She);
        assert!((round_tripped.volts() - original.volts()).abs() < 1e-6);
    }

    #[test]
    fn sce_offset_matches_astm_g82() {
        let she = Potential::she(0.0);
        let sce = she.to(Reference::Sce);
        assert!((sce.volts() - (-E_SCE_VS_SHE)).abs() < 1e-9);
    }

    #[test]
    fn temperature_kelvin_conversion() {
        let t = Temperature::celsius(25.0);
        assert!((t.as_kelvin() - 298.15).abs() < 1e-9);
        let t2 = Temperature::kelvin(298.15);
        assert!((t2.as_celsius() - 25.0).abs() < 1e-9);
    }
}
