//! Butler–Volmer electrode kinetics (spec.md §4.4, §4.5).
//!
//! A cathodic and an anodic reaction are each reduced to a small struct of
//! Tafel parameters plus an optional mass-transfer or film-resistance term.
//! [`Electrode::current_density`] is the one entry point the galvanic and
//! pitting solvers call; everything else in this module is in service of
//! evaluating it.
//!
//! Sign convention: cathodic current densities are returned negative,
//! anodic positive, matching the teacher's convention of signing quantities
//! by direction rather than carrying a separate `is_cathodic` flag through
//! downstream arithmetic.

#![forbid(unsafe_code)]

use crate::units::{Potential, Temperature, F, R};

/// Current densities below this magnitude (A/cm²) are treated as
/// numerically zero rather than propagated as an ever-shrinking float
/// (spec.md §4.5 "numerical floor").
pub const CURRENT_DENSITY_FLOOR_A_CM2: f64 = 1e-50;

/// Maximum Newton iterations for the passivation film-resistance solve.
pub const MAX_NEWTON_ITERATIONS: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum KineticsError {
    #[error("exchange current density must be positive, got {0} A/cm^2")]
    NonPositiveExchangeCurrent(f64),
    #[error("Newton iteration for film-limited current did not converge within {0} steps")]
    NewtonDidNotConverge(usize),
    #[error("transfer coefficient {0} outside the physically meaningful range (0, 1]")]
    InvalidTransferCoefficient(f64),
}

/// A cathodic half-reaction (spec.md §4.4): oxygen reduction or hydrogen
/// evolution, each optionally diffusion-limited.
#[derive(Debug, Clone, Copy)]
pub struct CathodicReaction {
    pub e_rev: Potential,
    /// Exchange current density, A/cm².
    pub i0_a_cm2: f64,
    /// Cathodic transfer coefficient, dimensionless, in (0, 1].
    pub alpha: f64,
    /// Electrons transferred.
    pub z: u8,
    /// Diffusion-limited current density magnitude, A/cm², if mass transfer
    /// can limit this reaction (ORR in aerated solutions; `None` for HER,
    /// which this crate treats as activation-controlled only).
    pub i_lim_a_cm2: Option<f64>,
}

impl CathodicReaction {
    /// Pure activation-controlled (Tafel) current density at potential `e`,
    /// always negative.
    fn tafel_current_a_cm2(&self, e: Potential, t: Temperature) -> f64 {
        let eta = e.to_she().volts() - self.e_rev.to_she().volts();
        let exponent = -self.alpha * f64::from(self.z) * F * eta / (R * t.as_kelvin());
        -self.i0_a_cm2 * exponent.exp()
    }

    /// Current density combining activation and mass-transfer control via
    /// the Koutecky–Levich relation `1/i = 1/i_k + 1/i_lim` (spec.md §4.6).
    /// When no diffusion limit is set, returns the pure Tafel value.
    pub fn current_density_a_cm2(&self, e: Potential, t: Temperature) -> Result<f64, KineticsError> {
        if self.i0_a_cm2 <= 0.0 {
            return Err(KineticsError::NonPositiveExchangeCurrent(self.i0_a_cm2));
        }
        if !(0.0..=1.0).contains(&self.alpha) || self.alpha == 0.0 {
            return Err(KineticsError::InvalidTransferCoefficient(self.alpha));
        }
        let i_k = self.tafel_current_a_cm2(e, t);
        let Some(i_lim) = self.i_lim_a_cm2 else {
            return Ok(floor_current(i_k));
        };
        let i_lim = -i_lim.abs(); // cathodic limiting current is negative by this convention
        if i_k.abs() < 1e-300 {
            return Ok(floor_current(i_k));
        }
        let combined = 1.0 / (1.0 / i_k + 1.0 / i_lim);
        Ok(floor_current(combined))
    }
}

/// An anodic half-reaction (spec.md §4.5): bare-metal oxidation or
/// passive-film-limited dissolution.
#[derive(Debug, Clone, Copy)]
pub struct AnodicReaction {
    pub e_rev: Potential,
    pub i0_a_cm2: f64,
    /// Anodic transfer coefficient, dimensionless, in (0, 1].
    pub beta: f64,
    pub z: u8,
    /// Passive-film resistance, Ω·cm², if this reaction is film-limited
    /// (spec.md §4.5: passivation requires solving `i` self-consistently
    /// against the IR drop it itself creates across the film).
    pub film_resistance_ohm_cm2: Option<f64>,
}

impl AnodicReaction {
    fn tafel_current_a_cm2(&self, e_effective: f64, t: Temperature) -> f64 {
        let eta = e_effective - self.e_rev.to_she().volts();
        let exponent = self.beta * f64::from(self.z) * F * eta / (R * t.as_kelvin());
        self.i0_a_cm2 * exponent.exp()
    }

    /// Current density at potential `e`. Bare-metal oxidation is a direct
    /// Tafel evaluation; a film-limited reaction solves
    /// `i = i0·exp(β z F (E - E_rev - i·R_film) / RT)` for `i` by Newton
    /// iteration, bounded at [`MAX_NEWTON_ITERATIONS`] steps.
    pub fn current_density_a_cm2(&self, e: Potential, t: Temperature) -> Result<f64, KineticsError> {
        if self.i0_a_cm2 <= 0.0 {
            return Err(KineticsError::NonPositiveExchangeCurrent(self.i0_a_cm2));
        }
        if !(0.0..=1.0).contains(&self.beta) || self.beta == 0.0 {
            return Err(KineticsError::InvalidTransferCoefficient(self.beta));
        }
        let e_she = e.to_she().volts();
        let Some(r_film) = self.film_resistance_ohm_cm2 else {
            return Ok(floor_current(self.tafel_current_a_cm2(e_she, t)));
        };

        // Newton iteration on f(i) = i - i0*exp(beta z F (E - Erev - i*Rfilm)/RT).
        let mut i = self.tafel_current_a_cm2(e_she, t).clamp(-1.0, 1.0);
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let e_eff = e_she - i * r_film;
            let f_i = i - self.tafel_current_a_cm2(e_eff, t);
            let coeff = self.beta * f64::from(self.z) * F / (R * t.as_kelvin());
            let df_di = 1.0 + self.tafel_current_a_cm2(e_eff, t) * coeff * r_film;
            if df_di.abs() < 1e-300 {
                break;
            }
            let step = f_i / df_di;
            let next = i - step;
            if (next - i).abs() < 1e-15 * next.abs().max(1.0) {
                return Ok(floor_current(next));
            }
            i = next;
        }
        Err(KineticsError::NewtonDidNotConverge(MAX_NEWTON_ITERATIONS))
    }
}

fn floor_current(i: f64) -> f64 {
    if i.abs() < CURRENT_DENSITY_FLOOR_A_CM2 {
        0.0
    } else {
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Reference;

    fn orr() -> CathodicReaction {
        CathodicReaction {
            e_rev: Potential::new(0.805, Reference::She),
            i0_a_cm2: 1e-9,
            alpha: 0.5,
            z: 4,
            i_lim_a_cm2: Some(2.5e-4),
        }
    }

    fn bare_metal() -> AnodicReaction {
        AnodicReaction {
            e_rev: Potential::new(-0.45, Reference::She),
            i0_a_cm2: 1e-7,
            beta: 0.5,
            z: 2,
            film_resistance_ohm_cm2: None,
        }
    }

    fn passivating() -> AnodicReaction {
        AnodicReaction {
            e_rev: Potential::new(-0.1, Reference::She),
            i0_a_cm2: 1e-8,
            beta: 0.5,
            z: 2,
            film_resistance_ohm_cm2: Some(5_000.0),
        }
    }

    #[test]
    fn cathodic_current_is_negative() {
        let r = orr();
        let i = r.current_density_a_cm2(Potential::she(-0.3), Temperature::celsius(25.0)).unwrap();
        assert!(i < 0.0);
    }

    #[test]
    fn cathodic_current_saturates_near_diffusion_limit_at_very_negative_potential() {
        let r = orr();
        let i = r.current_density_a_cm2(Potential::she(-0.9), Temperature::celsius(25.0)).unwrap();
        assert!(i.abs() <= r.i_lim_a_cm2.unwrap() * 1.0001);
    }

    #[test]
    fn anodic_current_is_positive_and_increases_with_potential() {
        let r = bare_metal();
        let low = r.current_density_a_cm2(Potential::she(-0.4), Temperature::celsius(25.0)).unwrap();
        let high = r.current_density_a_cm2(Potential::she(-0.2), Temperature::celsius(25.0)).unwrap();
        assert!(low > 0.0 && high > low);
    }

    #[test]
    fn passivation_newton_solve_converges_and_is_self_consistent() {
        let r = passivating();
        let t = Temperature::celsius(25.0);
        let e = Potential::she(0.2);
        let i = r.current_density_a_cm2(e, t).unwrap();
        // residual check: the self-consistent i must satisfy the implicit equation.
        let e_eff = e.to_she().volts() - i * r.film_resistance_ohm_cm2.unwrap();
        let eta = e_eff - r.e_rev.to_she().volts();
        let expected = r.i0_a_cm2 * (r.beta * f64::from(r.z) * F * eta / (R * t.as_kelvin())).exp();
        assert!((i - expected).abs() / expected.max(1e-30) < 1e-6);
    }

    #[test]
    fn rejects_non_positive_exchange_current() {
        let mut r = orr();
        r.i0_a_cm2 = 0.0;
        let err = r.current_density_a_cm2(Potential::she(0.0), Temperature::celsius(25.0)).unwrap_err();
        matches!(err, KineticsError::NonPositiveExchangeCurrent(_));
    }
}
