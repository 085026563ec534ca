//! Crate-wide error taxonomy.
//!
//! Each subsystem defines its own `thiserror` enum local to that module
//! (`catalog::CatalogError`, `response_surface::ResponseSurfaceError`,
//! `kinetics::KineticsError`, `galvanic::GalvanicError`,
//! `pitting::PittingError`, `mass_transfer::MassTransferError`,
//! `norsok::NorsokError`). [`CoreError`] unifies them behind `#[from]` at
//! the tool-dispatch boundary, following the teacher's
//! `VerifySchedError { #[from] PcsVerifyError }` composition.
//!
//! Policy (spec.md §7):
//! - `InputValidation` / `OutOfValidatedRegion` / `SolverNonConvergence` /
//!   `CatalogLoad` all fail the call — numerical layers never swallow them.
//! - `Tier2Unavailable` is carried as *data*, not an error: assessing
//!   pitting always returns `Ok`, with Tier-2 fields replaced by a
//!   self-describing explanation. See `pitting::Tier2Status`.

#![forbid(unsafe_code)]

use crate::catalog::CatalogError;
use crate::galvanic::GalvanicError;
use crate::kinetics::KineticsError;
use crate::mass_transfer::MassTransferError;
use crate::norsok::NorsokError;
use crate::pitting::PittingError;
use crate::pourbaix::PourbaixError;
use crate::redox::RedoxError;
use crate::response_surface::ResponseSurfaceError;

/// Validation failure for a caller-supplied input.
#[derive(Debug, thiserror::Error)]
pub enum InputValidationError {
    /// A material id could not be resolved through the alias map.
    #[error("unknown material id '{0}' (after alias resolution)")]
    UnknownMaterial(String),
    /// A numeric input lies outside the physically sane range for the field.
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
    /// A material does not support the requested reaction / tier.
    #[error("material '{material}' does not support {capability}")]
    UnsupportedCapability { material: String, capability: &'static str },
}

/// Unified error surface returned by tool-dispatch (`tools` module).
///
/// Each originating component is named in the `Display` output so a single
/// error field (per spec.md §7) is enough to locate the failure, e.g.
/// `"OutOfValidatedRegion at response_surface for HY80/ORR at Cl=0.54 M, T=25 °C, pH=8"`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller input failed validation before reaching any numerical code.
    #[error("InputValidation: {0}")]
    InputValidation(#[from] InputValidationError),
    /// Catalog failed to construct at startup; the process must not serve requests.
    #[error("CatalogLoad: {0}")]
    CatalogLoad(#[from] CatalogError),
    /// The response-surface polynomial produced a non-physical ΔG, or an
    /// input lies outside its fitted window.
    #[error("OutOfValidatedRegion at response_surface: {0}")]
    ResponseSurface(#[from] ResponseSurfaceError),
    /// Butler–Volmer evaluation or the film-resistance Newton solve failed.
    #[error("SolverNonConvergence at kinetics: {0}")]
    Kinetics(#[from] KineticsError),
    /// The galvanic mixed-potential solver failed to bracket a root, or
    /// inputs were invalid for the couple requested.
    #[error("at galvanic: {0}")]
    Galvanic(#[from] GalvanicError),
    /// Tier-1 pitting assessment itself failed (Tier-2 degrades gracefully
    /// instead of erroring — see `pitting::Tier2Status`).
    #[error("at pitting: {0}")]
    Pitting(#[from] PittingError),
    /// Mass-transfer correlation inputs were invalid (e.g. non-positive
    /// velocity or geometry).
    #[error("at mass_transfer: {0}")]
    MassTransfer(#[from] MassTransferError),
    /// NORSOK M-506 wrapper rejected its inputs or a pH lay outside the
    /// correction table's validated window.
    #[error("at norsok: {0}")]
    Norsok(#[from] NorsokError),
    /// A Pourbaix diagram query used a pH outside [0, 14].
    #[error("at pourbaix: {0}")]
    Pourbaix(#[from] PourbaixError),
    /// Material id could not be resolved, or its composition/reactions were
    /// incomplete for the requested operation.
    #[error("at material: {0}")]
    Material(#[from] crate::material::MaterialError),
    /// A dissolved-oxygen/Eh conversion received an invalid DO or pH.
    #[error("at redox: {0}")]
    Redox(#[from] RedoxError),
}
