//! Provenance and warnings carried on every tool-level result (spec.md §6.1,
//! §7 "Warnings").

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Coarse confidence band attached to a result, derived from how much of the
/// computation rested on tabulated data versus an engineering estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceBand {
    /// Backed directly by a tabulated, cited value.
    High,
    /// Backed by a fitted correlation within its validated range.
    Medium,
    /// An engineering estimate used because tabulated data was unavailable
    /// (e.g. PREN-based CPT fallback, DO-saturation extrapolation).
    Low,
}

/// A non-fatal condition worth surfacing to the caller (spec.md §7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub code: &'static str,
    pub message: String,
}

impl Warning {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

/// Provenance metadata every tool-level result carries (spec.md §6.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    pub model: &'static str,
    pub version: &'static str,
    pub confidence: ConfidenceBand,
    pub citations: Vec<String>,
    pub assumptions: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl Provenance {
    pub fn new(model: &'static str, confidence: ConfidenceBand) -> Self {
        Self {
            model,
            version: env!("CARGO_PKG_VERSION"),
            confidence,
            citations: Vec::new(),
            assumptions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citations.push(citation.into());
        self
    }

    pub fn with_assumption(mut self, assumption: impl Into<String>) -> Self {
        self.assumptions.push(assumption.into());
        self
    }

    /// Attach a warning and log it via `tracing` so it is visible even to
    /// callers that ignore the structured field (SPEC_FULL.md §4.11).
    pub fn with_warning(mut self, warning: Warning) -> Self {
        tracing::warn!(code = warning.code, message = %warning.message, "result warning");
        self.warnings.push(warning);
        self
    }
}
