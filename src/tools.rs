//! Tool-dispatch layer: one typed request/response pair per named operation
//! in spec.md §6.1, each assembling a [`Provenance`] record and mapping
//! every numerical-layer error into [`CoreError`] (spec.md §7).
//!
//! This is the only module the server binary (or any other front end)
//! needs to call into; nothing downstream of here speaks JSON.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::error::{CoreError, InputValidationError};
use crate::galvanic::{self, GalvanicResult};
use crate::material::{self, build_material, FlowConditions, MaterialError};
use crate::mass_transfer::{self, Geometry};
use crate::norsok::{self, NorsokInputs, NorsokResult};
use crate::pitting::{self, PittingAssessment};
use crate::pourbaix::{self, PourbaixMetal, PourbaixRegion};
use crate::provenance::{ConfidenceBand, Provenance, Warning};
use crate::redox;
use crate::units::{Potential, Reference, Temperature};

fn validate_ph(ph: f64) -> Result<(), CoreError> {
    if !(0.0..=14.0).contains(&ph) {
        return Err(InputValidationError::OutOfRange { field: "ph", value: ph, min: 0.0, max: 14.0 }.into());
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value < 0.0 {
        return Err(InputValidationError::OutOfRange { field, value, min: 0.0, max: f64::INFINITY }.into());
    }
    Ok(())
}

// ---------------------------------------------------------------------
// get_material_properties
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GetMaterialPropertiesRequest {
    pub material_id: String,
}

#[derive(Debug, Serialize)]
pub struct GetMaterialPropertiesResponse {
    pub resolved_id: String,
    pub uns: String,
    pub pren: f64,
    pub density_kg_m3: f64,
    pub available_reactions: Vec<String>,
    pub provenance: Provenance,
}

pub fn get_material_properties(
    catalogs: &Catalogs,
    req: GetMaterialPropertiesRequest,
) -> Result<GetMaterialPropertiesResponse, CoreError> {
    // Tier-1-only operations accept any alloy the composition catalog knows
    // about, not only the six canonical NRL alloys (spec.md §4.5).
    let (id, composition) = material::lookup_composition(catalogs, &req.material_id)
        .ok_or_else(|| InputValidationError::UnknownMaterial(req.material_id.clone()))?;

    let mut provenance = Provenance::new("get_material_properties", ConfidenceBand::High)
        .with_citation(composition.source.clone());

    let reactions: Vec<String> = catalogs.reactions_for(&id).iter().map(|r| format!("{r:?}")).collect();
    if reactions.is_empty() {
        provenance = provenance.with_warning(Warning::new(
            "no_response_surface_data",
            format!("no response-surface coefficients found for '{id}'"),
        ));
    }

    Ok(GetMaterialPropertiesResponse {
        resolved_id: id,
        uns: composition.uns.clone(),
        pren: composition.pren(),
        density_kg_m3: composition.density_kg_m3,
        available_reactions: reactions,
        provenance,
    })
}

// ---------------------------------------------------------------------
// calculate_pren
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CalculatePrenRequest {
    pub material_id: String,
}

#[derive(Debug, Serialize)]
pub struct CalculatePrenResponse {
    pub pren: f64,
    pub provenance: Provenance,
}

pub fn calculate_pren(catalogs: &Catalogs, req: CalculatePrenRequest) -> Result<CalculatePrenResponse, CoreError> {
    let (_, composition) = material::lookup_composition(catalogs, &req.material_id)
        .ok_or_else(|| InputValidationError::UnknownMaterial(req.material_id.clone()))?;

    let provenance = Provenance::new("calculate_pren", ConfidenceBand::High)
        .with_citation("PREN = %Cr + 3.3*%Mo + 16*%N")
        .with_citation(composition.source.clone());

    Ok(CalculatePrenResponse { pren: composition.pren(), provenance })
}

// ---------------------------------------------------------------------
// screen_materials
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ScreenMaterialsRequest {
    /// A free-text service environment (e.g. "seawater", "brackish water",
    /// "freshwater"); unrecognized strings fall back to a conservative
    /// aerated-seawater assumption (spec.md §6.1).
    pub environment: String,
    pub candidate_material_ids: Vec<String>,
    /// A free-text application note, carried through into the per-candidate
    /// notes rather than changing the screening logic itself.
    pub application: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum CompatibilityTag {
    Recommended,
    Acceptable,
    NotRecommended,
    UnknownMaterial,
}

#[derive(Debug, Serialize)]
pub struct ScreenedMaterial {
    pub candidate_id: String,
    pub resolved_id: Option<String>,
    pub pren: Option<f64>,
    pub pitting_risk: Option<pitting::PittingRisk>,
    pub tag: CompatibilityTag,
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct ScreenMaterialsResponse {
    pub environment: String,
    pub candidates: Vec<ScreenedMaterial>,
    pub provenance: Provenance,
}

/// Assumed `(cl_mg_l, temperature_c, ph, do_mg_l)` for a named service
/// environment. Not a substitute for caller-supplied state in the other
/// tools — this exists only so `screen_materials` has a `(cl_mg_l, T, pH,
/// DO)` tuple to run Tier 1 (and, where the material resolves, Tier 2)
/// against from a plain environment string.
fn environment_conditions(environment: &str) -> (f64, f64, f64, f64) {
    let key = environment.trim().to_ascii_lowercase();
    match key.as_str() {
        "seawater" | "aerated seawater" => (19_000.0, 20.0, 8.1, 8.0),
        "brackish water" | "brackish" => (5_000.0, 20.0, 7.5, 7.0),
        "freshwater" | "fresh water" => (50.0, 20.0, 7.5, 9.0),
        // Unrecognized environments default to the conservative seawater case
        // rather than silently assuming a benign one.
        _ => (19_000.0, 20.0, 8.1, 8.0),
    }
}

pub fn screen_materials(
    catalogs: &Catalogs,
    req: ScreenMaterialsRequest,
) -> Result<ScreenMaterialsResponse, CoreError> {
    let (cl_mg_l, temperature_c, ph, do_mg_l) = environment_conditions(&req.environment);
    let t = Temperature::celsius(temperature_c);
    let cl_molar = cl_mg_l / 1000.0 / 35.45;

    let mut candidates = Vec::new();
    for candidate_id in &req.candidate_material_ids {
        let Some((resolved_id, composition)) = material::lookup_composition(catalogs, candidate_id) else {
            candidates.push(ScreenedMaterial {
                candidate_id: candidate_id.clone(),
                resolved_id: None,
                pren: None,
                pitting_risk: None,
                tag: CompatibilityTag::UnknownMaterial,
                notes: format!("'{candidate_id}' has no composition catalog entry"),
            });
            continue;
        };
        let pren = composition.pren();
        let tier1 = pitting::tier1_only(catalogs, &resolved_id, composition, cl_mg_l, t)?;

        // When the candidate also resolves through the strict canonical
        // path, run the full dual-tier assessment for a sharper risk level;
        // otherwise Tier 1 alone still gives a usable screening signal.
        let overall_risk = match build_material(catalogs, &resolved_id, cl_molar, t, ph, Some(do_mg_l), None) {
            Ok(material) => pitting::assess(catalogs, &material, cl_mg_l, t, Some(do_mg_l))?.overall_risk,
            Err(_) => tier1.risk,
        };

        let (tag, notes) = match overall_risk {
            pitting::PittingRisk::Low => (
                CompatibilityTag::Recommended,
                format!("PREN {pren:.1}; low pitting risk in {} for {}", req.environment, req.application),
            ),
            pitting::PittingRisk::Moderate => (
                CompatibilityTag::Acceptable,
                format!("PREN {pren:.1}; moderate pitting risk in {} for {}", req.environment, req.application),
            ),
            pitting::PittingRisk::High | pitting::PittingRisk::Critical => (
                CompatibilityTag::NotRecommended,
                format!("PREN {pren:.1}; {:?} pitting risk in {} for {}", overall_risk, req.environment, req.application),
            ),
        };

        candidates.push(ScreenedMaterial {
            candidate_id: candidate_id.clone(),
            resolved_id: Some(resolved_id),
            pren: Some(pren),
            pitting_risk: Some(overall_risk),
            tag,
            notes,
        });
    }

    let provenance = Provenance::new("screen_materials", ConfidenceBand::Medium)
        .with_assumption(format!(
            "environment '{}' mapped to Cl={cl_mg_l} mg/L, T={temperature_c} C, pH={ph}, DO={do_mg_l} mg/L",
            req.environment
        ));

    Ok(ScreenMaterialsResponse { environment: req.environment, candidates, provenance })
}

// ---------------------------------------------------------------------
// assess_galvanic
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AssessGalvanicRequest {
    pub material_a: String,
    pub material_b: String,
    pub area_a_cm2: f64,
    pub area_b_cm2: f64,
    pub cl_mg_l: f64,
    pub temperature_c: f64,
    pub ph: f64,
    /// Dissolved oxygen (mg/L); when supplied, ORR's reversible potential and
    /// (absent flow geometry) its limiting current are derived from it
    /// instead of the static thermodynamic/tabulated defaults (spec.md §4.4).
    pub dissolved_oxygen_mg_l: Option<f64>,
    pub velocity_m_s: Option<f64>,
    pub pipe_diameter_m: Option<f64>,
    pub pipe_length_m: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AssessGalvanicResponse {
    pub result: GalvanicResult,
    pub provenance: Provenance,
}

/// Build the flow geometry for a couple's ORR mass-transfer calculation when
/// the caller supplied all three of velocity, diameter, and length; a couple
/// with only some of them falls back to DO-ratio scaling (or the static
/// catalog row) rather than guessing the missing geometry.
fn flow_conditions_from(
    velocity_m_s: Option<f64>,
    pipe_diameter_m: Option<f64>,
    pipe_length_m: Option<f64>,
) -> Option<FlowConditions> {
    let velocity_m_s = velocity_m_s?;
    let diameter_m = pipe_diameter_m?;
    let length_m = pipe_length_m?;
    Some(FlowConditions { geometry: Geometry::Pipe { diameter_m, length_m }, velocity_m_s })
}

pub fn assess_galvanic(catalogs: &Catalogs, req: AssessGalvanicRequest) -> Result<AssessGalvanicResponse, CoreError> {
    validate_ph(req.ph)?;
    validate_non_negative("cl_mg_l", req.cl_mg_l)?;
    validate_non_negative("area_a_cm2", req.area_a_cm2)?;
    validate_non_negative("area_b_cm2", req.area_b_cm2)?;

    let t = Temperature::celsius(req.temperature_c);
    let cl_molar = req.cl_mg_l / 1000.0 / 35.45;
    let flow = flow_conditions_from(req.velocity_m_s, req.pipe_diameter_m, req.pipe_length_m);
    let material_a = build_material(catalogs, &req.material_a, cl_molar, t, req.ph, req.dissolved_oxygen_mg_l, flow)?;
    let material_b = build_material(catalogs, &req.material_b, cl_molar, t, req.ph, req.dissolved_oxygen_mg_l, flow)?;

    let result = galvanic::solve_couple(&material_a, req.area_a_cm2, &material_b, req.area_b_cm2, t)?;

    let mut provenance = Provenance::new("assess_galvanic", ConfidenceBand::Medium)
        .with_assumption("bisection solved over E in [-1.2, 1.5] V (SHE)");
    if result.severity == crate::galvanic::GalvanicSeverity::Severe {
        provenance = provenance.with_warning(Warning::new(
            "severe_galvanic_attack",
            format!("{} is predicted to corrode at {:.3} mm/year in this couple", result.anode_material, result.anode_corrosion_rate_mm_per_year),
        ));
    }

    Ok(AssessGalvanicResponse { result, provenance })
}

// ---------------------------------------------------------------------
// assess_localized (Tier-1 + Tier-2 pitting)
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AssessLocalizedRequest {
    pub material_id: String,
    pub cl_mg_l: f64,
    pub temperature_c: f64,
    pub ph: f64,
    /// Dissolved oxygen (mg/L); Tier 2 is unavailable without it regardless
    /// of whether the material is otherwise eligible (spec.md §4.8).
    pub dissolved_oxygen_mg_l: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AssessLocalizedResponse {
    pub assessment: PittingAssessment,
    pub provenance: Provenance,
}

pub fn assess_localized(catalogs: &Catalogs, req: AssessLocalizedRequest) -> Result<AssessLocalizedResponse, CoreError> {
    validate_ph(req.ph)?;
    validate_non_negative("cl_mg_l", req.cl_mg_l)?;
    let t = Temperature::celsius(req.temperature_c);
    let cl_molar = req.cl_mg_l / 1000.0 / 35.45;

    // Tier 1 accepts any catalog alloy (spec.md §4.5); only fall back to a
    // Tier-1-only assessment when the strict canonical path used by Tier 2
    // and the galvanic solver genuinely can't resolve the id.
    let assessment = match build_material(catalogs, &req.material_id, cl_molar, t, req.ph, req.dissolved_oxygen_mg_l, None) {
        Ok(material) => pitting::assess(catalogs, &material, req.cl_mg_l, t, req.dissolved_oxygen_mg_l)?,
        Err(MaterialError::UnknownMaterial(_)) => {
            let (resolved_id, composition) = material::lookup_composition(catalogs, &req.material_id)
                .ok_or_else(|| InputValidationError::UnknownMaterial(req.material_id.clone()))?;
            let tier1 = pitting::tier1_only(catalogs, &resolved_id, composition, req.cl_mg_l, t)?;
            PittingAssessment {
                overall_risk: tier1.risk,
                tier1,
                tier2: pitting::Tier2Status::Unavailable {
                    reason: format!(
                        "'{resolved_id}' is not in the NRL canonical alloy set Tier 2 and the galvanic solver require"
                    ),
                },
                disagreement: None,
            }
        }
        Err(err) => return Err(err.into()),
    };

    let mut provenance = Provenance::new("assess_localized", ConfidenceBand::Medium);
    if let Some(note) = &assessment.disagreement {
        provenance = provenance.with_warning(Warning::new("tier_disagreement", note.clone()));
    }
    if let pitting::Tier2Status::Unavailable { reason } = &assessment.tier2 {
        provenance = provenance.with_warning(Warning::new("tier2_unavailable", reason.clone()));
    }

    Ok(AssessLocalizedResponse { assessment, provenance })
}

// ---------------------------------------------------------------------
// predict_aerated_chloride: single-electrode corrosion rate estimate under
// aerated, chloride-bearing conditions, combining ORR kinetics (activation
// + mass transfer) against the material's own anodic reaction.
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PredictAeratedChlorideRequest {
    pub material_id: String,
    pub cl_mg_l: f64,
    pub dissolved_oxygen_mg_l: f64,
    pub temperature_c: f64,
    pub ph: f64,
    pub flow_velocity_m_s: f64,
    pub pipe_diameter_m: f64,
    pub pipe_length_m: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictAeratedChlorideResponse {
    pub e_corr_v_she: f64,
    pub corrosion_rate_mm_per_year: f64,
    pub provenance: Provenance,
}

pub fn predict_aerated_chloride(
    catalogs: &Catalogs,
    req: PredictAeratedChlorideRequest,
) -> Result<PredictAeratedChlorideResponse, CoreError> {
    validate_ph(req.ph)?;
    validate_non_negative("cl_mg_l", req.cl_mg_l)?;
    validate_non_negative("dissolved_oxygen_mg_l", req.dissolved_oxygen_mg_l)?;

    let t = Temperature::celsius(req.temperature_c);
    let cl_molar = req.cl_mg_l / 1000.0 / 35.45;
    let material = build_material(catalogs, &req.material_id, cl_molar, t, req.ph, None, None)?;

    let i_lim = mass_transfer::limiting_current_density_a_cm2(
        Geometry::Pipe { diameter_m: req.pipe_diameter_m, length_m: req.pipe_length_m },
        req.flow_velocity_m_s,
        t,
        req.dissolved_oxygen_mg_l,
    )?;

    // self-corrosion: find E where the (mass-transfer-adjusted) ORR current
    // balances the material's own anodic current.
    let flow_limited_material = material_with_limit(&material, i_lim);
    let result = galvanic::solve_self_corrosion(&flow_limited_material, t)?;

    let provenance = Provenance::new("predict_aerated_chloride", ConfidenceBand::Medium)
        .with_assumption("single-electrode self-corrosion modeled as a degenerate galvanic couple with equal areas")
        .with_citation("Koutecky-Levich combination of activation and mass-transfer control");

    Ok(PredictAeratedChlorideResponse {
        e_corr_v_she: result.e_mix_v_she,
        corrosion_rate_mm_per_year: result.anode_corrosion_rate_mm_per_year,
        provenance,
    })
}

/// Clone `material` with its ORR diffusion limit overridden — used only to
/// let [`predict_aerated_chloride`] reuse the galvanic solver for a
/// single-electrode self-corrosion calculation at a flow-derived limiting
/// current, without duplicating the mixed-potential bisection.
fn material_with_limit(material: &crate::material::Material, i_lim_a_cm2: f64) -> crate::material::Material {
    let mut clone = material.clone();
    for reaction in &mut clone.reactions {
        if let crate::material::ReactionSpec::Cathodic { reaction, kind } = reaction {
            if *kind == crate::catalog::ReactionKind::Orr {
                reaction.i_lim_a_cm2 = Some(i_lim_a_cm2);
            }
        }
    }
    clone
}

// ---------------------------------------------------------------------
// predict_co2_h2s (NORSOK M-506 wrapper)
// ---------------------------------------------------------------------

/// The NORSOK M-506 standard's full eighteen-parameter input block
/// (spec.md §4.10): CO2 fraction and pressure (the model needs their
/// product, `fCO2`, but each is tracked separately so the caller's flow
/// sheet doesn't have to pre-multiply them), temperature, gas/liquid
/// superficial velocities and mass/volume flows, holdup, gas/liquid
/// viscosities, pipe roughness and diameter, upstream pH state
/// (bicarbonate/ionic strength feed the upstream pH correlation when
/// `ph_in` is not supplied directly), and the `calc_iterations` mode
/// selector. Wall shear stress is derived internally from the flow state
/// rather than accepted directly (spec.md §9).
#[derive(Debug, Deserialize)]
pub struct PredictCo2H2sRequest {
    pub co2_fraction: f64,
    pub pressure_bar: f64,
    pub temperature_c: f64,
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
    pub ph_in: f64,
    pub bicarbonate_mg_l: f64,
    pub ionic_strength_mg_l: f64,
    pub calc_iterations: u8,
}

#[derive(Debug, Serialize)]
pub struct PredictCo2H2sResponse {
    pub result: NorsokResult,
    pub provenance: Provenance,
}

pub fn predict_co2_h2s(req: PredictCo2H2sRequest) -> Result<PredictCo2H2sResponse, CoreError> {
    let inputs = NorsokInputs {
        co2_fraction: req.co2_fraction,
        pressure_bar: req.pressure_bar,
        temperature: Temperature::celsius(req.temperature_c),
        v_sg_m_s: req.v_sg_m_s,
        v_sl_m_s: req.v_sl_m_s,
        mass_g_kg: req.mass_g_kg,
        mass_l_kg: req.mass_l_kg,
        vol_g_m3: req.vol_g_m3,
        vol_l_m3: req.vol_l_m3,
        holdup: req.holdup,
        vis_g_pa_s: req.vis_g_pa_s,
        vis_l_pa_s: req.vis_l_pa_s,
        roughness_m: req.roughness_m,
        diameter_m: req.diameter_m,
        ph_in: req.ph_in,
        bicarbonate_mg_l: req.bicarbonate_mg_l,
        ionic_strength_mg_l: req.ionic_strength_mg_l,
        calc_iterations: req.calc_iterations,
    };
    let result = norsok::predict_co2_corrosion_rate(inputs)?;

    let mut provenance = Provenance::new("predict_co2_h2s", ConfidenceBand::Medium)
        .with_citation("NORSOK M-506, rev. 2005");
    if result.ph_clamped {
        provenance = provenance.with_warning(Warning::new(
            "ph_clamped",
            format!("pH {} lies outside the validated correction window [{}, {}]; clamped", result.ph_used, norsok::PH_CORRECTION_MIN, norsok::PH_CORRECTION_MAX),
        ));
    }

    Ok(PredictCo2H2sResponse { result, provenance })
}

// ---------------------------------------------------------------------
// generate_pourbaix
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeneratePourbaixRequest {
    pub metal: PourbaixMetal,
    pub point: Option<(f64, f64)>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePourbaixResponse {
    pub lines: Vec<pourbaix::BoundaryLine>,
    pub point_region: Option<PourbaixRegion>,
    pub provenance: Provenance,
}

pub fn generate_pourbaix(req: GeneratePourbaixRequest) -> Result<GeneratePourbaixResponse, CoreError> {
    let lines = pourbaix::generate_diagram(req.metal);
    let point_region = match req.point {
        Some((e, ph)) => Some(pourbaix::classify_point(req.metal, e, ph)?),
        None => None,
    };

    let provenance = Provenance::new("generate_pourbaix", ConfidenceBand::Low)
        .with_assumption("simplified thermodynamic diagram: no activity coefficients, 25 C water lines only")
        .with_warning(Warning::new(
            "not_phreeqc_grade",
            "this is an engineering-estimate diagram, not a full aqueous-speciation calculation",
        ));

    Ok(GeneratePourbaixResponse { lines, point_region, provenance })
}

// ---------------------------------------------------------------------
// redox conversions
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DoToEhRequest {
    pub dissolved_oxygen_mg_l: f64,
    pub ph: f64,
    pub temperature_c: f64,
}

#[derive(Debug, Serialize)]
pub struct DoToEhResponse {
    pub eh_v_she: f64,
    pub provenance: Provenance,
}

pub fn convert_do_to_eh(req: DoToEhRequest) -> Result<DoToEhResponse, CoreError> {
    validate_ph(req.ph)?;
    let eh = redox::dissolved_oxygen_to_eh(req.dissolved_oxygen_mg_l, req.ph, Temperature::celsius(req.temperature_c))?;
    Ok(DoToEhResponse {
        eh_v_she: eh.volts(),
        provenance: Provenance::new("redox_do_to_eh", ConfidenceBand::Medium)
            .with_citation("four-electron ORR Nernst equation"),
    })
}

#[derive(Debug, Deserialize)]
pub struct EhToDoRequest {
    pub eh_v_she: f64,
    pub ph: f64,
    pub temperature_c: f64,
    pub salinity_psu: f64,
}

#[derive(Debug, Serialize)]
pub struct EhToDoResponse {
    pub dissolved_oxygen_mg_l: f64,
    pub provenance: Provenance,
}

pub fn convert_eh_to_do(req: EhToDoRequest) -> Result<EhToDoResponse, CoreError> {
    validate_ph(req.ph)?;
    let do_mg_l = redox::eh_to_dissolved_oxygen(
        Potential::new(req.eh_v_she, Reference::She),
        req.ph,
        Temperature::celsius(req.temperature_c),
        req.salinity_psu,
    )?;

    Ok(EhToDoResponse {
        dissolved_oxygen_mg_l: do_mg_l,
        provenance: Provenance::new("redox_eh_to_do", ConfidenceBand::Medium)
            .with_citation("four-electron ORR Nernst equation, inverted")
            .with_assumption("saturates at the air-equilibrium solubility ceiling"),
    })
}
