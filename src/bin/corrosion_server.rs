//! Corrosion engine HTTP server: one `/v1/...` route per tool-dispatch
//! operation (SPEC_FULL.md §6.4).

#![forbid(unsafe_code)]

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use corrosion_engine::catalog::Catalogs;
use corrosion_engine::config::Config;
use corrosion_engine::error::CoreError;
use corrosion_engine::tools;

struct AppState {
    catalogs: Catalogs,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CoreError::InputValidation(_) | CoreError::Material(_) => StatusCode::BAD_REQUEST,
            CoreError::CatalogLoad(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }))
}

macro_rules! route_handler {
    ($name:ident, $req:ty, $call:expr) => {
        async fn $name(
            State(state): State<Arc<AppState>>,
            Json(req): Json<$req>,
        ) -> Result<impl IntoResponse, ApiError> {
            let response = $call(&state.catalogs, req)?;
            Ok(Json(response))
        }
    };
}

route_handler!(screen_materials, tools::ScreenMaterialsRequest, tools::screen_materials);
route_handler!(assess_galvanic, tools::AssessGalvanicRequest, tools::assess_galvanic);
route_handler!(assess_localized, tools::AssessLocalizedRequest, tools::assess_localized);
route_handler!(calculate_pren, tools::CalculatePrenRequest, tools::calculate_pren);
route_handler!(get_material_properties, tools::GetMaterialPropertiesRequest, tools::get_material_properties);
route_handler!(predict_aerated_chloride, tools::PredictAeratedChlorideRequest, tools::predict_aerated_chloride);

async fn predict_co2_h2s(Json(req): Json<tools::PredictCo2H2sRequest>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(tools::predict_co2_h2s(req)?))
}

async fn generate_pourbaix(Json(req): Json<tools::GeneratePourbaixRequest>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(tools::generate_pourbaix(req)?))
}

async fn redox_do_to_eh(Json(req): Json<tools::DoToEhRequest>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(tools::convert_do_to_eh(req)?))
}

async fn redox_eh_to_do(Json(req): Json<tools::EhToDoRequest>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(tools::convert_eh_to_do(req)?))
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/version", get(version))
        .route("/v1/materials/screen", post(screen_materials))
        .route("/v1/materials/properties", post(get_material_properties))
        .route("/v1/materials/pren", post(calculate_pren))
        .route("/v1/galvanic/assess", post(assess_galvanic))
        .route("/v1/pitting/assess", post(assess_localized))
        .route("/v1/aerated-chloride/predict", post(predict_aerated_chloride))
        .route("/v1/norsok/predict", post(predict_co2_h2s))
        .route("/v1/pourbaix/generate", post(generate_pourbaix))
        .route("/v1/redox/do-to-eh", post(redox_do_to_eh))
        .route("/v1/redox/eh-to-do", post(redox_eh_to_do))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("CORROSION_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::from_env()?;
    let catalogs = match &config.data_dir {
        Some(dir) => Catalogs::load(Path::new(dir)),
        None => Catalogs::load_embedded(),
    };
    let catalogs = catalogs.map_err(|e| {
        tracing::error!(error = %e, "catalog load failed; refusing to serve requests");
        e
    })?;

    let state = Arc::new(AppState { catalogs });
    let app = router(state);

    tracing::info!(addr = %config.bind_addr, "starting corrosion engine server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
