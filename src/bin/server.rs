//! Biomaterial explorer HTTP server

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use biomat_explorer::curve::library;
use biomat_explorer::prelude::*;

struct AppState {
    records: Vec<MaterialRecord>,
    source: DataSource,
}

type SharedState = Arc<AppState>;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialsResponse<'a> {
    using_sample_data: bool,
    count: usize,
    materials: Vec<&'a MaterialRecord>,
}

#[derive(Debug, Deserialize)]
struct FilterRequest {
    #[serde(default)]
    constraints: PropertyFilter,
    #[serde(default)]
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeviationRequest {
    property: String,
    #[serde(default)]
    ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurveRequest {
    input: StressStrainInput,
    #[serde(default)]
    options: CurveOptions,
    /// Unit of the input strengths and modulus
    #[serde(default)]
    units: StressUnit,
    /// Unit of the returned stresses, defaults to `units`
    #[serde(default)]
    output_units: Option<StressUnit>,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<T>,
}

fn respond<T: Serialize>(result: MaterialsResult<T>) -> (StatusCode, Json<ApiResponse<T>>) {
    match result {
        Ok(results) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                error: None,
                results: Some(results),
            }),
        ),
        Err(e) => {
            log::warn!("request rejected: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse {
                    success: false,
                    error: Some(e.to_string()),
                    results: None,
                }),
            )
        }
    }
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn list_materials(State(state): State<SharedState>) -> impl IntoResponse {
    Json(MaterialsResponse {
        using_sample_data: state.source.is_bundled(),
        count: state.records.len(),
        materials: state.records.iter().collect(),
    })
    .into_response()
}

async fn filter_materials(
    State(state): State<SharedState>,
    Json(request): Json<FilterRequest>,
) -> impl IntoResponse {
    // Search alone narrows the whole table; combined with ranges it narrows the range matches
    let matched: Vec<&MaterialRecord> = match request.search.as_deref() {
        Some(term) if request.constraints.is_empty() => search(&state.records, term),
        Some(term) => {
            let found: HashSet<&str> = search(&state.records, term).iter().map(|r| r.id.as_str()).collect();
            request
                .constraints
                .apply(&state.records)
                .into_iter()
                .filter(|r| found.contains(r.id.as_str()))
                .collect()
        }
        None => request.constraints.apply(&state.records),
    };
    let matched: Vec<MaterialRecord> = matched.into_iter().cloned().collect();
    log::debug!("filter matched {} of {} materials", matched.len(), state.records.len());
    respond(Ok(matched))
}

async fn material_deviation(
    State(state): State<SharedState>,
    Json(request): Json<DeviationRequest>,
) -> impl IntoResponse {
    let result = request.property.parse::<Property>().map(|property| match &request.ids {
        Some(ids) => {
            let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
            deviation(
                state.records.iter().filter(|r| wanted.contains(r.id.as_str())),
                property,
            )
        }
        None => deviation(&state.records, property),
    });
    respond(result)
}

async fn curve_library() -> impl IntoResponse {
    let groups: BTreeMap<&str, Vec<&LibraryMaterial>> = library::group_by_type();
    Json(groups)
}

async fn generate_curve(Json(request): Json<CurveRequest>) -> impl IntoResponse {
    let output_units = request.output_units.unwrap_or(request.units);
    let result = generate(&request.input, &request.options).map(|curve| {
        if output_units == request.units {
            curve
        } else {
            curve.scale_stress(biomat_explorer::units::convert(1.0, request.units, output_units))
        }
    });
    respond(result)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (records, source) = load_and_parse(&LoaderConfig::from_env());
    log::info!("serving {} materials from {:?}", records.len(), source);
    let state = Arc::new(AppState { records, source });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/materials", get(list_materials))
        .route("/api/v1/materials/filter", post(filter_materials))
        .route("/api/v1/materials/deviation", post(material_deviation))
        .route("/api/v1/library", get(curve_library))
        .route("/api/v1/curve", post(generate_curve))
        .layer(cors)
        .with_state(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8087".to_string());
    let addr = format!("{}:{}", host, port);

    log::info!("Biomaterial explorer listening on http://{}", addr);
    log::info!("  Health check: GET  /health");
    log::info!("  Materials:    GET  /api/v1/materials");
    log::info!("  Filter:       POST /api/v1/materials/filter");
    log::info!("  Deviation:    POST /api/v1/materials/deviation");
    log::info!("  Library:      GET  /api/v1/library");
    log::info!("  Curve:        POST /api/v1/curve");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
