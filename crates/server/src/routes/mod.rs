use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shapes::calculator;
use shapes::{measure_with_id, ComparisonSummary, Parameters, Shape, ShapeKind, ShapeResult};

use crate::error::ApiError;
use crate::AppState;

/// A shape kind plus its raw parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRequest {
    pub kind: ShapeKind,
    #[serde(default)]
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub shapes: Vec<ShapeRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub results: Vec<ShapeResult>,
    pub summary: ComparisonSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
}

/// Catalogue entry for one shape kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeInfo {
    pub kind: ShapeKind,
    pub name: String,
    pub solid: bool,
    pub parameters: Vec<String>,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Supported kinds and their parameter names
pub async fn list_shapes() -> Json<Vec<ShapeInfo>> {
    let shapes = ShapeKind::ALL
        .iter()
        .map(|kind| ShapeInfo {
            kind: *kind,
            name: kind.name().to_string(),
            solid: kind.is_solid(),
            parameters: kind.parameter_names().iter().map(|p| p.to_string()).collect(),
        })
        .collect();
    Json(shapes)
}

/// Build and measure one shape; successful results go to the history
pub async fn measure(
    State(state): State<AppState>,
    Json(request): Json<ShapeRequest>,
) -> Result<Json<ShapeResult>, ApiError> {
    let shape = Shape::from_parameters(request.kind, &request.parameters)?;
    let result = measure_with_id(&shape, new_id());

    match &result.error {
        None => tracing::debug!("Measured {} {}", result.kind, result.id),
        Some(error) => tracing::warn!("Measuring {} failed: {}", result.kind, error),
    }

    state.history.lock().await.record(result.clone());
    Ok(Json(result))
}

/// Measure a batch side by side. Invalid entries become error results
/// instead of failing the request.
pub async fn compare(Json(request): Json<CompareRequest>) -> Json<CompareResponse> {
    let results: Vec<ShapeResult> = request
        .shapes
        .into_iter()
        .map(|req| match Shape::from_parameters(req.kind, &req.parameters) {
            Ok(shape) => measure_with_id(&shape, new_id()),
            Err(err) => ShapeResult::failed(new_id(), req.kind, req.parameters, &err),
        })
        .collect();

    let summary = ComparisonSummary::of(&results);
    tracing::debug!("Compared {} shapes ({} failed)", summary.count, summary.failed);
    Json(CompareResponse { results, summary })
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<ShapeResult>> {
    Json(state.history.lock().await.entries().to_vec())
}

pub async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.history.lock().await.clear();
    StatusCode::NO_CONTENT
}

pub async fn list_saved(State(state): State<AppState>) -> Json<Vec<ShapeResult>> {
    Json(state.saved.lock().await.entries().to_vec())
}

/// Keep a result; responds with the full saved list.
///
/// The posted measurements are not trusted: the record is rebuilt from its
/// kind and parameters under the posted id.
pub async fn save_result(
    State(state): State<AppState>,
    Json(posted): Json<ShapeResult>,
) -> Result<(StatusCode, Json<Vec<ShapeResult>>), ApiError> {
    let shape = Shape::from_parameters(posted.kind, &posted.parameters)?;
    let result = measure_with_id(&shape, posted.id);
    let mut saved = state.saved.lock().await;
    if !saved.save(result) {
        return Err(ApiError::Rejected("Cannot save a failed measurement".to_string()));
    }
    Ok((StatusCode::CREATED, Json(saved.entries().to_vec())))
}

pub async fn delete_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ShapeResult>>, ApiError> {
    let mut saved = state.saved.lock().await;
    if !saved.delete(&id) {
        return Err(ApiError::NotFound(id));
    }
    Ok(Json(saved.entries().to_vec()))
}

pub async fn clear_saved(State(state): State<AppState>) -> StatusCode {
    state.saved.lock().await.clear();
    StatusCode::NO_CONTENT
}

/// Evaluate a calculator expression
pub async fn calculate(Json(request): Json<CalculateRequest>) -> Result<Json<Value>, ApiError> {
    let value = calculator::evaluate(&request.expression)?;
    Ok(Json(json!({ "value": value })))
}
