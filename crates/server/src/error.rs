use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use shapes::calculator::CalculatorError;
use shapes::ShapeError;

/// Errors returned by the HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
    #[error("No saved result with id '{0}'")]
    NotFound(String),
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Shape(_) | ApiError::Calculator(_) | ApiError::Rejected(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Shape(ShapeError::Validation(_)) => "validation",
            ApiError::Shape(ShapeError::Computation(_)) => "computation",
            ApiError::Calculator(_) => "calculator",
            ApiError::NotFound(_) => "not_found",
            ApiError::Rejected(_) => "rejected",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Request rejected: {}", self);
        let body = json!({ "error": self.to_string(), "kind": self.kind() });
        (self.status(), Json(body)).into_response()
    }
}
