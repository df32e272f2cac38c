use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::retell::DispatchError;

#[derive(Debug, Error)]
pub enum AppError {
    /// `name` or `phone` missing. Carries the endpoint's own wording.
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Retell AI error: {status} - {message}")]
    Provider { status: u16, message: String },
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::Provider { .. } | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({
                "success": false,
                "error": self.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        tracing::error!("Error triggering Retell AI call: {:?}", err);
        AppError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Could not parse request body: {}", err);
        AppError::Unexpected(err.to_string())
    }
}
