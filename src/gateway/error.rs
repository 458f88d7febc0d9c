use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::pipeline::CheckError;

/// HTTP-facing error taxonomy: what the caller did wrong (400), what their
/// file did wrong (422), and what went wrong on our side (500).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    ExtractionFailed(String),

    #[error("{0}")]
    DependencyFailed(String),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl From<CheckError> for GatewayError {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::UnsupportedFormat { .. } | CheckError::EmptyUpload => {
                GatewayError::InvalidRequest(err.to_string())
            }
            CheckError::Extraction(_) | CheckError::NoTextExtracted => {
                GatewayError::ExtractionFailed(err.to_string())
            }
            CheckError::Scoring(_) | CheckError::Ledger(_) => {
                GatewayError::DependencyFailed(err.to_string())
            }
            CheckError::Staging(_) => GatewayError::Internal(err.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::ExtractionFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::DependencyFailed(_) | GatewayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = self.to_string();
        if status.is_server_error() {
            error!(status = status.as_u16(), detail = %detail, "Request failed");
        } else {
            debug!(status = status.as_u16(), detail = %detail, "Request rejected");
        }

        (status, Json(ErrorDetail { detail })).into_response()
    }
}
