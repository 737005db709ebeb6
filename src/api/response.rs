//! Response types for the tool rental API.
//!
//! Every endpoint answers with the same [`ApiResponse`] envelope; failures
//! carry an error code and, for validation failures, a field-to-message map.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// Response envelope shared by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The HTTP status code, repeated in the body.
    pub status: u16,
    /// Error code for programmatic handling. Absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable summary.
    pub message: String,
    /// The payload. Absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Field-level validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl<T> ApiResponse<T> {
    /// Creates a 200 response carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            code: None,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// API error with HTTP status code.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-level validation messages.
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            errors: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "MALFORMED_JSON", message)
    }

    /// Converts the error into the shared envelope.
    pub fn into_body(self) -> ApiResponse<()> {
        ApiResponse {
            status: self.status.as_u16(),
            code: Some(self.code),
            message: self.message,
            data: None,
            errors: self.errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self.into_body())).into_response()
    }
}

impl From<RentalError> for ApiError {
    fn from(error: RentalError) -> Self {
        match error {
            RentalError::InvalidInput { violations, .. } => {
                let errors = violations
                    .into_iter()
                    .map(|v| (v.field, v.message))
                    .collect();
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Validation failed for the request".to_string(),
                    errors: Some(errors),
                }
            }
            RentalError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "TOOL_NOT_FOUND", error.to_string())
            }
            RentalError::InvalidState { message } => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "INVALID_STATE", message)
            }
            RentalError::ConfigNotFound { .. } | RentalError::ConfigParseError { .. } => {
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    error.to_string(),
                )
            }
        }
    }
}
