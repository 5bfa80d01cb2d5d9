use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::AllocationError;

/// Everything a handler can fail with, rendered as `{"detail": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] AllocationError),

    /// The request could not be decoded or failed field validation
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(AllocationError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Domain(AllocationError::Conflict) => StatusCode::BAD_REQUEST,
            ApiError::Domain(AllocationError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Domain(AllocationError::InvalidState(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(AllocationError::StoreUnavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Domain(AllocationError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| match err.message {
                    Some(ref message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value ({})", field, err.code),
                })
            })
            .collect();
        messages.sort();

        ApiError::InvalidRequest(messages.join("; "))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
