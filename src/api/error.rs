use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::ValidationError;

const INVALID_RECEIPT: &str = "The receipt is invalid";

#[derive(Debug)]
pub enum ApiError {
    InvalidReceipt(ValidationError),
    BadRequest(String),
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidReceipt(err) => write!(f, "Invalid receipt: {}", err),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Receipt problems all read the same to the caller, only the kind differs
        let (status, error_type, description) = match self {
            ApiError::InvalidReceipt(err) => {
                (StatusCode::BAD_REQUEST, err.kind(), INVALID_RECEIPT.to_string())
            }
            ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "bad_request", INVALID_RECEIPT.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            description,
        });

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidReceipt(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
