//! HTTP error responses, all rendered as an `ErrorOutcome` body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use migrantcare_core::{CoreError, ErrorOutcome};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    Throttled,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, outcome) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorOutcome::invalid(&msg)),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorOutcome::unauthorized(&msg))
            }
            AppError::Throttled => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorOutcome::throttled("Rate limit exceeded. Please try again later."),
            ),
        };

        (status, Json(outcome)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
