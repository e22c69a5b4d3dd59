// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::services::{CalendarError, PlanError, RouteError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Plan(err) => (
                StatusCode::BAD_REQUEST,
                "invalid_schedule",
                Some(err.to_string()),
            ),
            AppError::Calendar(err) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(err.to_string()))
            }
            AppError::Route(err) => {
                tracing::warn!(error = %err, "Rejected route polyline");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "invalid_polyline",
                    Some(err.to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_error_status() {
        let response =
            AppError::from(PlanError::InsufficientLeadTime { weeks: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_calendar_error_status() {
        let response =
            AppError::from(CalendarError::DateOutOfRange { week_number: 9 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_route_error_status() {
        let response = AppError::from(RouteError::Polyline("bad".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
