// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No stored credentials; run the authorize flow first")]
    CredentialsMissing,

    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    #[error("Token refresh response did not include expires_at")]
    RefreshResponseIncomplete,

    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    #[error("Token exchange failed: {0}")]
    TokenExchangeFailed(String),

    #[error("Activity fetch failed: HTTP {status}: {body}")]
    FetchFailed { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
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
            AppError::CredentialsMissing => {
                (StatusCode::UNAUTHORIZED, "credentials_missing", None)
            }
            AppError::RefreshFailed(msg) => {
                (StatusCode::BAD_GATEWAY, "refresh_failed", Some(msg.clone()))
            }
            AppError::RefreshResponseIncomplete => {
                (StatusCode::BAD_GATEWAY, "refresh_incomplete", None)
            }
            AppError::AuthorizationDenied(msg) => (
                StatusCode::UNAUTHORIZED,
                "authorization_denied",
                Some(msg.clone()),
            ),
            AppError::TokenExchangeFailed(msg) => (
                StatusCode::BAD_GATEWAY,
                "token_exchange_failed",
                Some(msg.clone()),
            ),
            AppError::FetchFailed { status, body } => (
                StatusCode::BAD_GATEWAY,
                "strava_error",
                Some(format!("HTTP {}: {}", status, body)),
            ),
            AppError::Http(err) => (StatusCode::BAD_GATEWAY, "http_error", Some(err.to_string())),
            AppError::Io(err) => {
                tracing::error!(error = %err, "I/O error");
                (StatusCode::INTERNAL_SERVER_ERROR, "io_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
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
