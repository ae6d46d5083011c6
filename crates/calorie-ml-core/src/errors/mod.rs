// ABOUTME: Unified error handling with standard error codes and HTTP response formatting
// ABOUTME: Maps inference failures onto the service's JSON error contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every rejected request is reported through [`AppError`]. The HTTP body is
//! always `{"error": <message>}`, with an extra `"details"` string when the
//! underlying cause should be surfaced to the caller.

use crate::constants::messages;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes used throughout the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required request field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A categorical value is outside its domain
    #[serde(rename = "INVALID_CATEGORY")]
    InvalidCategory = 3004,

    // Inference (7000-7999)
    /// A model could not produce a prediction
    #[serde(rename = "PREDICTION_FAILED")]
    PredictionFailed = 7000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::MissingRequiredField | Self::InvalidCategory => 400,
            Self::PredictionFailed => 500,
        }
    }
}

/// Unified error type for the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message, sent as the `error` field
    pub message: String,
    /// Underlying cause, sent as the `details` field when present
    pub details: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Required field absent
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{}{field}", messages::MISSING_FIELD_PREFIX),
        )
    }

    /// Category lookup failed; `detail` is the rendered offending value
    #[must_use]
    pub fn invalid_value(detail: &str) -> Self {
        Self::new(
            ErrorCode::InvalidCategory,
            format!("{}{detail}", messages::INVALID_VALUE_PREFIX),
        )
    }

    /// Model layer failure with its cause
    #[must_use]
    pub fn prediction_failed(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::PredictionFailed, messages::PREDICTION_FAILED).with_details(cause)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {details}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for AppError {}

/// HTTP error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Underlying cause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
            details: error.details,
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = ?self.code, error = %self, "request failed");
        } else {
            tracing::warn!(code = ?self.code, error = %self, "request rejected");
        }

        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}
