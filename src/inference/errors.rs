// ABOUTME: Per-request inference error taxonomy
// ABOUTME: Missing fields, invalid categories and prediction failures with their HTTP mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_ml_core::errors::AppError;
use thiserror::Error;

/// Recoverable, per-request failures; other requests are unaffected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// A required field is absent from the payload
    #[error("Missing field: {field}")]
    MissingField {
        /// Name of the first missing field, in schema order
        field: &'static str,
    },
    /// A categorical value is not a key of its column's mapping
    #[error("Invalid value: {value}")]
    InvalidCategory {
        /// Categorical column
        field: &'static str,
        /// Offending value as rendered to the caller
        value: String,
    },
    /// The payload could not be scored
    #[error("Prediction failed: {cause}")]
    PredictionFailed {
        /// Underlying cause, returned as `details`
        cause: String,
    },
}

impl InferenceError {
    /// Prediction failure with its cause
    #[must_use]
    pub fn prediction_failed(cause: impl Into<String>) -> Self {
        Self::PredictionFailed {
            cause: cause.into(),
        }
    }
}

impl From<InferenceError> for AppError {
    fn from(error: InferenceError) -> Self {
        match error {
            InferenceError::MissingField { field } => Self::missing_field(field),
            InferenceError::InvalidCategory { value, .. } => Self::invalid_value(&value),
            InferenceError::PredictionFailed { cause } => Self::prediction_failed(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_ml_core::errors::ErrorCode;

    #[test]
    fn test_conversion_to_app_error() {
        let error: AppError = InferenceError::MissingField { field: "bmi" }.into();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, "Missing field: bmi");

        let error: AppError = InferenceError::InvalidCategory {
            field: "gender",
            value: "'man'".to_owned(),
        }
        .into();
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, "Invalid value: 'man'");

        let error: AppError = InferenceError::prediction_failed("boom").into();
        assert_eq!(error.http_status(), 500);
        assert_eq!(error.message, "Prediction failed");
        assert_eq!(error.details.as_deref(), Some("boom"));
    }
}
