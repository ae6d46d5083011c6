// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field names, service identifiers and wire messages for the inference service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Request and dataset field names
pub mod fields {
    /// Age in years
    pub const AGE: &str = "age";
    /// Height in centimeters
    pub const HEIGHT_CM: &str = "height_cm";
    /// Weight in kilograms
    pub const WEIGHT_KG: &str = "weight_kg";
    /// Gender category
    pub const GENDER: &str = "gender";
    /// Activity level category
    pub const ACTIVITY_LEVEL: &str = "activity_level";
    /// Fitness goal category
    pub const GOAL: &str = "goal";
    /// Body-mass index, precomputed by the caller
    pub const BMI: &str = "bmi";

    /// Calorie target column (regression target)
    pub const CALORIES: &str = "calories";
    /// Diet category column (classification target)
    pub const DIET_TYPE: &str = "diet_type";
    /// Workout category column (classification target)
    pub const WORKOUT_TYPE: &str = "workout_type";
}

/// Category domains in code order
pub mod domains {
    /// Gender values, code = index
    pub const GENDER: [&str; 2] = ["male", "female"];
    /// Activity level values, code = index
    pub const ACTIVITY_LEVEL: [&str; 3] = ["low", "moderate", "high"];
    /// Goal values, code = index
    pub const GOAL: [&str; 3] = ["weight_loss", "muscle_gain", "maintenance"];
}

/// Service names
pub mod service_names {
    /// Inference service name used in structured logs
    pub const CALORIE_ML_SERVICE: &str = "calorie_ml_service";
}

/// Messages that form part of the HTTP contract
pub mod messages {
    /// Health probe status
    pub const SERVICE_RUNNING: &str = "ML service running";
    /// Prefix for missing-field rejections
    pub const MISSING_FIELD_PREFIX: &str = "Missing field: ";
    /// Prefix for category lookup failures
    pub const INVALID_VALUE_PREFIX: &str = "Invalid value: ";
    /// Generic message for model-layer failures
    pub const PREDICTION_FAILED: &str = "Prediction failed";
}

/// Endpoints
pub mod endpoints {
    /// Liveness probe
    pub const HEALTH: &str = "/";
    /// Prediction endpoint
    pub const PREDICT: &str = "/predict";
}
