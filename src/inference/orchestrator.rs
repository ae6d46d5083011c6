// ABOUTME: Runs the calorie, diet and workout models on one feature vector
// ABOUTME: Truncates the calorie estimate, casts class codes and reports failures without partial results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::InferenceError;
use crate::predictors::{ModelError, ModelRole, ModelSet};
use calorie_ml_core::FeatureVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Response body of a successful prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Daily calorie target, truncated toward zero
    pub calories: i64,
    /// Encoded diet category
    pub diet_type: i64,
    /// Encoded workout intensity
    pub workout_type: i64,
}

/// Invoke all three models; any failure discards the others' results
///
/// # Errors
///
/// Returns `PredictionFailed` naming the failing model and its cause.
pub fn predict(
    models: &ModelSet,
    features: &FeatureVector,
) -> Result<PredictionResult, InferenceError> {
    let calories = invoke(models, ModelRole::Calorie, features)?;
    let diet_type = invoke(models, ModelRole::Diet, features)?;
    let workout_type = invoke(models, ModelRole::Workout, features)?;

    Ok(PredictionResult {
        calories,
        diet_type,
        workout_type,
    })
}

fn invoke(
    models: &ModelSet,
    role: ModelRole,
    features: &FeatureVector,
) -> Result<i64, InferenceError> {
    let raw = models
        .get(role)
        .predict(features)
        .and_then(to_integer)
        .map_err(|e| InferenceError::prediction_failed(format!("{role}: {e}")))?;

    debug!(role = %role, value = raw, "model invoked");
    Ok(raw)
}

/// 2^63, the first value past `i64::MAX`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncate toward zero, matching the integer cast applied to the
/// calorie column when the training data was generated
fn to_integer(value: f64) -> Result<i64, ModelError> {
    if !value.is_finite() {
        return Err(ModelError::NonFiniteOutput { value });
    }
    let truncated = value.trunc();
    if truncated < -I64_BOUND || truncated >= I64_BOUND {
        return Err(ModelError::OutOfRange { value });
    }
    Ok(truncated as i64)
}
