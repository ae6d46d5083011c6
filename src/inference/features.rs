// ABOUTME: Feature vector construction from a validated request
// ABOUTME: Emits numeric passthrough values and category codes in fixed schema column order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::request::{Cell, ValidatedRequest};
use calorie_ml_core::schema::FEATURE_COUNT;
use calorie_ml_core::FeatureVector;

/// Build `[age, height_cm, weight_kg, gender_code, activity_code, goal_code, bmi]`
#[must_use]
pub fn build_feature_vector(request: &ValidatedRequest) -> FeatureVector {
    let mut values = [0.0; FEATURE_COUNT];
    for (slot, cell) in values.iter_mut().zip(request.cells()) {
        *slot = match *cell {
            Cell::Numeric(value) => value,
            Cell::Category(code) => f64::from(code),
        };
    }
    FeatureVector::new(values)
}
