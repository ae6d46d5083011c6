// ABOUTME: Linear regression predictor used for the daily calorie estimate
// ABOUTME: Scores a feature row as intercept plus the coefficient-weighted sum of features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ModelError, OutputKind, Predictor};
use calorie_ml_core::FeatureVector;
use serde::{Deserialize, Serialize};

/// Fitted ordinary least squares model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// Input column names, in order
    pub feature_names: Vec<String>,
    /// One coefficient per input column
    pub coefficients: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

impl LinearRegressor {
    /// Structural checks run at load time
    ///
    /// # Errors
    ///
    /// Returns a description of the defect.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.len() != self.feature_names.len() {
            return Err(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                self.feature_names.len()
            ));
        }
        if let Some(index) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(format!("coefficient {index} is not finite"));
        }
        if !self.intercept.is_finite() {
            return Err("intercept is not finite".to_owned());
        }
        Ok(())
    }
}

impl Predictor for LinearRegressor {
    fn output_kind(&self) -> OutputKind {
        OutputKind::Continuous
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ArityMismatch {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }

        let value = self
            .coefficients
            .iter()
            .zip(features.as_slice())
            .fold(self.intercept, |acc, (coefficient, x)| {
                coefficient.mul_add(*x, acc)
            });

        Ok(value)
    }
}
