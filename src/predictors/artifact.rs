// ABOUTME: On-disk JSON format of trained model artifacts
// ABOUTME: Tags each artifact with its model kind and the encoder version it was trained against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Model artifact format
//!
//! ```json
//! {
//!   "kind": "linear_regression",
//!   "encoder_version": 1,
//!   "feature_names": ["age", "height_cm", "weight_kg", "gender", "activity_level", "goal", "bmi"],
//!   "coefficients": [-5.0, 6.25, 10.0, 166.0, 350.0, 400.0, 0.0],
//!   "intercept": -161.0
//! }
//! ```

use super::{DecisionTreeClassifier, LinearRegressor, ModelError, OutputKind, Predictor};
use calorie_ml_core::FeatureVector;
use serde::{Deserialize, Serialize};

/// Concrete model carried by an artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Continuous regressor
    LinearRegression(LinearRegressor),
    /// Tree classifier
    DecisionTreeClassifier(DecisionTreeClassifier),
}

/// A serialized, pre-trained predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Version of the encoder artifact the model was trained against
    pub encoder_version: u32,
    /// The model itself
    #[serde(flatten)]
    pub model: ModelSpec,
}

impl ModelArtifact {
    /// Structural checks for the contained model
    ///
    /// # Errors
    ///
    /// Returns a description of the defect.
    pub fn validate(&self) -> Result<(), String> {
        match &self.model {
            ModelSpec::LinearRegression(model) => model.validate(),
            ModelSpec::DecisionTreeClassifier(model) => model.validate(),
        }
    }

    /// Artifact `kind` tag
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self.model {
            ModelSpec::LinearRegression(_) => "linear_regression",
            ModelSpec::DecisionTreeClassifier(_) => "decision_tree_classifier",
        }
    }
}

impl Predictor for ModelArtifact {
    fn output_kind(&self) -> OutputKind {
        match &self.model {
            ModelSpec::LinearRegression(model) => model.output_kind(),
            ModelSpec::DecisionTreeClassifier(model) => model.output_kind(),
        }
    }

    fn feature_names(&self) -> &[String] {
        match &self.model {
            ModelSpec::LinearRegression(model) => model.feature_names(),
            ModelSpec::DecisionTreeClassifier(model) => model.feature_names(),
        }
    }

    fn class_codes(&self) -> Option<&[i64]> {
        match &self.model {
            ModelSpec::LinearRegression(model) => model.class_codes(),
            ModelSpec::DecisionTreeClassifier(model) => model.class_codes(),
        }
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        match &self.model {
            ModelSpec::LinearRegression(model) => model.predict(features),
            ModelSpec::DecisionTreeClassifier(model) => model.predict(features),
        }
    }
}
