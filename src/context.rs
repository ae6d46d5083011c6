// ABOUTME: Immutable service context shared by every request handler
// ABOUTME: Bundles the feature schema, category mapping and loaded models built once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service context
//!
//! Constructed once, after every artifact has loaded, then handed to the
//! router as `Arc<ServiceContext>`. Nothing in it is mutated while serving.

use crate::inference::{self, InferenceError, PredictionResult};
use crate::predictors::{ArtifactPaths, ModelLoader, ModelSet, StartupError};
use calorie_ml_core::{CategoryMapping, FeatureSchema};
use tracing::{debug, info};

/// Read-only state for the `Ready` service
#[derive(Debug, Clone)]
pub struct ServiceContext {
    schema: FeatureSchema,
    mapping: CategoryMapping,
    models: ModelSet,
}

impl ServiceContext {
    /// Context over already loaded models with the standard schema
    #[must_use]
    pub fn new(models: ModelSet) -> Self {
        Self {
            schema: FeatureSchema::standard(),
            mapping: CategoryMapping::standard(),
            models,
        }
    }

    /// Load every artifact and build the context
    ///
    /// # Errors
    ///
    /// Returns a [`StartupError`] if any artifact is missing or inconsistent.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, StartupError> {
        let context = Self::new(ModelLoader::default().load(paths)?);
        info!(
            arity = context.schema.arity(),
            categorical_columns = context.mapping.tables().len(),
            "all model artifacts loaded"
        );
        Ok(context)
    }

    /// Feature schema
    #[must_use]
    pub const fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Category mapping
    #[must_use]
    pub const fn mapping(&self) -> &CategoryMapping {
        &self.mapping
    }

    /// Loaded models
    #[must_use]
    pub const fn models(&self) -> &ModelSet {
        &self.models
    }

    /// Run the full pipeline on a raw request body
    ///
    /// # Errors
    ///
    /// Returns the first [`InferenceError`] of validation or prediction.
    pub fn predict_body(&self, body: &[u8]) -> Result<PredictionResult, InferenceError> {
        let request = inference::validate_body(body, &self.schema, &self.mapping)?;
        let features = inference::build_feature_vector(&request);
        debug!(features = ?features.as_slice(), "feature vector built");
        inference::predict(&self.models, &features)
    }
}
