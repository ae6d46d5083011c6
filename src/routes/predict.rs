// ABOUTME: Prediction route handler turning biometric payloads into calorie, diet and workout predictions
// ABOUTME: Delegates validation and scoring to the service context and maps failures to HTTP errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction routes
//!
//! The body is taken as raw bytes so that malformed JSON is reported through
//! the same error envelope as every other prediction failure.

use crate::constants::endpoints;
use crate::context::ServiceContext;
use crate::inference::PredictionResult;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use calorie_ml_core::errors::AppError;
use std::sync::Arc;
use tracing::info;

/// Prediction routes
pub struct PredictRoutes;

impl PredictRoutes {
    /// Create the prediction route
    pub fn routes(context: Arc<ServiceContext>) -> Router {
        Router::new()
            .route(endpoints::PREDICT, post(Self::handle_predict))
            .with_state(context)
    }

    /// Handle `POST /predict`
    #[allow(clippy::unused_async)] // axum handlers must be async
    async fn handle_predict(
        State(context): State<Arc<ServiceContext>>,
        body: Bytes,
    ) -> Result<Json<PredictionResult>, AppError> {
        let result = context.predict_body(&body)?;

        info!(
            calories = result.calories,
            diet_type = result.diet_type,
            workout_type = result.workout_type,
            "prediction served"
        );
        Ok(Json(result))
    }
}
