// ABOUTME: Main library entry point for the calorie ML inference service
// ABOUTME: Provides the HTTP API for calorie, diet and workout predictions from biometric input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie ML Service
//!
//! A stateless HTTP service that scores one biometric payload against three
//! pre-trained models: a calorie regressor and diet and workout classifiers.
//!
//! ## Architecture
//!
//! - **Predictors**: Model artifacts, their evaluators and the startup loader
//! - **Inference**: Request validation, feature vector construction and orchestration
//! - **Context**: Immutable schema, mapping and models shared by all handlers
//! - **Routes**: `GET /` and `POST /predict`
//! - **Config**: Environment-based configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_ml_service::config::ServiceConfig;
//! use calorie_ml_service::context::ServiceContext;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServiceConfig::from_env()?;
//!     let context = ServiceContext::load(&config.artifacts.paths())?;
//!
//!     let result = context.predict_body(
//!         br#"{"age":25,"height_cm":180,"weight_kg":75,"gender":"male",
//!              "activity_level":"moderate","goal":"muscle_gain","bmi":23.15}"#,
//!     );
//!     println!("{result:?}");
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Service constants
pub mod constants;

/// Immutable service context
pub mod context;

/// Error types
pub mod errors;

/// Validation, feature construction and model orchestration
pub mod inference;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Model artifacts, evaluators and loading
pub mod predictors;

/// HTTP routes
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

pub use calorie_ml_core::{CategoryMapping, FeatureSchema, FeatureVector};
