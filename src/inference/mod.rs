// ABOUTME: Inference pipeline from raw biometric payload to structured prediction
// ABOUTME: Composes the request validator, feature vector builder and prediction orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Inference
//!
//! `raw payload -> validate -> build feature vector -> three model calls -> result`
//!
//! Validation failures are reported before any model is touched. The whole
//! pipeline is synchronous, so once scoring starts it runs to completion.

/// Per-request error taxonomy
pub mod errors;
/// Feature vector builder
pub mod features;
/// Model invocation and response assembly
pub mod orchestrator;
/// Request validator
pub mod request;

pub use errors::InferenceError;
pub use features::build_feature_vector;
pub use orchestrator::{predict, PredictionResult};
pub use request::{validate, validate_body, ValidatedRequest};
