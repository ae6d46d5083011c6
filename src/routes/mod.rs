// ABOUTME: Route module organization for the inference service HTTP endpoints
// ABOUTME: Health and prediction routes with thin handlers delegating to the service context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the inference pipeline.

/// Health check route
pub mod health;
/// Prediction route
pub mod predict;

/// Health route handlers
pub use health::HealthRoutes;
/// Prediction route handlers
pub use predict::PredictRoutes;
