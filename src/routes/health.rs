// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness once every model artifact has loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check route
//!
//! The router only exists after startup loading succeeded, so answering at
//! all means the service is ready.

use crate::constants::{endpoints, messages};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({ "status": messages::SERVICE_RUNNING }))
        }

        Router::new().route(endpoints::HEALTH, get(health_handler))
    }
}
