// ABOUTME: HTTP server assembly and lifecycle for the inference service
// ABOUTME: Composes routes with tracing, request-id, body limit and CORS layers and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! [`build_router`] is separate from [`run`] so integration tests can drive
//! the complete middleware stack with `tower::ServiceExt::oneshot`.

use crate::config::ServiceConfig;
use crate::context::ServiceContext;
use crate::middleware::{request_id_layers, setup_cors, trace_layer};
use crate::routes::{HealthRoutes, PredictRoutes};
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

/// Build the application router with every middleware layer applied
pub fn build_router(config: &ServiceConfig, context: Arc<ServiceContext>) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    // The last layer added runs first: the request id exists before the span
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(PredictRoutes::routes(context))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.http.max_body_bytes))
        .layer(setup_cors(config))
        .layer(propagate_request_id)
        .layer(trace_layer())
        .layer(set_request_id)
}

/// Bind and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run(config: &ServiceConfig, context: Arc<ServiceContext>) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, build_router(config, context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
