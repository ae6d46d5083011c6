// ABOUTME: Server binary for the calorie, diet and workout inference service
// ABOUTME: Loads configuration and model artifacts, then serves the HTTP API until shutdown
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Calorie ML Service Binary
//!
//! Starts the inference service. Every artifact is loaded and cross-checked
//! before the listener binds; any failure aborts startup with a non-zero exit.

use anyhow::Result;
use calorie_ml_service::{
    config::ServiceConfig,
    constants::endpoints,
    context::ServiceContext,
    logging, server,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "calorie-ml-service")]
#[command(about = "Calorie ML Service - calorie, diet and workout predictions over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override the model artifact directory
    #[arg(long)]
    model_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env may set RUST_LOG, so it is read before the subscriber starts
    let dotenv = dotenvy::dotenv();
    logging::init_from_env()?;
    if let Err(e) = dotenv {
        warn!("No .env file found or failed to load: {e}");
    }

    // Load configuration from environment
    let mut config = ServiceConfig::from_env()?;

    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(model_dir) = args.model_dir {
        config.artifacts.model_dir = model_dir;
    }
    config.validate()?;

    info!("Starting Calorie ML Service");
    info!("{}", config.summary());

    let context = match ServiceContext::load(&config.artifacts.paths()) {
        Ok(context) => Arc::new(context),
        Err(e) => {
            error!("Model artifacts failed to load: {e}");
            return Err(e.into());
        }
    };

    display_available_endpoints(&config);

    if let Err(e) = server::run(&config, context).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServiceConfig) {
    let base = format!("http://{}", config.bind_addr());
    info!("=== Available API Endpoints ===");
    info!("  Health: GET  {base}{}", endpoints::HEALTH);
    info!("  Predict: POST {base}{}", endpoints::PREDICT);
}
