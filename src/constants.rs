// ABOUTME: Service-level constants: environment variable names and configuration defaults
// ABOUTME: Re-exports the shared field, domain and message constants from calorie-ml-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Shared wire constants live in `calorie_ml_core::constants`; this module adds
//! what only the service binary needs.

pub use calorie_ml_core::constants::{domains, endpoints, fields, messages, service_names};

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Artifact directory
    pub const MODEL_DIR: &str = "MODEL_DIR";
    /// Calorie regressor file name
    pub const CALORIE_MODEL_FILE: &str = "CALORIE_MODEL_FILE";
    /// Diet classifier file name
    pub const DIET_MODEL_FILE: &str = "DIET_MODEL_FILE";
    /// Workout classifier file name
    pub const WORKOUT_MODEL_FILE: &str = "WORKOUT_MODEL_FILE";
    /// Encoder artifact file name
    pub const ENCODER_FILE: &str = "ENCODER_FILE";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request body limit
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
}

/// Configuration defaults
pub mod defaults {
    /// Listen on every interface
    pub const HOST: &str = "0.0.0.0";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Artifact directory relative to the working directory
    pub const MODEL_DIR: &str = "models";
    /// Calorie regressor artifact
    pub const CALORIE_MODEL_FILE: &str = "calorie_model.json";
    /// Diet classifier artifact
    pub const DIET_MODEL_FILE: &str = "diet_model.json";
    /// Workout classifier artifact
    pub const WORKOUT_MODEL_FILE: &str = "workout_model.json";
    /// Fitted encoder artifact
    pub const ENCODER_FILE: &str = "encoders.json";
    /// 64 KiB
    pub const MAX_BODY_BYTES: usize = 64 * 1024;
}
