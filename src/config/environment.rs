// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, artifact locations, network and HTTP limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_vars};
use crate::predictors::ArtifactPaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the startup artifacts live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactConfig {
    /// Directory holding all artifacts
    pub model_dir: PathBuf,
    /// Calorie regressor file name
    pub calorie_model_file: String,
    /// Diet classifier file name
    pub diet_model_file: String,
    /// Workout classifier file name
    pub workout_model_file: String,
    /// Fitted encoder file name
    pub encoder_file: String,
}

impl ArtifactConfig {
    /// Resolve full artifact paths
    #[must_use]
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            calorie: self.model_dir.join(&self.calorie_model_file),
            diet: self.model_dir.join(&self.diet_model_file),
            workout: self.model_dir.join(&self.workout_model_file),
            encoder: self.model_dir.join(&self.encoder_file),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(defaults::MODEL_DIR),
            calorie_model_file: defaults::CALORIE_MODEL_FILE.to_owned(),
            diet_model_file: defaults::DIET_MODEL_FILE.to_owned(),
            workout_model_file: defaults::WORKOUT_MODEL_FILE.to_owned(),
            encoder_file: defaults::ENCODER_FILE.to_owned(),
        }
    }
}

/// HTTP layer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    /// Comma-separated allowed origins, or `*`
    pub cors_allowed_origins: String,
    /// Maximum accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: "*".to_owned(),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Bind address
    pub host: IpAddr,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Artifact locations
    pub artifacts: ArtifactConfig,
    /// HTTP layer settings
    pub http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            artifacts: ArtifactConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails [`ServiceConfig::validate`].
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST)
                .parse()
                .context("Invalid HOST value")?,
            http_port: env_var_or(env_vars::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            artifacts: ArtifactConfig {
                model_dir: PathBuf::from(env_var_or(env_vars::MODEL_DIR, defaults::MODEL_DIR)),
                calorie_model_file: env_var_or(
                    env_vars::CALORIE_MODEL_FILE,
                    defaults::CALORIE_MODEL_FILE,
                ),
                diet_model_file: env_var_or(env_vars::DIET_MODEL_FILE, defaults::DIET_MODEL_FILE),
                workout_model_file: env_var_or(
                    env_vars::WORKOUT_MODEL_FILE,
                    defaults::WORKOUT_MODEL_FILE,
                ),
                encoder_file: env_var_or(env_vars::ENCODER_FILE, defaults::ENCODER_FILE),
            },
            http: HttpConfig {
                cors_allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
                max_body_bytes: env_var_or(
                    env_vars::MAX_BODY_BYTES,
                    &defaults::MAX_BODY_BYTES.to_string(),
                )
                .parse()
                .context("Invalid MAX_BODY_BYTES value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port or a zero body limit.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be non-zero"));
        }
        if self.http.max_body_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_BODY_BYTES must be non-zero"));
        }
        if self.environment.is_production() && self.http.cors_allowed_origins == "*" {
            warn!("CORS allows any origin in production");
        }
        Ok(())
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Human readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Calorie ML Service Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Model Directory: {}\n\
             - Artifacts: {}, {}, {}, {}\n\
             - CORS Origins: {}\n\
             - Max Body Bytes: {}",
            self.bind_addr(),
            self.environment,
            self.artifacts.model_dir.display(),
            self.artifacts.calorie_model_file,
            self.artifacts.diet_model_file,
            self.artifacts.workout_model_file,
            self.artifacts.encoder_file,
            self.http.cors_allowed_origins,
            self.http.max_body_bytes,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
#[must_use]
pub fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
