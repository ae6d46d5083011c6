// ABOUTME: Configuration management module for service settings
// ABOUTME: Loads bind address, artifact locations and HTTP limits from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: Service configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{parse_origins, ArtifactConfig, Environment, HttpConfig, ServiceConfig};
