// ABOUTME: Core types and constants for the calorie ML inference service
// ABOUTME: Foundation crate with error handling, feature schema, category mapping and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie ML Core
//!
//! Foundation crate shared by the offline training pipeline and the online
//! inference service. Anything both phases must agree on lives here, so the
//! two can never drift through hand-maintained copies.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and HTTP responses
//! - **constants**: Service names, field names and wire messages
//! - **schema**: Ordered feature schema and the `FeatureVector` it describes
//! - **mapping**: Category-to-code tables derived from the schema

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Ordered feature schema shared by training and serving
pub mod schema;

/// Categorical value to integer code mapping
pub mod mapping;

pub use mapping::{CategoryMapping, CategoryTable};
pub use schema::{ColumnKind, ColumnSpec, FeatureSchema, FeatureVector};
