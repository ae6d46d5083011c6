// ABOUTME: Predictor abstraction and the concrete model types served by the service
// ABOUTME: Defines the Predictor trait, model output kinds and per-invocation model errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Predictors
//!
//! The service treats each trained model as an opaque [`Predictor`]: it takes
//! one [`FeatureVector`] and returns one number. Regressors return a continuous
//! value, classifiers return their integer class code.
//!
//! Model artifacts are JSON documents tagged by `kind` (see [`artifact`]) and
//! are loaded once at startup by [`loader::ModelLoader`].

/// Serialized model artifact format
pub mod artifact;
/// Fitted label-encoder artifact
pub mod encoder;
/// Ordinary least squares regressor
pub mod linear;
/// Startup loading and consistency checks
pub mod loader;
/// CART decision tree classifier
pub mod tree;

pub use artifact::ModelArtifact;
pub use encoder::EncoderArtifact;
pub use linear::LinearRegressor;
pub use loader::{ArtifactPaths, ModelLoader, ModelRole, ModelSet, StartupError};
pub use tree::{DecisionTreeClassifier, TreeNode};

use calorie_ml_core::FeatureVector;
use std::fmt;
use thiserror::Error;

/// What a predictor's output value means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// A continuous estimate (calories)
    Continuous,
    /// An integer class code (diet type, workout type)
    Class,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous => write!(f, "continuous"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// Failure of a single model invocation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Input row does not have the width the model was fitted on
    #[error("model expects {expected} features, received {found}")]
    ArityMismatch {
        /// Width the model was fitted on
        expected: usize,
        /// Width of the received row
        found: usize,
    },
    /// Tree traversal reached a node that does not exist
    #[error("decision tree references missing node {node}")]
    MissingNode {
        /// Offending node index
        node: usize,
    },
    /// The model produced NaN or an infinity
    #[error("model produced a non-finite value: {value}")]
    NonFiniteOutput {
        /// The produced value
        value: f64,
    },
    /// The model produced a finite value outside the 64-bit integer range
    #[error("model output {value} does not fit a 64-bit integer")]
    OutOfRange {
        /// The produced value
        value: f64,
    },
}

/// A trained model, shared read-only across concurrent requests
pub trait Predictor: Send + Sync {
    /// Meaning of the value returned by [`Predictor::predict`]
    fn output_kind(&self) -> OutputKind;

    /// Input column names the model was fitted on, in order
    fn feature_names(&self) -> &[String];

    /// Class codes the model can emit (classifiers only)
    fn class_codes(&self) -> Option<&[i64]> {
        None
    }

    /// Predict one row
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] when the row cannot be scored.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}
