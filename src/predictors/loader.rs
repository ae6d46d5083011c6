// ABOUTME: All-or-nothing startup loading of the calorie, diet and workout model artifacts
// ABOUTME: Verifies model roles, input schema, encoder codes and encoder versions before serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Loader
//!
//! The service never starts with a partial model set. [`ModelLoader::load`]
//! either returns all three predictors, each checked against the feature
//! schema and the fitted encoder, or a [`StartupError`] naming the first
//! artifact that failed.

use super::{EncoderArtifact, ModelArtifact, OutputKind, Predictor};
use crate::constants::defaults;
use calorie_ml_core::constants::fields;
use calorie_ml_core::mapping::MappingMismatch;
use calorie_ml_core::{CategoryMapping, FeatureSchema};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// The three models the service serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRole {
    /// Daily calorie regressor
    Calorie,
    /// Diet category classifier
    Diet,
    /// Workout intensity classifier
    Workout,
}

impl ModelRole {
    /// Output the role requires
    #[must_use]
    pub const fn expected_output(self) -> OutputKind {
        match self {
            Self::Calorie => OutputKind::Continuous,
            Self::Diet | Self::Workout => OutputKind::Class,
        }
    }

    /// Dataset column the model was trained to predict
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Calorie => fields::CALORIES,
            Self::Diet => fields::DIET_TYPE,
            Self::Workout => fields::WORKOUT_TYPE,
        }
    }
}

impl fmt::Display for ModelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calorie => write!(f, "calorie model"),
            Self::Diet => write!(f, "diet model"),
            Self::Workout => write!(f, "workout model"),
        }
    }
}

/// Fatal startup failures; the process exits instead of serving
#[derive(Debug, Error)]
pub enum StartupError {
    /// Artifact file does not exist
    #[error("{artifact} artifact not found at {}", path.display())]
    ArtifactMissing {
        /// Which artifact
        artifact: String,
        /// Expected location
        path: PathBuf,
    },
    /// Artifact file exists but cannot be read
    #[error("failed to read {artifact} artifact at {}", path.display())]
    ArtifactRead {
        /// Which artifact
        artifact: String,
        /// Location
        path: PathBuf,
        /// I/O cause
        #[source]
        source: std::io::Error,
    },
    /// Artifact is not valid for its format
    #[error("failed to deserialize {artifact} artifact at {}", path.display())]
    ArtifactDecode {
        /// Which artifact
        artifact: String,
        /// Location
        path: PathBuf,
        /// Decode cause
        #[source]
        source: serde_json::Error,
    },
    /// Artifact decoded but is structurally broken
    #[error("{role} artifact is malformed: {reason}")]
    MalformedModel {
        /// Which model
        role: ModelRole,
        /// Defect
        reason: String,
    },
    /// Regressor loaded where a classifier is required, or vice versa
    #[error("{role} must produce {expected} output, artifact produces {found}")]
    WrongOutputKind {
        /// Which model
        role: ModelRole,
        /// Required output
        expected: OutputKind,
        /// Artifact output
        found: OutputKind,
    },
    /// Model input columns differ from the feature schema
    #[error("{role} does not match the feature schema: {reason}")]
    SchemaMismatch {
        /// Which model
        role: ModelRole,
        /// First difference
        reason: String,
    },
    /// Serving category codes differ from the fitted encoder
    #[error("category mapping does not match the fitted encoder: {0}")]
    EncoderMismatch(#[from] MappingMismatch),
    /// Model trained against a different encoder version
    #[error("{role} was trained with encoder version {model_version}, loaded encoder is version {encoder_version}")]
    EncoderVersionMismatch {
        /// Which model
        role: ModelRole,
        /// Version recorded in the model artifact
        model_version: u32,
        /// Version of the loaded encoder
        encoder_version: u32,
    },
    /// Classifier can emit a code the encoder never produced
    #[error("{role} emits class {class} which is not a {target} code")]
    UnknownClass {
        /// Which model
        role: ModelRole,
        /// Offending class code
        class: i64,
        /// Target column
        target: &'static str,
    },
}

/// Locations of the four startup artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Calorie regressor
    pub calorie: PathBuf,
    /// Diet classifier
    pub diet: PathBuf,
    /// Workout classifier
    pub workout: PathBuf,
    /// Fitted encoder
    pub encoder: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside one directory
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            calorie: dir.join(defaults::CALORIE_MODEL_FILE),
            diet: dir.join(defaults::DIET_MODEL_FILE),
            workout: dir.join(defaults::WORKOUT_MODEL_FILE),
            encoder: dir.join(defaults::ENCODER_FILE),
        }
    }

    /// Location of a model artifact
    #[must_use]
    pub fn model(&self, role: ModelRole) -> &Path {
        match role {
            ModelRole::Calorie => &self.calorie,
            ModelRole::Diet => &self.diet,
            ModelRole::Workout => &self.workout,
        }
    }
}

/// Loaded predictors, immutable for the process lifetime
#[derive(Clone)]
pub struct ModelSet {
    calorie: Arc<dyn Predictor>,
    diet: Arc<dyn Predictor>,
    workout: Arc<dyn Predictor>,
}

impl ModelSet {
    /// Assemble a set from already checked predictors
    #[must_use]
    pub fn new(
        calorie: Arc<dyn Predictor>,
        diet: Arc<dyn Predictor>,
        workout: Arc<dyn Predictor>,
    ) -> Self {
        Self {
            calorie,
            diet,
            workout,
        }
    }

    /// Predictor for a role
    #[must_use]
    pub fn get(&self, role: ModelRole) -> &dyn Predictor {
        match role {
            ModelRole::Calorie => self.calorie.as_ref(),
            ModelRole::Diet => self.diet.as_ref(),
            ModelRole::Workout => self.workout.as_ref(),
        }
    }
}

impl fmt::Debug for ModelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSet")
            .field("calorie", &self.calorie.output_kind())
            .field("diet", &self.diet.output_kind())
            .field("workout", &self.workout.output_kind())
            .finish()
    }
}

/// Loads and cross-checks the startup artifacts
#[derive(Debug, Clone)]
pub struct ModelLoader {
    schema: FeatureSchema,
    mapping: CategoryMapping,
}

impl ModelLoader {
    /// Loader checking against the given schema and mapping
    #[must_use]
    pub const fn new(schema: FeatureSchema, mapping: CategoryMapping) -> Self {
        Self { schema, mapping }
    }

    /// Load the encoder and all three models
    ///
    /// # Errors
    ///
    /// Returns the first [`StartupError`] encountered; no partial set is
    /// ever returned.
    pub fn load(&self, paths: &ArtifactPaths) -> Result<ModelSet, StartupError> {
        let encoder: EncoderArtifact = read_json("encoder", &paths.encoder)?;
        self.mapping.verify_against(&encoder.features)?;
        info!(
            version = encoder.version,
            path = %paths.encoder.display(),
            "encoder artifact verified"
        );

        let calorie = self.load_model(ModelRole::Calorie, paths, &encoder)?;
        let diet = self.load_model(ModelRole::Diet, paths, &encoder)?;
        let workout = self.load_model(ModelRole::Workout, paths, &encoder)?;

        Ok(ModelSet::new(calorie, diet, workout))
    }

    fn load_model(
        &self,
        role: ModelRole,
        paths: &ArtifactPaths,
        encoder: &EncoderArtifact,
    ) -> Result<Arc<dyn Predictor>, StartupError> {
        let path = paths.model(role);
        let artifact: ModelArtifact = read_json(&role.to_string(), path)?;

        artifact
            .validate()
            .map_err(|reason| StartupError::MalformedModel { role, reason })?;

        if artifact.encoder_version != encoder.version {
            return Err(StartupError::EncoderVersionMismatch {
                role,
                model_version: artifact.encoder_version,
                encoder_version: encoder.version,
            });
        }

        self.check_predictor(role, &artifact, Some(encoder))?;

        info!(
            role = %role,
            kind = artifact.kind(),
            path = %path.display(),
            "model artifact loaded"
        );
        Ok(Arc::new(artifact))
    }

    /// Role, schema and target-code checks shared by every predictor
    ///
    /// # Errors
    ///
    /// Returns the [`StartupError`] describing the first failed check.
    pub fn check_predictor(
        &self,
        role: ModelRole,
        predictor: &dyn Predictor,
        encoder: Option<&EncoderArtifact>,
    ) -> Result<(), StartupError> {
        let found = predictor.output_kind();
        if found != role.expected_output() {
            return Err(StartupError::WrongOutputKind {
                role,
                expected: role.expected_output(),
                found,
            });
        }

        self.schema
            .check_feature_names(predictor.feature_names())
            .map_err(|reason| StartupError::SchemaMismatch { role, reason })?;

        let target = role.target();
        if let (Some(classes), Some(codes)) = (
            predictor.class_codes(),
            encoder.and_then(|e| e.target_codes(target)),
        ) {
            let known: Vec<i64> = codes.collect();
            if let Some(class) = classes.iter().find(|class| !known.contains(class)) {
                return Err(StartupError::UnknownClass {
                    role,
                    class: *class,
                    target,
                });
            }
        }

        debug!(role = %role, arity = self.schema.arity(), "predictor matches feature schema");
        Ok(())
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new(FeatureSchema::standard(), CategoryMapping::standard())
    }
}

fn read_json<T: DeserializeOwned>(artifact: &str, path: &Path) -> Result<T, StartupError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StartupError::ArtifactMissing {
                artifact: artifact.to_owned(),
                path: path.to_path_buf(),
            }
        } else {
            StartupError::ArtifactRead {
                artifact: artifact.to_owned(),
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|source| StartupError::ArtifactDecode {
        artifact: artifact.to_owned(),
        path: path.to_path_buf(),
        source,
    })
}
