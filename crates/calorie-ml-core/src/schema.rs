// ABOUTME: Ordered feature schema describing the 7-column model input
// ABOUTME: Single source of truth for column order, semantic type and category domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feature schema
//!
//! Every model is trained against, and served with, the column list returned by
//! [`FeatureSchema::standard`]. Reordering columns or changing a domain here
//! changes what the trained models see, so artifacts record the column names
//! they were fitted on and the loader compares them against this schema.

use crate::constants::{domains, fields};
use serde::{Deserialize, Serialize};

/// Number of model input columns
pub const FEATURE_COUNT: usize = 7;

/// Semantic type of a schema column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Passed through verbatim
    Numeric,
    /// Replaced by its integer category code
    Categorical,
}

/// One column of the feature schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Field name in requests and in the training dataset
    pub name: &'static str,
    /// Semantic type
    pub kind: ColumnKind,
    /// Category values in code order (empty for numeric columns)
    pub domain: &'static [&'static str],
}

impl ColumnSpec {
    const fn numeric(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Numeric,
            domain: &[],
        }
    }

    const fn categorical(name: &'static str, domain: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: ColumnKind::Categorical,
            domain,
        }
    }

    /// Whether this column is categorical
    #[must_use]
    pub fn is_categorical(&self) -> bool {
        self.kind == ColumnKind::Categorical
    }
}

const STANDARD_COLUMNS: [ColumnSpec; FEATURE_COUNT] = [
    ColumnSpec::numeric(fields::AGE),
    ColumnSpec::numeric(fields::HEIGHT_CM),
    ColumnSpec::numeric(fields::WEIGHT_KG),
    ColumnSpec::categorical(fields::GENDER, &domains::GENDER),
    ColumnSpec::categorical(fields::ACTIVITY_LEVEL, &domains::ACTIVITY_LEVEL),
    ColumnSpec::categorical(fields::GOAL, &domains::GOAL),
    ColumnSpec::numeric(fields::BMI),
];

/// Ordered list of model input columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: &'static [ColumnSpec; FEATURE_COUNT],
}

impl FeatureSchema {
    /// The schema the calorie, diet and workout models are trained on
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            columns: &STANDARD_COLUMNS,
        }
    }

    /// Columns in model input order
    #[must_use]
    pub fn columns(&self) -> &'static [ColumnSpec] {
        self.columns
    }

    /// Number of input columns every model must accept
    #[must_use]
    pub const fn arity(&self) -> usize {
        FEATURE_COUNT
    }

    /// Field names a request must carry, in the order they are checked
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|column| column.name)
    }

    /// Categorical columns in schema order
    pub fn categorical_columns(&self) -> impl Iterator<Item = &'static ColumnSpec> {
        self.columns.iter().filter(|column| column.is_categorical())
    }

    /// Position of a column by name
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Compare a model's recorded input columns against this schema
    ///
    /// # Errors
    ///
    /// Returns a description of the first difference when the names differ
    /// in count or order.
    pub fn check_feature_names<S: AsRef<str>>(&self, names: &[S]) -> Result<(), String> {
        if names.len() != self.arity() {
            return Err(format!(
                "expected {} input columns, artifact declares {}",
                self.arity(),
                names.len()
            ));
        }
        for (index, (column, name)) in self.columns.iter().zip(names).enumerate() {
            if column.name != name.as_ref() {
                return Err(format!(
                    "column {index} is '{}' in the artifact but '{}' in the schema",
                    name.as_ref(),
                    column.name
                ));
            }
        }
        Ok(())
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::standard()
    }
}

/// Model input row in schema column order:
/// `[age, height_cm, weight_kg, gender_code, activity_code, goal_code, bmi]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Wrap an already ordered row
    #[must_use]
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Values in column order
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value at a column index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Number of columns
    #[must_use]
    pub const fn len(&self) -> usize {
        FEATURE_COUNT
    }

    /// Always false; present for API symmetry with `len`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}
