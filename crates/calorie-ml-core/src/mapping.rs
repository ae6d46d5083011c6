// ABOUTME: Category-to-integer code tables for the categorical feature columns
// ABOUTME: Derived from the feature schema and cross-checked against the fitted encoder artifact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category mapping
//!
//! A category's code is its position in the schema domain:
//!
//! ```text
//! gender:         male=0, female=1
//! activity_level: low=0, moderate=1, high=2
//! goal:           weight_loss=0, muscle_gain=1, maintenance=2
//! ```
//!
//! Keys are matched exactly: no case folding and no trimming.

use crate::schema::FeatureSchema;
use std::collections::BTreeMap;
use thiserror::Error;

/// Difference between the serving mapping and a fitted encoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingMismatch {
    /// Encoder has no table for a categorical column
    #[error("encoder has no mapping for column '{field}'")]
    MissingColumn {
        /// Categorical column name
        field: String,
    },
    /// Encoder maps a column the schema does not treat as categorical
    #[error("encoder maps column '{field}' which is not a categorical feature")]
    UnexpectedColumn {
        /// Column name found in the encoder
        field: String,
    },
    /// A value is absent on one side or has a different code
    #[error("column '{field}' value '{value}': serving code {expected:?}, encoder code {found:?}")]
    CodeMismatch {
        /// Column name
        field: String,
        /// Category value
        value: String,
        /// Code the service would send
        expected: Option<u32>,
        /// Code the encoder produced
        found: Option<i64>,
    },
}

/// Codes for one categorical column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    field: &'static str,
    codes: BTreeMap<&'static str, u32>,
}

impl CategoryTable {
    /// Column this table encodes
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Code for a value, if it belongs to the domain
    #[must_use]
    pub fn code(&self, value: &str) -> Option<u32> {
        self.codes.get(value).copied()
    }

    /// Number of values in the domain
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True for an empty domain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(value, code)` pairs, sorted by value
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.codes.iter().map(|(value, code)| (*value, *code))
    }
}

/// Code tables for every categorical column, in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMapping {
    tables: Vec<CategoryTable>,
}

impl CategoryMapping {
    /// Build the tables from a schema's categorical domains
    #[must_use]
    pub fn from_schema(schema: &FeatureSchema) -> Self {
        let tables = schema
            .categorical_columns()
            .map(|column| CategoryTable {
                field: column.name,
                codes: column
                    .domain
                    .iter()
                    .zip(0u32..)
                    .map(|(value, code)| (*value, code))
                    .collect(),
            })
            .collect();
        Self { tables }
    }

    /// Mapping for [`FeatureSchema::standard`]
    #[must_use]
    pub fn standard() -> Self {
        Self::from_schema(&FeatureSchema::standard())
    }

    /// Table for a categorical column
    #[must_use]
    pub fn table(&self, field: &str) -> Option<&CategoryTable> {
        self.tables.iter().find(|table| table.field == field)
    }

    /// Code for `value` in column `field`
    #[must_use]
    pub fn code(&self, field: &str, value: &str) -> Option<u32> {
        self.table(field).and_then(|table| table.code(value))
    }

    /// All tables in schema order
    #[must_use]
    pub fn tables(&self) -> &[CategoryTable] {
        &self.tables
    }

    /// Require that a fitted encoder produces exactly these codes
    ///
    /// # Errors
    ///
    /// Returns the first [`MappingMismatch`] found, checking columns in
    /// schema order and values in sorted order.
    pub fn verify_against(
        &self,
        encoder: &BTreeMap<String, BTreeMap<String, i64>>,
    ) -> Result<(), MappingMismatch> {
        for table in &self.tables {
            let fitted = encoder
                .get(table.field)
                .ok_or_else(|| MappingMismatch::MissingColumn {
                    field: table.field.to_owned(),
                })?;

            for (value, code) in table.iter() {
                let found = fitted.get(value).copied();
                if found != Some(i64::from(code)) {
                    return Err(MappingMismatch::CodeMismatch {
                        field: table.field.to_owned(),
                        value: value.to_owned(),
                        expected: Some(code),
                        found,
                    });
                }
            }

            if let Some((value, code)) = fitted
                .iter()
                .find(|(value, _)| table.code(value).is_none())
            {
                return Err(MappingMismatch::CodeMismatch {
                    field: table.field.to_owned(),
                    value: value.clone(),
                    expected: None,
                    found: Some(*code),
                });
            }
        }

        if let Some(field) = encoder.keys().find(|field| self.table(field).is_none()) {
            return Err(MappingMismatch::UnexpectedColumn {
                field: field.clone(),
            });
        }

        tracing::debug!(columns = self.tables.len(), "category mapping matches encoder");
        Ok(())
    }
}

impl Default for CategoryMapping {
    fn default() -> Self {
        Self::standard()
    }
}
