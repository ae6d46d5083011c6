// ABOUTME: Validation gate for untrusted biometric prediction payloads
// ABOUTME: Checks field presence, category domains and numeric types before any model runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Validator
//!
//! Checks run in a fixed order so error messages are reproducible:
//!
//! 1. the body is a JSON object (an array or string body has no fields and
//!    fails the presence check)
//! 2. every schema field is present (first missing field in schema order wins;
//!    `null` counts as present)
//! 3. every categorical value is a key of its mapping
//! 4. every numeric value is a JSON number
//!
//! Only this module can construct a [`ValidatedRequest`], which is what makes
//! feature construction infallible.

use super::errors::InferenceError;
use calorie_ml_core::{CategoryMapping, ColumnKind, FeatureSchema};
use serde_json::{Map, Value};

/// One schema column of a validated request
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Cell {
    /// Numeric value, passed through verbatim
    Numeric(f64),
    /// Category code resolved through the mapping
    Category(u32),
}

/// A payload that passed every check, one cell per schema column
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    cells: Vec<Cell>,
}

impl ValidatedRequest {
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Parse and validate a raw request body
///
/// # Errors
///
/// Returns `PredictionFailed` for a body that is not valid JSON, then the
/// first failure of [`validate`].
pub fn validate_body(
    body: &[u8],
    schema: &FeatureSchema,
    mapping: &CategoryMapping,
) -> Result<ValidatedRequest, InferenceError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| InferenceError::prediction_failed(format!("invalid JSON body: {e}")))?;
    validate(&payload, schema, mapping)
}

/// Validate a decoded payload against the schema and mapping
///
/// # Errors
///
/// Returns `MissingField` (also for an array or string body), `InvalidCategory`
/// or, for a number, boolean or `null` body or a non-numeric numeric field,
/// `PredictionFailed`.
pub fn validate(
    payload: &Value,
    schema: &FeatureSchema,
    mapping: &CategoryMapping,
) -> Result<ValidatedRequest, InferenceError> {
    let no_fields = Map::new();
    let object = match payload {
        Value::Object(object) => object,
        // Arrays and strings have no named fields, so the presence check reports them.
        Value::Array(_) | Value::String(_) => &no_fields,
        other => {
            return Err(InferenceError::prediction_failed(format!(
                "request body must be a JSON object, got {}",
                json_type(other)
            )))
        }
    };

    let values = schema
        .required_fields()
        .map(|field| {
            object
                .get(field)
                .ok_or(InferenceError::MissingField { field })
        })
        .collect::<Result<Vec<&Value>, _>>()?;

    let mut cells = Vec::with_capacity(schema.arity());
    let mut type_mismatch = None;

    for (column, value) in schema.columns().iter().zip(values) {
        match column.kind {
            ColumnKind::Categorical => {
                let code = value
                    .as_str()
                    .and_then(|category| mapping.code(column.name, category))
                    .ok_or_else(|| InferenceError::InvalidCategory {
                        field: column.name,
                        value: render_value(value),
                    })?;
                cells.push(Cell::Category(code));
            }
            ColumnKind::Numeric => match value.as_f64() {
                Some(number) => cells.push(Cell::Numeric(number)),
                None => {
                    type_mismatch.get_or_insert_with(|| {
                        InferenceError::prediction_failed(format!(
                            "field '{}' must be a number, got {}",
                            column.name,
                            json_type(value)
                        ))
                    });
                }
            },
        }
    }

    // Category errors take precedence over numeric type errors.
    if let Some(error) = type_mismatch {
        return Err(error);
    }

    Ok(ValidatedRequest { cells })
}

/// Strings in single quotes, anything else as compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
