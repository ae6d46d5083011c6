// ABOUTME: Versioned label-encoder artifact produced by the offline encoding step
// ABOUTME: Carries the fitted feature and target code tables that trained models depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column name to `value -> code` table
pub type CodeTables = BTreeMap<String, BTreeMap<String, i64>>;

/// Fitted encoder shared by training and serving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderArtifact {
    /// Bumped whenever any table changes; models record the version they saw
    pub version: u32,
    /// Tables for categorical input columns
    pub features: CodeTables,
    /// Tables for classification targets (`diet_type`, `workout_type`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: CodeTables,
}

impl EncoderArtifact {
    /// Codes defined for a target column, if the encoder carries it
    #[must_use]
    pub fn target_codes(&self, target: &str) -> Option<impl Iterator<Item = i64> + '_> {
        self.targets.get(target).map(|table| table.values().copied())
    }
}
