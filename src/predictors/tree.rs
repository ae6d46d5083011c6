// ABOUTME: Decision tree classifier used for the diet and workout recommendations
// ABOUTME: Walks a flat CART node array and returns the class code of the heaviest leaf weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Decision tree classifier
//!
//! Nodes are stored flat with the root at index 0. A split sends the row to
//! `left` when `x[feature] <= threshold`, otherwise to `right`. Children always
//! have a larger index than their parent, so traversal terminates.

use super::{ModelError, OutputKind, Predictor};
use calorie_ml_core::FeatureVector;
use serde::{Deserialize, Serialize};

/// One node of a fitted tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal node
    Split {
        /// Input column tested
        feature: usize,
        /// Go left when the value is less than or equal to this
        threshold: f64,
        /// Index of the left child
        left: usize,
        /// Index of the right child
        right: usize,
    },
    /// Terminal node
    Leaf {
        /// Weight per class, aligned with `classes`
        value: Vec<f64>,
    },
}

/// Fitted CART classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    /// Input column names, in order
    pub feature_names: Vec<String>,
    /// Class codes, aligned with every leaf's `value`
    pub classes: Vec<i64>,
    /// Flat node array, root first
    pub nodes: Vec<TreeNode>,
}

impl DecisionTreeClassifier {
    /// Structural checks run at load time
    ///
    /// # Errors
    ///
    /// Returns a description of the first defect found.
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("classifier declares no classes".to_owned());
        }
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_owned());
        }

        let arity = self.feature_names.len();
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= arity {
                        return Err(format!(
                            "node {index} splits on feature {feature}, model has {arity}"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {index} has a non-finite threshold"));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(format!(
                                "node {index} has out-of-order child {child} ({} nodes)",
                                self.nodes.len()
                            ));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != self.classes.len() {
                        return Err(format!(
                            "leaf {index} has {} weights for {} classes",
                            value.len(),
                            self.classes.len()
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_for<'a>(&'a self, features: &FeatureVector) -> Result<&'a [f64], ModelError> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = features
                        .get(*feature)
                        .ok_or(ModelError::ArityMismatch {
                            expected: self.feature_names.len(),
                            found: features.len(),
                        })?;
                    let next = if x <= *threshold { *left } else { *right };
                    if next <= index {
                        return Err(ModelError::MissingNode { node: next });
                    }
                    index = next;
                }
                Some(TreeNode::Leaf { value }) => return Ok(value),
                None => return Err(ModelError::MissingNode { node: index }),
            }
        }
    }
}

impl Predictor for DecisionTreeClassifier {
    fn output_kind(&self) -> OutputKind {
        OutputKind::Class
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn class_codes(&self) -> Option<&[i64]> {
        Some(&self.classes)
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.feature_names.len() {
            return Err(ModelError::ArityMismatch {
                expected: self.feature_names.len(),
                found: features.len(),
            });
        }

        let weights = self.leaf_for(features)?;

        // First maximum wins on ties.
        let mut best = 0;
        for (position, weight) in weights.iter().enumerate().skip(1) {
            if *weight > weights[best] {
                best = position;
            }
        }

        self.classes
            .get(best)
            .map(|class| *class as f64)
            .ok_or(ModelError::MissingNode { node: best })
    }
}
