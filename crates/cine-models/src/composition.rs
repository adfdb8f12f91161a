//! Composition profile models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::clamp_score;

/// Framing characteristics of a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompositionProfile {
    /// Combined composition heuristic, [0, 100]
    pub score: f64,

    /// Strong edges align with thirds lines
    pub rule_of_thirds: bool,

    /// Mirrored-half correlation above threshold
    pub symmetry: bool,

    /// Directionally coherent edge field
    pub leading_lines: bool,

    /// Distinct luminance depth layers, 1..=5
    pub depth_layers: u32,
}

impl CompositionProfile {
    pub fn new(
        score: f64,
        rule_of_thirds: bool,
        symmetry: bool,
        leading_lines: bool,
        depth_layers: u32,
    ) -> Self {
        Self {
            score: clamp_score(score),
            rule_of_thirds,
            symmetry,
            leading_lines,
            depth_layers,
        }
    }

    /// Neutral profile returned for degenerate input.
    pub fn neutral() -> Self {
        Self {
            score: 50.0,
            rule_of_thirds: false,
            symmetry: false,
            leading_lines: false,
            depth_layers: 1,
        }
    }

    /// Number of composition techniques detected.
    pub fn technique_count(&self) -> u32 {
        [self.rule_of_thirds, self.symmetry, self.leading_lines]
            .iter()
            .filter(|&&flag| flag)
            .count() as u32
    }
}
