//! Classification result models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::metrics::clamp_score;

/// Cultural context used for rule weighting and localization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Culture {
    /// Default Western framing, English-primary localization
    #[default]
    Western,
    /// Arabic framing, warm-leaning weights, Arabic-primary localization
    Arabic,
}

impl Culture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Western => "western",
            Self::Arabic => "arabic",
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Culture {
    type Err = CultureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "western" => Ok(Self::Western),
            "arabic" => Ok(Self::Arabic),
            _ => Err(CultureParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown culture: {0}")]
pub struct CultureParseError(String);

/// The four classification taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    Mood,
    Energy,
    ShotType,
    Genre,
}

impl Taxonomy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Energy => "energy",
            Self::ShotType => "shot_type",
            Self::Genre => "genre",
        }
    }
}

/// Label pair in the primary and secondary localization languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocalizedLabel {
    pub primary: String,
    pub secondary: String,
}

impl LocalizedLabel {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// A runner-up label with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlternativeLabel {
    pub label: String,
    pub confidence: f64,
}

impl AlternativeLabel {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence: clamp_score(confidence),
        }
    }
}

/// Winning label for one taxonomy, with confidence, runners-up,
/// localization and explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationResult {
    /// Winning catalog label
    pub label: String,

    /// Normalized composite score, [0, 100]
    pub confidence: f64,

    /// Runners-up, strictly decreasing confidence, never containing `label`
    pub alternatives: Vec<AlternativeLabel>,

    /// Localized label pair for the active culture
    pub localized: LocalizedLabel,

    /// Human-readable match explanation, generated from the matched
    /// condition objects
    pub explanation: String,

    /// Short cultural framing note for the active culture
    pub cultural_context: String,
}

impl ClassificationResult {
    pub fn new(
        label: impl Into<String>,
        confidence: f64,
        alternatives: Vec<AlternativeLabel>,
        localized: LocalizedLabel,
        explanation: impl Into<String>,
        cultural_context: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            confidence: clamp_score(confidence),
            alternatives,
            localized,
            explanation: explanation.into(),
            cultural_context: cultural_context.into(),
        }
    }
}

/// Structured audit payload describing how each taxonomy was decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct Explainability {
    /// Per-taxonomy matched-condition strings for the winning rule
    pub matched_conditions: BTreeMap<String, Vec<String>>,

    /// Named confidence factors, e.g. `mood_complexity`
    pub confidence_factors: BTreeMap<String, f64>,
}

/// Full four-taxonomy classification of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CinematicIntelligence {
    pub mood: ClassificationResult,
    pub energy: ClassificationResult,
    pub shot_type: ClassificationResult,
    pub genre: ClassificationResult,

    /// Version tag of the rule catalogs that produced this result
    pub catalog_version: String,

    /// Culture the classification was produced under
    pub culture: Culture,

    pub explainability: Explainability,
}
