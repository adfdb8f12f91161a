//! Lighting descriptors derived from frame metrics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall lighting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LightingStyle {
    /// Bright, low-contrast, few shadows
    HighKey,
    /// Dark, shadow-dominated
    LowKey,
    /// Balanced exposure
    Natural,
    /// High contrast with strong highlights and shadows
    Dramatic,
}

impl LightingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighKey => "high_key",
            Self::LowKey => "low_key",
            Self::Natural => "natural",
            Self::Dramatic => "dramatic",
        }
    }
}

impl fmt::Display for LightingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Apparent direction of the dominant light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LightDirection {
    Frontal,
    Side,
    Back,
    Top,
}

impl LightDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontal => "frontal",
            Self::Side => "side",
            Self::Back => "back",
            Self::Top => "top",
        }
    }
}

/// Perceived hardness of the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LightQuality {
    Hard,
    Soft,
    Diffused,
}

impl LightQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
            Self::Diffused => "diffused",
        }
    }
}

/// Lighting descriptors for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LightingProfile {
    pub style: LightingStyle,
    pub direction: LightDirection,
    pub quality: LightQuality,
}

impl LightingProfile {
    pub fn new(style: LightingStyle, direction: LightDirection, quality: LightQuality) -> Self {
        Self {
            style,
            direction,
            quality,
        }
    }

    /// Neutral profile returned for degenerate input.
    pub fn neutral() -> Self {
        Self {
            style: LightingStyle::Natural,
            direction: LightDirection::Frontal,
            quality: LightQuality::Soft,
        }
    }
}
