//! Technical metrics extracted from a frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Clamp a score to the canonical [0, 100] range.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Numeric signal profile of a single frame.
///
/// Every field is clamped to [0, 100] at construction, so downstream
/// consumers never see out-of-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TechnicalMetrics {
    /// Mean normalized luminance
    pub brightness: f64,

    /// Luminance standard deviation, scaled
    pub contrast: f64,

    /// Mean local-gradient magnitude
    pub sharpness: f64,

    /// Residual energy after coarse smoothing
    pub noise: f64,

    /// Share of samples above the highlight threshold
    pub highlights: f64,

    /// Share of samples below the shadow threshold
    pub shadows: f64,

    /// Green-magenta balance, 50 = neutral
    pub tint: f64,
}

impl TechnicalMetrics {
    /// Build metrics with every field clamped to [0, 100].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brightness: f64,
        contrast: f64,
        sharpness: f64,
        noise: f64,
        highlights: f64,
        shadows: f64,
        tint: f64,
    ) -> Self {
        Self {
            brightness: clamp_score(brightness),
            contrast: clamp_score(contrast),
            sharpness: clamp_score(sharpness),
            noise: clamp_score(noise),
            highlights: clamp_score(highlights),
            shadows: clamp_score(shadows),
            tint: clamp_score(tint),
        }
    }

    /// Neutral metrics returned for degenerate input.
    pub fn neutral() -> Self {
        Self {
            brightness: 50.0,
            contrast: 50.0,
            sharpness: 50.0,
            noise: 0.0,
            highlights: 50.0,
            shadows: 50.0,
            tint: 50.0,
        }
    }
}
