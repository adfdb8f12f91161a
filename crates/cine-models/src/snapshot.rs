//! Per-frame analysis snapshot.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorProfile;
use crate::composition::CompositionProfile;
use crate::lighting::LightingProfile;
use crate::metrics::TechnicalMetrics;

/// Immutable bundle of everything the signal extractor measured for one
/// image or video frame.
///
/// A snapshot is produced once per frame and never mutated; the rule
/// engine, temporal aggregator and creative generators all read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisSnapshot {
    /// Source frame width in pixels
    pub width: u32,

    /// Source frame height in pixels
    pub height: u32,

    pub metrics: TechnicalMetrics,
    pub color: ColorProfile,
    pub composition: CompositionProfile,
    pub lighting: LightingProfile,
}

impl AnalysisSnapshot {
    pub fn new(
        width: u32,
        height: u32,
        metrics: TechnicalMetrics,
        color: ColorProfile,
        composition: CompositionProfile,
        lighting: LightingProfile,
    ) -> Self {
        Self {
            width,
            height,
            metrics,
            color,
            composition,
            lighting,
        }
    }

    /// Documented neutral snapshot returned for degenerate buffers
    /// (zero-dimension input).
    pub fn neutral() -> Self {
        Self {
            width: 0,
            height: 0,
            metrics: TechnicalMetrics::neutral(),
            color: ColorProfile::neutral(),
            composition: CompositionProfile::neutral(),
            lighting: LightingProfile::neutral(),
        }
    }
}
