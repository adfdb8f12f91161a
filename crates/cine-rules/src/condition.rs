//! Range conditions over snapshot fields.
//!
//! Conditions are the single source of truth for both matching and
//! explanation: the string a user reads is generated from the same object
//! the matcher evaluated, so explanations cannot drift from behavior.

use cine_models::AnalysisSnapshot;
use std::fmt;

/// A snapshot field a rule condition can range over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Brightness,
    Contrast,
    Sharpness,
    Noise,
    Highlights,
    Shadows,
    Tint,
    Saturation,
    Kelvin,
    CompositionScore,
    DepthLayers,
    ColorCount,
}

impl MetricField {
    /// Read this field's value out of a snapshot.
    pub fn value(&self, snapshot: &AnalysisSnapshot) -> f64 {
        match self {
            Self::Brightness => snapshot.metrics.brightness,
            Self::Contrast => snapshot.metrics.contrast,
            Self::Sharpness => snapshot.metrics.sharpness,
            Self::Noise => snapshot.metrics.noise,
            Self::Highlights => snapshot.metrics.highlights,
            Self::Shadows => snapshot.metrics.shadows,
            Self::Tint => snapshot.metrics.tint,
            Self::Saturation => snapshot.color.saturation,
            Self::Kelvin => snapshot.color.kelvin,
            Self::CompositionScore => snapshot.composition.score,
            Self::DepthLayers => snapshot.composition.depth_layers as f64,
            Self::ColorCount => snapshot.color.dominant_colors.len() as f64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Sharpness => "sharpness",
            Self::Noise => "noise",
            Self::Highlights => "highlights",
            Self::Shadows => "shadows",
            Self::Tint => "tint",
            Self::Saturation => "saturation",
            Self::Kelvin => "kelvin",
            Self::CompositionScore => "composition",
            Self::DepthLayers => "depth_layers",
            Self::ColorCount => "color_count",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An inclusive numeric-range condition over one snapshot field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    pub field: MetricField,
    pub min: f64,
    pub max: f64,
}

impl Condition {
    pub const fn new(field: MetricField, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Whether the snapshot value sits inside the range.
    pub fn matches(&self, snapshot: &AnalysisSnapshot) -> bool {
        let v = self.field.value(snapshot);
        v >= self.min && v <= self.max
    }

    /// How centrally the value sits within the range: 1.0 at the center,
    /// 0.0 at either bound or outside.
    pub fn proximity(&self, snapshot: &AnalysisSnapshot) -> f64 {
        let v = self.field.value(snapshot);
        if v < self.min || v > self.max {
            return 0.0;
        }
        let half = (self.max - self.min) / 2.0;
        if half <= 0.0 {
            return 1.0;
        }
        let center = (self.min + self.max) / 2.0;
        1.0 - (v - center).abs() / half
    }

    /// Render this condition with the observed value, e.g.
    /// `contrast=75.0 in [65, 100]`.
    pub fn describe(&self, snapshot: &AnalysisSnapshot) -> String {
        format!(
            "{}={:.1} in [{}, {}]",
            self.field,
            self.field.value(snapshot),
            self.min,
            self.max
        )
    }
}
