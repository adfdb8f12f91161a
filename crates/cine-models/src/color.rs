//! Color profile models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics::clamp_score;

/// Minimum representable correlated color temperature.
pub const KELVIN_MIN: f64 = 2000.0;

/// Maximum representable correlated color temperature.
pub const KELVIN_MAX: f64 = 8000.0;

/// Qualitative color temperature bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    /// Below 4500K
    Warm,
    /// 4500K to 6000K
    Neutral,
    /// Above 6000K
    Cool,
}

impl Temperature {
    /// Bucket a Kelvin value. The input is clamped first, so the mapping
    /// is total.
    pub fn from_kelvin(kelvin: f64) -> Self {
        let k = clamp_kelvin(kelvin);
        if k < 4500.0 {
            Self::Warm
        } else if k <= 6000.0 {
            Self::Neutral
        } else {
            Self::Cool
        }
    }

    /// Returns the bucket name for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Neutral => "neutral",
            Self::Cool => "cool",
        }
    }

    pub fn is_warm(&self) -> bool {
        matches!(self, Self::Warm)
    }

    pub fn is_cool(&self) -> bool {
        matches!(self, Self::Cool)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clamp a Kelvin value to the representable [2000, 8000] range.
pub fn clamp_kelvin(kelvin: f64) -> f64 {
    kelvin.clamp(KELVIN_MIN, KELVIN_MAX)
}

/// One ranked dominant color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DominantColor {
    /// Nearest named color
    pub name: String,

    /// Hex code of the bucket center, `#rrggbb`
    pub hex: String,

    /// Share of sampled pixels, percentages across the list sum to ~100
    pub percentage: f64,
}

impl DominantColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            percentage: clamp_score(percentage),
        }
    }
}

/// Color characteristics of a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorProfile {
    /// Qualitative temperature bucket
    pub temperature: Temperature,

    /// Correlated color temperature, clamped to [2000, 8000]
    pub kelvin: f64,

    /// Mean colorfulness, [0, 100]
    pub saturation: f64,

    /// Dominant colors, pre-sorted descending by percentage
    pub dominant_colors: Vec<DominantColor>,
}

impl ColorProfile {
    /// Build a profile; Kelvin and saturation are clamped, the dominant
    /// color list is sorted descending by share.
    pub fn new(kelvin: f64, saturation: f64, mut dominant_colors: Vec<DominantColor>) -> Self {
        let kelvin = clamp_kelvin(kelvin);
        dominant_colors.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            temperature: Temperature::from_kelvin(kelvin),
            kelvin,
            saturation: clamp_score(saturation),
            dominant_colors,
        }
    }

    /// Neutral profile returned for degenerate input.
    pub fn neutral() -> Self {
        Self {
            temperature: Temperature::Neutral,
            kelvin: 5200.0,
            saturation: 0.0,
            dominant_colors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_clamped() {
        let profile = ColorProfile::new(12000.0, 50.0, vec![]);
        assert_eq!(profile.kelvin, KELVIN_MAX);
        assert_eq!(profile.temperature, Temperature::Cool);

        let profile = ColorProfile::new(100.0, 50.0, vec![]);
        assert_eq!(profile.kelvin, KELVIN_MIN);
        assert_eq!(profile.temperature, Temperature::Warm);
    }

    #[test]
    fn test_temperature_buckets() {
        assert_eq!(Temperature::from_kelvin(3200.0), Temperature::Warm);
        assert_eq!(Temperature::from_kelvin(5500.0), Temperature::Neutral);
        assert_eq!(Temperature::from_kelvin(7000.0), Temperature::Cool);
    }

    #[test]
    fn test_dominant_colors_sorted() {
        let profile = ColorProfile::new(
            5500.0,
            40.0,
            vec![
                DominantColor::new("slate", "#708090", 20.0),
                DominantColor::new("crimson", "#dc143c", 55.0),
                DominantColor::new("ivory", "#fffff0", 25.0),
            ],
        );
        let shares: Vec<f64> = profile.dominant_colors.iter().map(|c| c.percentage).collect();
        assert_eq!(shares, vec![55.0, 25.0, 20.0]);
        assert_eq!(profile.dominant_colors[0].name, "crimson");
    }

    #[test]
    fn test_serialization_round_trip() {
        let profile = ColorProfile::new(
            3400.0,
            62.0,
            vec![DominantColor::new("amber", "#ffbf00", 100.0)],
        );
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: ColorProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
