//! Video sequence analysis models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classification::CinematicIntelligence;
use crate::metrics::clamp_score;
use crate::snapshot::AnalysisSnapshot;

/// Direction of the energy curve across a frame sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum EnergyTrend {
    Rising,
    #[default]
    Stable,
    Falling,
}

impl EnergyTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Falling => "falling",
        }
    }
}

impl fmt::Display for EnergyTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One analyzed frame of an ordered sequence: the snapshot plus its
/// classification. This is the unit the temporal aggregator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SequenceFrame {
    pub snapshot: AnalysisSnapshot,
    pub intelligence: CinematicIntelligence,
}

impl SequenceFrame {
    pub fn new(snapshot: AnalysisSnapshot, intelligence: CinematicIntelligence) -> Self {
        Self {
            snapshot,
            intelligence,
        }
    }
}

/// Sequence-level summary derived fresh from an ordered list of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoSequenceAnalysis {
    /// Mean per-frame energy scalar, 50 for an empty sequence
    pub average_energy: f64,

    pub energy_trend: EnergyTrend,

    /// Mode of per-frame winning mood labels
    pub dominant_mood: String,

    /// Mode of per-frame winning genre labels
    pub dominant_genre: String,

    /// Count of adjacent frame pairs that register as a scene change
    pub scene_changes: u32,
}

impl VideoSequenceAnalysis {
    pub fn new(
        average_energy: f64,
        energy_trend: EnergyTrend,
        dominant_mood: impl Into<String>,
        dominant_genre: impl Into<String>,
        scene_changes: u32,
    ) -> Self {
        Self {
            average_energy: clamp_score(average_energy),
            energy_trend,
            dominant_mood: dominant_mood.into(),
            dominant_genre: dominant_genre.into(),
            scene_changes,
        }
    }

    /// Documented default for an empty frame sequence.
    pub fn neutral() -> Self {
        Self {
            average_energy: 50.0,
            energy_trend: EnergyTrend::Stable,
            dominant_mood: String::new(),
            dominant_genre: String::new(),
            scene_changes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_defaults() {
        let analysis = VideoSequenceAnalysis::neutral();
        assert_eq!(analysis.average_energy, 50.0);
        assert_eq!(analysis.energy_trend, EnergyTrend::Stable);
        assert_eq!(analysis.scene_changes, 0);
    }

    #[test]
    fn test_trend_serialization() {
        assert_eq!(
            serde_json::to_string(&EnergyTrend::Rising).unwrap(),
            "\"rising\""
        );
        assert_eq!(EnergyTrend::default(), EnergyTrend::Stable);
    }

    #[test]
    fn test_average_energy_clamped() {
        let analysis =
            VideoSequenceAnalysis::new(150.0, EnergyTrend::Rising, "joyful", "drama", 2);
        assert_eq!(analysis.average_energy, 100.0);
    }
}
