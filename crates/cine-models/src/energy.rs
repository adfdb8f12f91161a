//! Energy level scale.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven ordered energy levels.
///
/// Levels partition the [0, 100] energy scalar into equal-width bands,
/// lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Meditative,
    Calm,
    Relaxed,
    Moderate,
    Lively,
    Dynamic,
    Explosive,
}

impl EnergyLevel {
    /// All levels in ascending order.
    pub const ALL: &'static [EnergyLevel] = &[
        EnergyLevel::Meditative,
        EnergyLevel::Calm,
        EnergyLevel::Relaxed,
        EnergyLevel::Moderate,
        EnergyLevel::Lively,
        EnergyLevel::Dynamic,
        EnergyLevel::Explosive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meditative => "meditative",
            Self::Calm => "calm",
            Self::Relaxed => "relaxed",
            Self::Moderate => "moderate",
            Self::Lively => "lively",
            Self::Dynamic => "dynamic",
            Self::Explosive => "explosive",
        }
    }

    /// Display label, e.g. "Meditative".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Meditative => "Meditative",
            Self::Calm => "Calm",
            Self::Relaxed => "Relaxed",
            Self::Moderate => "Moderate",
            Self::Lively => "Lively",
            Self::Dynamic => "Dynamic",
            Self::Explosive => "Explosive",
        }
    }

    /// Zero-based position on the scale.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// The `[low, high)` band this level covers on the energy scalar.
    /// The final band is closed at 100.
    pub fn score_range(&self) -> (f64, f64) {
        let width = 100.0 / Self::ALL.len() as f64;
        let i = self.ordinal() as f64;
        (i * width, (i + 1.0) * width)
    }

    /// Level containing the given energy scalar. Input is clamped.
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 100.0);
        let width = 100.0 / Self::ALL.len() as f64;
        let idx = ((score / width) as usize).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// Neighboring levels, nearest first.
    pub fn neighbors(&self) -> Vec<EnergyLevel> {
        let i = self.ordinal();
        let mut out = Vec::with_capacity(2);
        if i + 1 < Self::ALL.len() {
            out.push(Self::ALL[i + 1]);
        }
        if i > 0 {
            out.push(Self::ALL[i - 1]);
        }
        out
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
