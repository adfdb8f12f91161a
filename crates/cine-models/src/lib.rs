//! Shared data models for the CineLens analysis engine.
//!
//! This crate provides Serde-serializable types for:
//! - Borrowed pixel buffers and per-frame analysis snapshots
//! - Technical, color, composition and lighting profiles
//! - Four-taxonomy classification results with explainability
//! - Video sequence summaries
//! - Storyboard and moodboard artifacts

pub mod classification;
pub mod color;
pub mod composition;
pub mod energy;
pub mod frame;
pub mod lighting;
pub mod metrics;
pub mod moodboard;
pub mod sequence;
pub mod snapshot;
pub mod storyboard;

// Re-export common types
pub use classification::{
    AlternativeLabel, CinematicIntelligence, ClassificationResult, Culture, CultureParseError,
    Explainability, LocalizedLabel, Taxonomy,
};
pub use color::{clamp_kelvin, ColorProfile, DominantColor, Temperature, KELVIN_MAX, KELVIN_MIN};
pub use composition::CompositionProfile;
pub use energy::EnergyLevel;
pub use frame::{BufferShapeError, PixelBuffer, CHANNELS};
pub use lighting::{LightDirection, LightQuality, LightingProfile, LightingStyle};
pub use metrics::{clamp_score, TechnicalMetrics};
pub use moodboard::{ColorScheme, Moodboard, MoodboardItem, SwatchRole};
pub use sequence::{EnergyTrend, SequenceFrame, VideoSequenceAnalysis};
pub use snapshot::AnalysisSnapshot;
pub use storyboard::{CameraPlan, LightingPlan, StoryBeat, Storyboard, StoryboardFrame};
