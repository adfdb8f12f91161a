//! Pipeline facade for CineLens.
//!
//! Composes the signal extractor, rule engine, temporal aggregator and
//! creative generators into the end-to-end flow an embedding service
//! consumes:
//!
//! ```text
//! pixel buffer -> snapshot -> intelligence -> { sequence summary,
//!                                               storyboard, moodboard }
//! ```
//!
//! The engine is pure and synchronous. Nothing is shared or cached
//! between calls, so any number of frames may be analyzed concurrently
//! with zero coordination; cancellation and back-pressure belong to the
//! caller's boundary.

use cine_creative::{
    generate_moodboard, generate_storyboard, MoodboardRequest, StoryboardRequest,
};
use cine_models::{
    AnalysisSnapshot, Culture, Moodboard, PixelBuffer, SequenceFrame, Storyboard,
    VideoSequenceAnalysis,
};
use cine_rules::RuleEngine;
use cine_signal::{build_histograms, FrameAnalyzer, FrameHistograms, SignalConfig};
use cine_temporal::{analyze_video_sequence, TemporalConfig};
use tracing::info;

/// One-stop engine over the full analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct CinematicEngine {
    analyzer: FrameAnalyzer,
    rules: RuleEngine,
    temporal: TemporalConfig,
}

impl CinematicEngine {
    /// Engine with default calibration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit calibration for both stages.
    pub fn with_config(signal: SignalConfig, temporal: TemporalConfig) -> Self {
        Self {
            analyzer: FrameAnalyzer::with_config(signal),
            rules: RuleEngine::new(),
            temporal,
        }
    }

    /// Analyze a single frame under the default Western culture.
    pub fn analyze_frame(&self, buffer: &PixelBuffer) -> SequenceFrame {
        self.analyze_frame_for(buffer, Culture::default())
    }

    /// Analyze a single frame: snapshot extraction plus classification.
    pub fn analyze_frame_for(&self, buffer: &PixelBuffer, culture: Culture) -> SequenceFrame {
        let snapshot = self.analyzer.analyze(buffer);
        let intelligence = self.rules.classify(&snapshot, culture);

        info!(
            width = buffer.width(),
            height = buffer.height(),
            mood = %intelligence.mood.label,
            genre = %intelligence.genre.label,
            culture = %culture,
            "Frame analyzed and classified"
        );

        SequenceFrame::new(snapshot, intelligence)
    }

    /// Build the standalone histograms for a frame.
    pub fn histograms(&self, buffer: &PixelBuffer) -> FrameHistograms {
        build_histograms(buffer)
    }

    /// Summarize an ordered sequence of analyzed frames.
    pub fn analyze_video(&self, frames: &[SequenceFrame]) -> VideoSequenceAnalysis {
        analyze_video_sequence(frames, &self.temporal)
    }

    /// Expand one analyzed frame into a storyboard.
    pub fn storyboard(&self, frame: &SequenceFrame, preview_ref: Option<&str>) -> Storyboard {
        let mut request = StoryboardRequest::new(&frame.intelligence, &frame.snapshot);
        if let Some(preview) = preview_ref {
            request = request.with_preview_ref(preview);
        }
        generate_storyboard(&request)
    }

    /// Expand one analyzed frame into a moodboard.
    pub fn moodboard(&self, frame: &SequenceFrame, preview_ref: Option<&str>) -> Moodboard {
        let mut request = MoodboardRequest::new(&frame.intelligence, &frame.snapshot);
        if let Some(preview) = preview_ref {
            request = request.with_preview_ref(preview);
        }
        generate_moodboard(&request)
    }

    /// Documented neutral snapshot, exposed for callers that need the
    /// degenerate-input default without a buffer in hand.
    pub fn neutral_snapshot(&self) -> AnalysisSnapshot {
        AnalysisSnapshot::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_runs_on_degenerate_buffer() {
        let engine = CinematicEngine::new();
        let buffer = PixelBuffer::new(0, 0, &[]).unwrap();
        let frame = engine.analyze_frame(&buffer);

        assert_eq!(frame.snapshot, AnalysisSnapshot::neutral());
        assert!(!frame.intelligence.mood.label.is_empty());
    }

    #[test]
    fn test_empty_video_sequence_neutral() {
        let engine = CinematicEngine::new();
        let analysis = engine.analyze_video(&[]);
        assert_eq!(analysis.average_energy, 50.0);
        assert_eq!(analysis.scene_changes, 0);
    }
}
