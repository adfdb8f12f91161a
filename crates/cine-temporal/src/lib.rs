//! Temporal aggregation for CineLens.
//!
//! Combines an ordered sequence of per-frame results into trend,
//! scene-change and sequence-level summaries. Everything here is derived
//! fresh from the input slice on every call; nothing is cached between
//! invocations.

use cine_models::{AnalysisSnapshot, EnergyTrend, SequenceFrame, VideoSequenceAnalysis};
use cine_rules::energy_score;
use tracing::debug;

/// Thresholds for trend and scene-change detection.
#[derive(Debug, Clone)]
pub struct TemporalConfig {
    /// Minimum overall energy delta (first to last frame) to call a trend
    pub min_trend_delta: f64,

    /// Weighted metric delta above which two frames read as a scene change
    pub scene_change_threshold: f64,

    /// Weight of the brightness delta in scene-change scoring
    pub brightness_weight: f64,

    /// Weight of the contrast delta
    pub contrast_weight: f64,

    /// Weight of the saturation delta
    pub saturation_weight: f64,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            min_trend_delta: 5.0,
            scene_change_threshold: 20.0,
            brightness_weight: 0.5,
            contrast_weight: 0.3,
            saturation_weight: 0.2,
        }
    }
}

impl TemporalConfig {
    /// More sensitive scene-change detection for jump-cut-heavy footage.
    pub fn sensitive() -> Self {
        Self {
            scene_change_threshold: 12.0,
            ..Default::default()
        }
    }
}

/// Direction of the energy curve over an ordered score sequence.
///
/// Fewer than three samples always read as stable; otherwise the overall
/// first-to-last change is compared against the minimum-delta threshold.
pub fn analyze_energy_trend(scores: &[f64], config: &TemporalConfig) -> EnergyTrend {
    if scores.len() < 3 {
        return EnergyTrend::Stable;
    }

    let delta = scores[scores.len() - 1] - scores[0];
    if delta > config.min_trend_delta {
        EnergyTrend::Rising
    } else if delta < -config.min_trend_delta {
        EnergyTrend::Falling
    } else {
        EnergyTrend::Stable
    }
}

/// Whether two adjacent frames register as a scene change.
///
/// Compares brightness, contrast and saturation; the weighted absolute
/// delta must exceed the configured threshold.
pub fn detect_scene_change(
    a: &AnalysisSnapshot,
    b: &AnalysisSnapshot,
    config: &TemporalConfig,
) -> bool {
    let delta = config.brightness_weight * (a.metrics.brightness - b.metrics.brightness).abs()
        + config.contrast_weight * (a.metrics.contrast - b.metrics.contrast).abs()
        + config.saturation_weight * (a.color.saturation - b.color.saturation).abs();

    delta > config.scene_change_threshold
}

/// Summarize an ordered sequence of analyzed frames.
///
/// An empty input returns the documented neutral default (average energy
/// 50, stable trend, zero scene changes) rather than an error.
pub fn analyze_video_sequence(
    frames: &[SequenceFrame],
    config: &TemporalConfig,
) -> VideoSequenceAnalysis {
    if frames.is_empty() {
        return VideoSequenceAnalysis::neutral();
    }

    let scores: Vec<f64> = frames.iter().map(|f| energy_score(&f.snapshot)).collect();
    let average_energy = scores.iter().sum::<f64>() / scores.len() as f64;
    let energy_trend = analyze_energy_trend(&scores, config);

    let scene_changes = frames
        .windows(2)
        .filter(|pair| detect_scene_change(&pair[0].snapshot, &pair[1].snapshot, config))
        .count() as u32;

    let dominant_mood = mode_label(frames.iter().map(|f| f.intelligence.mood.label.as_str()));
    let dominant_genre = mode_label(frames.iter().map(|f| f.intelligence.genre.label.as_str()));

    debug!(
        frames = frames.len(),
        average_energy = format!("{:.1}", average_energy),
        trend = %energy_trend,
        scene_changes,
        "Video sequence analyzed"
    );

    VideoSequenceAnalysis::new(
        average_energy,
        energy_trend,
        dominant_mood,
        dominant_genre,
        scene_changes,
    )
}

/// Most frequent label; ties resolve to the label seen first, keeping the
/// aggregation deterministic.
fn mode_label<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    // Replace only on a strictly greater count so the earliest label wins
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_models::{
        ColorProfile, CompositionProfile, Culture, LightingProfile, TechnicalMetrics,
    };
    use cine_rules::RuleEngine;

    fn snapshot(brightness: f64, contrast: f64, saturation: f64) -> AnalysisSnapshot {
        AnalysisSnapshot::new(
            640,
            360,
            TechnicalMetrics::new(brightness, contrast, 40.0, 10.0, 20.0, 25.0, 50.0),
            ColorProfile::new(5200.0, saturation, vec![]),
            CompositionProfile::new(50.0, false, false, false, 2),
            LightingProfile::neutral(),
        )
    }

    fn frame(brightness: f64, contrast: f64, saturation: f64) -> SequenceFrame {
        let snapshot = snapshot(brightness, contrast, saturation);
        let intelligence = RuleEngine::new().classify(&snapshot, Culture::Western);
        SequenceFrame::new(snapshot, intelligence)
    }

    #[test]
    fn test_trend_reference_sequences() {
        let config = TemporalConfig::default();
        assert_eq!(
            analyze_energy_trend(&[40.0, 45.0, 50.0, 58.0, 65.0, 72.0], &config),
            EnergyTrend::Rising
        );
        assert_eq!(
            analyze_energy_trend(&[80.0, 72.0, 65.0, 58.0, 50.0, 45.0], &config),
            EnergyTrend::Falling
        );
        assert_eq!(
            analyze_energy_trend(&[50.0, 52.0, 49.0, 51.0, 50.0, 48.0], &config),
            EnergyTrend::Stable
        );
    }

    #[test]
    fn test_short_sequences_always_stable() {
        let config = TemporalConfig::default();
        assert_eq!(analyze_energy_trend(&[], &config), EnergyTrend::Stable);
        assert_eq!(analyze_energy_trend(&[90.0], &config), EnergyTrend::Stable);
        assert_eq!(
            analyze_energy_trend(&[10.0, 90.0], &config),
            EnergyTrend::Stable
        );
    }

    #[test]
    fn test_scene_change_reference_cases() {
        let config = TemporalConfig::default();

        // Sub-5-point deltas everywhere: no change
        let a = snapshot(50.0, 60.0, 50.0);
        let b = snapshot(54.0, 57.0, 46.0);
        assert!(!detect_scene_change(&a, &b, &config));

        // Reference deltas: 50->80, 60->30, 50->20
        let c = snapshot(50.0, 60.0, 50.0);
        let d = snapshot(80.0, 30.0, 20.0);
        assert!(detect_scene_change(&c, &d, &config));
    }

    #[test]
    fn test_empty_sequence_neutral() {
        let analysis = analyze_video_sequence(&[], &TemporalConfig::default());
        assert_eq!(analysis.average_energy, 50.0);
        assert_eq!(analysis.energy_trend, EnergyTrend::Stable);
        assert_eq!(analysis.scene_changes, 0);
    }

    #[test]
    fn test_scene_change_count_over_sequence() {
        let config = TemporalConfig::default();
        let frames = vec![
            frame(50.0, 60.0, 50.0),
            frame(52.0, 58.0, 48.0), // no cut
            frame(85.0, 20.0, 15.0), // cut
            frame(84.0, 22.0, 17.0), // no cut
            frame(20.0, 80.0, 70.0), // cut
        ];
        let analysis = analyze_video_sequence(&frames, &config);
        assert_eq!(analysis.scene_changes, 2);
    }

    #[test]
    fn test_dominant_labels_are_modes() {
        let frames = vec![
            frame(30.0, 80.0, 10.0),
            frame(30.0, 80.0, 10.0),
            frame(70.0, 30.0, 70.0),
        ];
        let analysis = analyze_video_sequence(&frames, &TemporalConfig::default());
        assert_eq!(analysis.dominant_mood, frames[0].intelligence.mood.label);
        assert_eq!(analysis.dominant_genre, frames[0].intelligence.genre.label);
    }

    #[test]
    fn test_mode_tie_takes_first_seen() {
        assert_eq!(mode_label(["a", "b", "b", "a"].into_iter()), "a");
        assert_eq!(mode_label(["x"].into_iter()), "x");
        assert_eq!(mode_label(std::iter::empty()), "");
    }

    #[test]
    fn test_sequence_analysis_deterministic() {
        let frames = vec![frame(40.0, 50.0, 30.0), frame(60.0, 40.0, 55.0)];
        let config = TemporalConfig::default();

        let a = serde_json::to_vec(&analyze_video_sequence(&frames, &config)).unwrap();
        let b = serde_json::to_vec(&analyze_video_sequence(&frames, &config)).unwrap();
        assert_eq!(a, b);
    }
}
