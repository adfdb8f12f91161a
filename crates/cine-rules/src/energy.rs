//! Derived energy scalar and its seven-level bucketing.

use cine_models::{AnalysisSnapshot, EnergyLevel};

/// Blend weights for the energy scalar. They sum to 1.0; noise enters
/// inverted since grain reads as degradation, not vitality.
const W_CONTRAST: f64 = 0.30;
const W_SATURATION: f64 = 0.20;
const W_SHARPNESS: f64 = 0.20;
const W_INV_NOISE: f64 = 0.15;
const W_COMPOSITION: f64 = 0.15;

/// Confidence at a bucket boundary / at a bucket center.
const CONFIDENCE_FLOOR: f64 = 55.0;
const CONFIDENCE_SPAN: f64 = 40.0;

/// Weighted blend of contrast, saturation, sharpness, inverse noise and
/// composition score, in [0, 100].
pub fn energy_score(snapshot: &AnalysisSnapshot) -> f64 {
    W_CONTRAST * snapshot.metrics.contrast
        + W_SATURATION * snapshot.color.saturation
        + W_SHARPNESS * snapshot.metrics.sharpness
        + W_INV_NOISE * (100.0 - snapshot.metrics.noise)
        + W_COMPOSITION * snapshot.composition.score
}

/// Bucket an energy scalar and rate the confidence of the bucketing.
///
/// Confidence grows linearly with the scalar's distance from the nearest
/// bucket boundary: dead-center reads `CONFIDENCE_FLOOR + CONFIDENCE_SPAN`,
/// a boundary value reads `CONFIDENCE_FLOOR`.
pub fn bucket_energy(score: f64) -> (EnergyLevel, f64) {
    let score = score.clamp(0.0, 100.0);
    let level = EnergyLevel::from_score(score);
    let (low, high) = level.score_range();
    let half_width = (high - low) / 2.0;

    let boundary_distance = (score - low).min(high - score).max(0.0);
    let confidence = CONFIDENCE_FLOOR + CONFIDENCE_SPAN * (boundary_distance / half_width);

    (level, confidence)
}

/// Component contributions, used for explanation strings.
pub fn energy_components(snapshot: &AnalysisSnapshot) -> Vec<(&'static str, f64, f64)> {
    vec![
        ("contrast", snapshot.metrics.contrast, W_CONTRAST),
        ("saturation", snapshot.color.saturation, W_SATURATION),
        ("sharpness", snapshot.metrics.sharpness, W_SHARPNESS),
        ("inverse_noise", 100.0 - snapshot.metrics.noise, W_INV_NOISE),
        ("composition", snapshot.composition.score, W_COMPOSITION),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_models::{
        ColorProfile, CompositionProfile, LightingProfile, TechnicalMetrics,
    };

    fn snapshot(contrast: f64, saturation: f64, sharpness: f64, noise: f64, comp: f64) -> AnalysisSnapshot {
        AnalysisSnapshot::new(
            100,
            100,
            TechnicalMetrics::new(50.0, contrast, sharpness, noise, 20.0, 30.0, 50.0),
            ColorProfile::new(5200.0, saturation, vec![]),
            CompositionProfile::new(comp, false, false, false, 2),
            LightingProfile::neutral(),
        )
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total = W_CONTRAST + W_SATURATION + W_SHARPNESS + W_INV_NOISE + W_COMPOSITION;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_extremes() {
        let flat = snapshot(0.0, 0.0, 0.0, 100.0, 0.0);
        assert!(energy_score(&flat) < 1.0);

        let loud = snapshot(100.0, 100.0, 100.0, 0.0, 100.0);
        assert!((energy_score(&loud) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_confidence_exceeds_boundary() {
        let width = 100.0 / 7.0;
        let (_, center_conf) = bucket_energy(width / 2.0);
        let (_, boundary_conf) = bucket_energy(width - 0.01);

        assert!((center_conf - 95.0).abs() < 1e-9);
        assert!(boundary_conf < center_conf);
        assert!(boundary_conf >= CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_bucket_assignment() {
        assert_eq!(bucket_energy(5.0).0, EnergyLevel::Meditative);
        assert_eq!(bucket_energy(50.0).0, EnergyLevel::Moderate);
        assert_eq!(bucket_energy(99.0).0, EnergyLevel::Explosive);
    }

    #[test]
    fn test_noisy_frame_reads_lower() {
        let clean = snapshot(60.0, 60.0, 60.0, 0.0, 60.0);
        let noisy = snapshot(60.0, 60.0, 60.0, 80.0, 60.0);
        assert!(energy_score(&noisy) < energy_score(&clean));
    }
}
