//! Integration tests for signal extraction invariants.

use cine_models::PixelBuffer;
use cine_signal::{build_histograms, FrameAnalyzer};

/// Render the same semantic image (a diagonal luminance gradient) at a
/// given resolution.
fn gradient_frame(size: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let t = (x + y) as f64 / (2 * (size - 1)) as f64;
            let v = (t * 255.0) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

#[test]
fn resolution_independence_within_five_points() {
    let analyzer = FrameAnalyzer::new();

    let small_data = gradient_frame(64);
    let large_data = gradient_frame(256);
    let small = PixelBuffer::new(64, 64, &small_data).unwrap();
    let large = PixelBuffer::new(256, 256, &large_data).unwrap();

    let a = analyzer.analyze(&small);
    let b = analyzer.analyze(&large);

    assert!(
        (a.metrics.brightness - b.metrics.brightness).abs() < 5.0,
        "brightness drifted: {} vs {}",
        a.metrics.brightness,
        b.metrics.brightness
    );
    assert!(
        (a.metrics.contrast - b.metrics.contrast).abs() < 5.0,
        "contrast drifted: {} vs {}",
        a.metrics.contrast,
        b.metrics.contrast
    );
}

#[test]
fn all_scores_stay_in_range() {
    let analyzer = FrameAnalyzer::new();

    // A spread of synthetic frames, including degenerate shapes
    let frames: Vec<(u32, u32, Vec<u8>)> = vec![
        (1, 1, vec![255, 0, 0, 255]),
        (1, 64, (0..64).flat_map(|i| [i as u8 * 4, 0, 255, 255]).collect()),
        (64, 1, (0..64).flat_map(|i| [255, i as u8 * 4, 0, 255]).collect()),
        (32, 32, gradient_frame(32)),
    ];

    for (width, height, data) in &frames {
        let buffer = PixelBuffer::new(*width, *height, data).unwrap();
        let snapshot = analyzer.analyze(&buffer);

        let scores = [
            snapshot.metrics.brightness,
            snapshot.metrics.contrast,
            snapshot.metrics.sharpness,
            snapshot.metrics.noise,
            snapshot.metrics.highlights,
            snapshot.metrics.shadows,
            snapshot.metrics.tint,
            snapshot.color.saturation,
            snapshot.composition.score,
        ];
        for score in scores {
            assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
        }
        assert!((2000.0..=8000.0).contains(&snapshot.color.kelvin));
        assert!((1..=5).contains(&snapshot.composition.depth_layers));
    }
}

#[test]
fn dominant_color_percentages_sum_to_100() {
    let analyzer = FrameAnalyzer::new();
    let data = gradient_frame(128);
    let buffer = PixelBuffer::new(128, 128, &data).unwrap();
    let snapshot = analyzer.analyze(&buffer);

    assert!(!snapshot.color.dominant_colors.is_empty());
    let sum: f64 = snapshot.color.dominant_colors.iter().map(|c| c.percentage).sum();
    assert!((sum - 100.0).abs() < 0.5, "percentages sum to {sum}");

    // Pre-sorted descending
    let shares: Vec<f64> = snapshot.color.dominant_colors.iter().map(|c| c.percentage).collect();
    for pair in shares.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn histograms_normalize_to_peak_100() {
    let data = gradient_frame(64);
    let buffer = PixelBuffer::new(64, 64, &data).unwrap();
    let histograms = build_histograms(&buffer);

    for channel in [
        &histograms.red,
        &histograms.green,
        &histograms.blue,
        &histograms.luminance,
    ] {
        assert_eq!(channel.bins.len(), 256);
        assert!((channel.peak() - 100.0).abs() < 1e-9);
        assert!(channel.bins.iter().all(|&v| (0.0..=100.0).contains(&v)));
    }
}

#[test]
fn snapshot_serialization_is_stable() {
    let analyzer = FrameAnalyzer::new();
    let data = gradient_frame(48);
    let buffer = PixelBuffer::new(48, 48, &data).unwrap();

    let first = serde_json::to_string(&analyzer.analyze(&buffer)).unwrap();
    let second = serde_json::to_string(&analyzer.analyze(&buffer)).unwrap();
    assert_eq!(first, second);
}
