//! Integration tests for classification behavior across cultures.

use cine_models::{
    AnalysisSnapshot, ColorProfile, CompositionProfile, Culture, DominantColor, LightingProfile,
    TechnicalMetrics,
};
use cine_rules::{RuleEngine, CATALOG_VERSION};

fn snapshot(
    brightness: f64,
    contrast: f64,
    saturation: f64,
    kelvin: f64,
    shadows: f64,
) -> AnalysisSnapshot {
    AnalysisSnapshot::new(
        1280,
        720,
        TechnicalMetrics::new(brightness, contrast, 45.0, 12.0, 18.0, shadows, 50.0),
        ColorProfile::new(
            kelvin,
            saturation,
            vec![DominantColor::new("slate gray", "#708090", 100.0)],
        ),
        CompositionProfile::new(50.0, false, false, false, 2),
        LightingProfile::neutral(),
    )
}

#[test]
fn identical_inputs_classify_byte_identically() {
    let engine = RuleEngine::new();
    let frame = snapshot(42.0, 68.0, 30.0, 6200.0, 55.0);

    for culture in [Culture::Western, Culture::Arabic] {
        let runs: Vec<Vec<u8>> = (0..3)
            .map(|_| serde_json::to_vec(&engine.classify(&frame, culture)).unwrap())
            .collect();
        assert_eq!(runs[0], runs[1]);
        assert_eq!(runs[1], runs[2]);
    }
}

#[test]
fn omitted_culture_defaults_to_western() {
    let engine = RuleEngine::new();
    let frame = snapshot(42.0, 68.0, 30.0, 6200.0, 55.0);

    let defaulted = engine.classify_default(&frame);
    let explicit = engine.classify(&frame, Culture::Western);

    assert_eq!(defaulted, explicit);
    assert_eq!(defaulted.culture, Culture::Western);
    assert_eq!(defaulted.mood.localized.primary, defaulted.mood.label);
}

#[test]
fn arabic_culture_can_flip_close_calls_warm() {
    let engine = RuleEngine::new();
    // Warm vs cool candidates scored close together: warm boost decides
    let frame = snapshot(65.0, 45.0, 60.0, 4200.0, 20.0);

    let western = engine.classify(&frame, Culture::Western);
    let arabic = engine.classify(&frame, Culture::Arabic);

    // The structured results must differ at minimum in localization and
    // context, and warm rules never score lower under Arabic
    assert_ne!(western.mood.cultural_context, arabic.mood.cultural_context);
    assert_ne!(
        western.mood.localized.primary,
        arabic.mood.localized.primary
    );
    assert!(arabic.mood.confidence >= western.mood.confidence - 1e-9);
}

#[test]
fn confidence_and_kelvin_ranges_hold_across_inputs() {
    let engine = RuleEngine::new();
    let frames = [
        snapshot(0.0, 0.0, 0.0, 2000.0, 100.0),
        snapshot(100.0, 100.0, 100.0, 8000.0, 0.0),
        snapshot(50.0, 50.0, 50.0, 5200.0, 30.0),
        snapshot(15.0, 85.0, 10.0, 7400.0, 80.0),
    ];

    for frame in &frames {
        for culture in [Culture::Western, Culture::Arabic] {
            let intelligence = engine.classify(frame, culture);
            for result in [
                &intelligence.mood,
                &intelligence.energy,
                &intelligence.shot_type,
                &intelligence.genre,
            ] {
                assert!((0.0..=100.0).contains(&result.confidence));
                for alt in &result.alternatives {
                    assert!((0.0..=100.0).contains(&alt.confidence));
                    assert_ne!(alt.label, result.label);
                }
            }
        }
    }
}

#[test]
fn noir_frame_reads_noir() {
    let engine = RuleEngine::new();
    // Hard contrast, drained color, deep shadows
    let frame = snapshot(30.0, 85.0, 10.0, 6800.0, 70.0);
    let intelligence = engine.classify_default(&frame);

    assert_eq!(intelligence.genre.label, "Film Noir");
    assert!(intelligence.genre.confidence >= 70.0);
}

#[test]
fn explainability_payload_covers_all_taxonomies() {
    let engine = RuleEngine::new();
    let frame = snapshot(42.0, 68.0, 30.0, 6200.0, 55.0);
    let intelligence = engine.classify_default(&frame);

    for key in ["mood", "energy", "shot_type", "genre"] {
        assert!(
            intelligence.explainability.matched_conditions.contains_key(key),
            "missing matched conditions for {key}"
        );
    }
    assert!(intelligence
        .explainability
        .confidence_factors
        .contains_key("energy_definitiveness"));
    assert_eq!(intelligence.catalog_version, CATALOG_VERSION);
}
