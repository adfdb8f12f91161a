//! Lighting descriptor derivation.

use cine_models::{LightDirection, LightQuality, LightingProfile, LightingStyle, TechnicalMetrics};

use crate::sampler::SampleField;

/// Derive the lighting profile from extracted metrics and the sample
/// field's bright-region geometry.
pub fn extract_lighting(field: &SampleField, metrics: &TechnicalMetrics) -> LightingProfile {
    LightingProfile::new(
        style(metrics),
        direction(field, metrics),
        quality(metrics),
    )
}

fn style(metrics: &TechnicalMetrics) -> LightingStyle {
    if metrics.brightness <= 35.0 {
        LightingStyle::LowKey
    } else if metrics.contrast >= 65.0 {
        LightingStyle::Dramatic
    } else if metrics.brightness >= 65.0 && metrics.contrast <= 45.0 {
        LightingStyle::HighKey
    } else {
        LightingStyle::Natural
    }
}

fn direction(field: &SampleField, metrics: &TechnicalMetrics) -> LightDirection {
    // Bright rim against deep shadow reads as backlight
    if metrics.highlights >= 15.0 && metrics.shadows >= 45.0 {
        return LightDirection::Back;
    }

    let (cx, cy) = bright_centroid(field);
    if cy < 0.35 {
        LightDirection::Top
    } else if (cx - 0.5).abs() > 0.18 {
        LightDirection::Side
    } else {
        LightDirection::Frontal
    }
}

fn quality(metrics: &TechnicalMetrics) -> LightQuality {
    if metrics.contrast >= 70.0 || metrics.sharpness >= 70.0 {
        LightQuality::Hard
    } else if metrics.contrast <= 35.0 {
        LightQuality::Diffused
    } else {
        LightQuality::Soft
    }
}

/// Normalized centroid of the brightest-quartile samples.
fn bright_centroid(field: &SampleField) -> (f64, f64) {
    let mut sorted = field.luma.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let cutoff = sorted[field.len() / 4];

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut count = 0usize;
    for r in 0..field.rows {
        for c in 0..field.cols {
            if field.luma_at(c, r) >= cutoff {
                sum_x += (c as f64 + 0.5) / field.cols as f64;
                sum_y += (r as f64 + 0.5) / field.rows as f64;
                count += 1;
            }
        }
    }

    if count == 0 {
        (0.5, 0.5)
    } else {
        (sum_x / count as f64, sum_y / count as f64)
    }
}
