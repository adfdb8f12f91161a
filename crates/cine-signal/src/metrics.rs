//! Technical metric extraction from a sample field.

use cine_models::TechnicalMetrics;

use crate::config::SignalConfig;
use crate::sampler::SampleField;

/// Extract the full technical metric set from a sample field.
pub fn extract_metrics(field: &SampleField, config: &SignalConfig) -> TechnicalMetrics {
    let brightness = brightness(field);
    let contrast = contrast(field);
    let sharpness = sharpness(field, config.sharpness_gain);
    let noise = noise(field, config.noise_gain);
    let highlights = luma_share_above(field, config.highlight_luma);
    let shadows = luma_share_below(field, config.shadow_luma);
    let tint = tint(field);

    TechnicalMetrics::new(brightness, contrast, sharpness, noise, highlights, shadows, tint)
}

/// Mean normalized luminance scaled to [0, 100].
pub fn brightness(field: &SampleField) -> f64 {
    field.mean_luma() / 255.0 * 100.0
}

/// Luminance standard deviation scaled so a full black/white split reads
/// near 100.
pub fn contrast(field: &SampleField) -> f64 {
    let mean = field.mean_luma();
    let variance =
        field.luma.iter().map(|l| (l - mean) * (l - mean)).sum::<f64>() / field.len() as f64;
    variance.sqrt() / 127.5 * 100.0
}

/// Mean local-gradient magnitude over horizontally and vertically adjacent
/// sample pairs. Flat fields read near zero.
pub fn sharpness(field: &SampleField, gain: f64) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0usize;

    for r in 0..field.rows {
        for c in 0..field.cols {
            let here = field.luma_at(c, r);
            if c + 1 < field.cols {
                total += (field.luma_at(c + 1, r) - here).abs();
                pairs += 1;
            }
            if r + 1 < field.rows {
                total += (field.luma_at(c, r + 1) - here).abs();
                pairs += 1;
            }
        }
    }

    if pairs == 0 {
        return 0.0;
    }
    (total / pairs as f64) / 255.0 * 100.0 * gain
}

/// Residual energy after a coarse 3x3 box-smoothing pass over the grid.
///
/// Smooth gradients survive the blur and leave little residual; grain and
/// speckle do not.
pub fn noise(field: &SampleField, gain: f64) -> f64 {
    if field.cols < 3 || field.rows < 3 {
        return 0.0;
    }

    let mut residual = 0.0;
    let mut count = 0usize;

    for r in 1..field.rows - 1 {
        for c in 1..field.cols - 1 {
            let mut sum = 0.0;
            for dr in 0..3 {
                for dc in 0..3 {
                    sum += field.luma_at(c + dc - 1, r + dr - 1);
                }
            }
            let smoothed = sum / 9.0;
            residual += (field.luma_at(c, r) - smoothed).abs();
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }
    (residual / count as f64) / 255.0 * 100.0 * gain
}

/// Share of samples (percent) with luminance above `threshold`.
pub fn luma_share_above(field: &SampleField, threshold: f64) -> f64 {
    let hits = field.luma.iter().filter(|&&l| l > threshold).count();
    hits as f64 / field.len() as f64 * 100.0
}

/// Share of samples (percent) with luminance below `threshold`.
pub fn luma_share_below(field: &SampleField, threshold: f64) -> f64 {
    let hits = field.luma.iter().filter(|&&l| l < threshold).count();
    hits as f64 / field.len() as f64 * 100.0
}

/// Green-magenta balance mapped to [0, 100] with 50 as neutral.
pub fn tint(field: &SampleField) -> f64 {
    let n = field.len() as f64;
    let green: f64 = field.rgb.iter().map(|c| c[1]).sum::<f64>() / n;
    let magenta: f64 = field.rgb.iter().map(|c| (c[0] + c[2]) / 2.0).sum::<f64>() / n;
    50.0 + (green - magenta) / 255.0 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_models::PixelBuffer;

    fn field_from(width: u32, height: u32, data: &[u8], grid: usize) -> SampleField {
        let buffer = PixelBuffer::new(width, height, data).unwrap();
        SampleField::collect(&buffer, grid).unwrap()
    }

    fn checkerboard(size: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        data
    }

    #[test]
    fn test_flat_field_reads_flat() {
        let data = vec![128u8; 32 * 32 * 4];
        // Alpha byte is also 128 here; set explicitly for clarity
        let field = field_from(32, 32, &data, 16);

        assert!((brightness(&field) - 50.2).abs() < 1.0);
        assert!(contrast(&field) < 0.5);
        assert!(sharpness(&field, 4.0) < 0.5);
        assert!(noise(&field, 8.0) < 0.5);
    }

    #[test]
    fn test_checkerboard_extremes() {
        let data = checkerboard(64);
        let field = field_from(64, 64, &data, 64);

        assert!((brightness(&field) - 50.0).abs() < 2.0);
        assert!(contrast(&field) > 90.0);
        assert!(sharpness(&field, 4.0) >= 100.0);
    }

    #[test]
    fn test_highlight_shadow_shares() {
        // Half black, half white columns
        let mut data = Vec::new();
        for _y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let field = field_from(8, 8, &data, 8);

        assert!((luma_share_above(&field, 200.0) - 50.0).abs() < 1.0);
        assert!((luma_share_below(&field, 55.0) - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_tint_neutral_for_gray() {
        let data = vec![100u8; 16 * 16 * 4];
        let field = field_from(16, 16, &data, 8);
        assert!((tint(&field) - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_tint_green_leans_high() {
        let mut data = Vec::new();
        for _ in 0..16 * 16 {
            data.extend_from_slice(&[40, 200, 40, 255]);
        }
        let field = field_from(16, 16, &data, 8);
        assert!(tint(&field) > 80.0);
    }
}
