//! Composition analysis: thirds alignment, symmetry, leading lines,
//! depth layering.
//!
//! Works entirely on the sampled grid, so composition reads identically
//! across resolutions of the same image.

use cine_models::CompositionProfile;

use crate::sampler::SampleField;

/// Fraction of the grid counted as "near" an alignment line, per side.
const LINE_BAND: f64 = 0.04;

/// Normalized alignment line positions: thirds plus golden-ratio lines.
const ALIGNMENT_LINES: &[f64] = &[1.0 / 3.0, 2.0 / 3.0, 0.382, 0.618];

/// Share of total edge energy that must fall in alignment bands for the
/// rule-of-thirds flag. Bands cover ~30% of the grid, so a flat edge
/// distribution sits just under this.
const THIRDS_FLAG_THRESHOLD: f64 = 0.38;

/// Mirrored-half correlation required for the symmetry flag.
const SYMMETRY_FLAG_THRESHOLD: f64 = 0.70;

/// Directional coherence required for the leading-lines flag.
const LINES_FLAG_THRESHOLD: f64 = 0.40;

/// Minimum share of samples for a luminance band to count as a depth layer.
const DEPTH_BAND_SHARE: f64 = 0.08;

/// Analyze the composition of a sample field.
pub fn extract_composition(field: &SampleField) -> CompositionProfile {
    let gradients = GradientField::compute(field);

    let alignment = gradients.alignment_share();
    let symmetry_corr = mirrored_correlation(field);
    let coherence = gradients.directional_coherence();
    let depth_layers = depth_layers(field);

    let score = 15.0
        + 35.0 * alignment
        + 25.0 * symmetry_corr.max(0.0)
        + 15.0 * coherence
        + 2.5 * depth_layers as f64;

    CompositionProfile::new(
        score,
        alignment > THIRDS_FLAG_THRESHOLD,
        symmetry_corr > SYMMETRY_FLAG_THRESHOLD,
        coherence > LINES_FLAG_THRESHOLD && gradients.mean_magnitude > 4.0,
        depth_layers,
    )
}

/// Central-difference luminance gradients over interior grid cells.
struct GradientField {
    cols: usize,
    rows: usize,
    /// (dx, dy, magnitude) per interior cell, row-major over the interior
    cells: Vec<(f64, f64, f64)>,
    mean_magnitude: f64,
}

impl GradientField {
    fn compute(field: &SampleField) -> Self {
        let mut cells = Vec::new();
        let mut total = 0.0;

        if field.cols >= 3 && field.rows >= 3 {
            for r in 1..field.rows - 1 {
                for c in 1..field.cols - 1 {
                    let dx = (field.luma_at(c + 1, r) - field.luma_at(c - 1, r)) / 2.0;
                    let dy = (field.luma_at(c, r + 1) - field.luma_at(c, r - 1)) / 2.0;
                    let mag = (dx * dx + dy * dy).sqrt();
                    cells.push((dx, dy, mag));
                    total += mag;
                }
            }
        }

        let mean_magnitude = if cells.is_empty() {
            0.0
        } else {
            total / cells.len() as f64
        };

        Self {
            cols: field.cols,
            rows: field.rows,
            cells,
            mean_magnitude,
        }
    }

    /// Share of edge energy that falls in the bands around thirds and
    /// golden-ratio lines (either axis).
    fn alignment_share(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }

        let interior_cols = self.cols - 2;
        let mut aligned = 0.0;
        let mut total = 0.0;

        for (i, &(_, _, mag)) in self.cells.iter().enumerate() {
            let c = i % interior_cols + 1;
            let r = i / interior_cols + 1;
            let x = (c as f64 + 0.5) / self.cols as f64;
            let y = (r as f64 + 0.5) / self.rows as f64;

            total += mag;
            let near_line = ALIGNMENT_LINES
                .iter()
                .any(|&line| (x - line).abs() < LINE_BAND || (y - line).abs() < LINE_BAND);
            if near_line {
                aligned += mag;
            }
        }

        if total <= 0.0 {
            0.0
        } else {
            aligned / total
        }
    }

    /// Coherence of gradient directions, in [0, 1].
    ///
    /// Uses doubled-angle averaging so opposite gradient directions (the
    /// two sides of one line) reinforce rather than cancel.
    fn directional_coherence(&self) -> f64 {
        let mut sum_cos = 0.0;
        let mut sum_sin = 0.0;
        let mut weight = 0.0;

        for &(dx, dy, mag) in &self.cells {
            if mag < 1.0 {
                continue;
            }
            let angle = 2.0 * dy.atan2(dx);
            sum_cos += mag * angle.cos();
            sum_sin += mag * angle.sin();
            weight += mag;
        }

        if weight <= 0.0 {
            0.0
        } else {
            (sum_cos * sum_cos + sum_sin * sum_sin).sqrt() / weight
        }
    }
}

/// Pearson correlation between the left half and the mirrored right half
/// of the luminance grid. 1.0 = perfectly mirror-symmetric.
pub fn mirrored_correlation(field: &SampleField) -> f64 {
    let half = field.cols / 2;
    if half == 0 {
        return 1.0;
    }

    let mut left = Vec::with_capacity(half * field.rows);
    let mut right = Vec::with_capacity(half * field.rows);
    for r in 0..field.rows {
        for c in 0..half {
            left.push(field.luma_at(c, r));
            right.push(field.luma_at(field.cols - 1 - c, r));
        }
    }

    pearson(&left, &right)
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        cov += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a) * (x - mean_a);
        var_b += (y - mean_b) * (y - mean_b);
    }

    let denom = (var_a * var_b).sqrt();
    if denom <= 1e-9 {
        // At least one half is flat: symmetric only if both halves match
        return if (mean_a - mean_b).abs() < 1.0 { 1.0 } else { -1.0 };
    }
    cov / denom
}

/// Count distinct luminance bands occupied by at least `DEPTH_BAND_SHARE`
/// of samples. Reads 1 for a flat frame, up to 5 for deep scenes.
pub fn depth_layers(field: &SampleField) -> u32 {
    let mut bands = [0usize; 5];
    for &l in &field.luma {
        let idx = ((l / 51.2) as usize).min(4);
        bands[idx] += 1;
    }

    let min_count = (field.len() as f64 * DEPTH_BAND_SHARE).ceil() as usize;
    let occupied = bands.iter().filter(|&&count| count >= min_count).count() as u32;
    occupied.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_models::PixelBuffer;

    fn field_from_luma<F: Fn(u32, u32) -> u8>(size: u32, f: F) -> SampleField {
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let v = f(x, y);
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let owned = data;
        let buffer = PixelBuffer::new(size, size, &owned).unwrap();
        SampleField::collect(&buffer, 32).unwrap()
    }

    #[test]
    fn test_flat_frame_single_layer() {
        let field = field_from_luma(64, |_, _| 100);
        assert_eq!(depth_layers(&field), 1);

        let profile = extract_composition(&field);
        assert!(!profile.rule_of_thirds);
        assert!(!profile.leading_lines);
        assert_eq!(profile.depth_layers, 1);
    }

    #[test]
    fn test_flat_frame_is_symmetric() {
        let field = field_from_luma(64, |_, _| 100);
        assert!((mirrored_correlation(&field) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_split_not_symmetric() {
        let field = field_from_luma(64, |x, _| if x < 32 { 0 } else { 255 });
        assert!(mirrored_correlation(&field) < 0.0);
    }

    #[test]
    fn test_centered_gradient_symmetric() {
        let field = field_from_luma(64, |x, _| {
            let d = (x as i32 - 32).unsigned_abs();
            (255 - d * 6).max(0) as u8
        });
        assert!(mirrored_correlation(&field) > 0.9);
    }

    #[test]
    fn test_edge_on_third_detected() {
        // Hard vertical edge exactly on the right third line
        let field = field_from_luma(96, |x, _| if x < 64 { 40 } else { 220 });
        let profile = extract_composition(&field);
        assert!(profile.rule_of_thirds);
    }

    #[test]
    fn test_banded_frame_has_depth() {
        let field = field_from_luma(64, |_, y| match y / 16 {
            0 => 20,
            1 => 90,
            2 => 160,
            _ => 230,
        });
        assert!(depth_layers(&field) >= 4);
    }

    #[test]
    fn test_horizontal_bands_lead_lines() {
        // Strong parallel horizontal edges produce coherent gradients
        let field = field_from_luma(64, |_, y| if (y / 8) % 2 == 0 { 30 } else { 220 });
        let profile = extract_composition(&field);
        assert!(profile.leading_lines);
    }
}
