//! Color profile extraction: dominant colors, temperature, saturation.

use cine_models::{clamp_kelvin, ColorProfile, DominantColor};
use tracing::debug;

use crate::config::SignalConfig;
use crate::sampler::SampleField;

/// Quantization levels per channel (4^3 = 64 fixed buckets).
const QUANT_LEVELS: usize = 4;
const BUCKET_WIDTH: usize = 256 / QUANT_LEVELS;

/// Named colors used to label dominant buckets. Nearest-by-distance wins;
/// ties resolve to the earlier entry, keeping labeling deterministic.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [16, 16, 16]),
    ("charcoal", [54, 69, 79]),
    ("slate gray", [112, 128, 144]),
    ("silver", [192, 192, 192]),
    ("white", [245, 245, 245]),
    ("crimson", [220, 20, 60]),
    ("brick red", [156, 52, 40]),
    ("burnt orange", [204, 85, 0]),
    ("amber", [255, 191, 0]),
    ("gold", [212, 175, 55]),
    ("olive", [128, 128, 0]),
    ("forest green", [34, 99, 34]),
    ("emerald", [46, 176, 106]),
    ("teal", [0, 128, 128]),
    ("cyan", [0, 188, 212]),
    ("sky blue", [135, 206, 235]),
    ("royal blue", [65, 105, 225]),
    ("navy", [24, 32, 96]),
    ("indigo", [75, 0, 130]),
    ("violet", [138, 43, 226]),
    ("magenta", [199, 21, 133]),
    ("rose", [255, 102, 153]),
    ("brown", [121, 85, 61]),
    ("tan", [210, 180, 140]),
    ("beige", [232, 220, 196]),
];

/// Extract the color profile from a sample field.
pub fn extract_color_profile(field: &SampleField, config: &SignalConfig) -> ColorProfile {
    let kelvin = estimate_kelvin(field);
    let saturation = saturation(field);
    let dominant = dominant_colors(field, config);

    debug!(
        kelvin = format!("{:.0}", kelvin),
        saturation = format!("{:.1}", saturation),
        colors = dominant.len(),
        "Color profile extracted"
    );

    ColorProfile::new(kelvin, saturation, dominant)
}

/// Approximate correlated color temperature from red/blue channel balance.
///
/// Red-heavy frames map below the 5500K pivot (warm), blue-heavy frames
/// above it. Output is clamped to [2000, 8000].
pub fn estimate_kelvin(field: &SampleField) -> f64 {
    let n = field.len() as f64;
    let red: f64 = field.rgb.iter().map(|c| c[0]).sum::<f64>() / n;
    let blue: f64 = field.rgb.iter().map(|c| c[2]).sum::<f64>() / n;

    let ratio = (red + 1.0) / (blue + 1.0);
    clamp_kelvin(5500.0 - (ratio - 1.0) * 3000.0)
}

/// Mean colorfulness (HSV-style saturation) over samples, [0, 100].
pub fn saturation(field: &SampleField) -> f64 {
    let total: f64 = field
        .rgb
        .iter()
        .map(|&[r, g, b]| {
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            if max <= 0.0 {
                0.0
            } else {
                (max - min) / max
            }
        })
        .sum();
    total / field.len() as f64 * 100.0
}

/// Bucket samples into the fixed quantized grid, rank by share, and label
/// each kept bucket with its nearest named color.
///
/// Bucket order is fixed (index ascending breaks count ties), so repeated
/// runs over the same frame produce identical rankings.
pub fn dominant_colors(field: &SampleField, config: &SignalConfig) -> Vec<DominantColor> {
    let mut counts = [0usize; QUANT_LEVELS * QUANT_LEVELS * QUANT_LEVELS];
    for &[r, g, b] in &field.rgb {
        counts[bucket_index(r as u8, g as u8, b as u8)] += 1;
    }

    let total = field.len() as f64;
    let mut ranked: Vec<(usize, usize)> = counts
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .collect();
    // Descending by count; ascending bucket index on ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let kept: Vec<(usize, f64)> = ranked
        .into_iter()
        .map(|(idx, count)| (idx, count as f64 / total * 100.0))
        .filter(|&(_, share)| share >= config.min_color_share)
        .take(config.max_dominant_colors)
        .collect();

    // Renormalize the kept shares to sum to ~100
    let kept_total: f64 = kept.iter().map(|&(_, share)| share).sum();
    if kept_total <= 0.0 {
        return Vec::new();
    }

    kept.into_iter()
        .map(|(idx, share)| {
            let center = bucket_center(idx);
            DominantColor::new(
                nearest_named(center),
                format!("#{:02x}{:02x}{:02x}", center[0], center[1], center[2]),
                share / kept_total * 100.0,
            )
        })
        .collect()
}

fn bucket_index(r: u8, g: u8, b: u8) -> usize {
    let q = |v: u8| v as usize / BUCKET_WIDTH;
    (q(r) * QUANT_LEVELS + q(g)) * QUANT_LEVELS + q(b)
}

fn bucket_center(index: usize) -> [u8; 3] {
    let b = index % QUANT_LEVELS;
    let g = (index / QUANT_LEVELS) % QUANT_LEVELS;
    let r = index / (QUANT_LEVELS * QUANT_LEVELS);
    let center = |q: usize| (q * BUCKET_WIDTH + BUCKET_WIDTH / 2) as u8;
    [center(r), center(g), center(b)]
}

fn nearest_named(rgb: [u8; 3]) -> &'static str {
    let mut best = NAMED_COLORS[0].0;
    let mut best_dist = u32::MAX;
    for &(name, named) in NAMED_COLORS {
        let dist: u32 = (0..3)
            .map(|i| {
                let d = rgb[i] as i32 - named[i] as i32;
                (d * d) as u32
            })
            .sum();
        if dist < best_dist {
            best_dist = dist;
            best = name;
        }
    }
    best
}
