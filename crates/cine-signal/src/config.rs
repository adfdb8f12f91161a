//! Calibration configuration for signal extraction.

/// Tuned constants for the pixel-signal extractor.
///
/// These are calibration values, not structural invariants: they were
/// tuned against a reference corpus so that the same semantic image at
/// different resolutions reads within a few points on every metric.
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Sampling grid size per axis (grid_size^2 positions per frame)
    pub grid_size: usize,

    /// Gain applied to the mean local-gradient magnitude
    pub sharpness_gain: f64,

    /// Gain applied to the post-smoothing residual energy
    pub noise_gain: f64,

    /// Luminance above which a sample counts as a highlight (0-255)
    pub highlight_luma: f64,

    /// Luminance below which a sample counts as a shadow (0-255)
    pub shadow_luma: f64,

    /// Maximum dominant colors reported
    pub max_dominant_colors: usize,

    /// Minimum share (percent) for a color bucket to be reported
    pub min_color_share: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            grid_size: 64,
            sharpness_gain: 4.0,
            noise_gain: 8.0,
            highlight_luma: 200.0,
            shadow_luma: 55.0,
            max_dominant_colors: 6,
            min_color_share: 2.0,
        }
    }
}

impl SignalConfig {
    /// Fast config for preview passes (coarser grid).
    pub fn fast() -> Self {
        Self {
            grid_size: 32,
            ..Default::default()
        }
    }

    /// Quality config for final analysis (denser grid).
    pub fn quality() -> Self {
        Self {
            grid_size: 96,
            ..Default::default()
        }
    }
}
