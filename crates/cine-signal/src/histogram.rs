//! Per-channel and luminance histogram building.
//!
//! Unlike metric extraction, histograms count every pixel: they are the
//! exact tonal distribution of the frame, normalized to a display-friendly
//! 0-100 scale (percent of the peak bin).

use cine_models::PixelBuffer;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of histogram bins per channel.
pub const BIN_COUNT: usize = 256;

/// One channel's 256-bin histogram on the 0-100 display scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChannelHistogram {
    /// Bin values normalized so the peak bin reads 100
    pub bins: Vec<f64>,
}

impl ChannelHistogram {
    /// Normalize raw counts to the display scale.
    pub fn from_counts(counts: &[u64; BIN_COUNT]) -> Self {
        let peak = *counts.iter().max().unwrap_or(&0);
        let bins = if peak == 0 {
            vec![0.0; BIN_COUNT]
        } else {
            counts
                .iter()
                .map(|&c| c as f64 / peak as f64 * 100.0)
                .collect()
        };
        Self { bins }
    }

    /// Display value of the peak bin (100 unless the histogram is empty).
    pub fn peak(&self) -> f64 {
        self.bins.iter().cloned().fold(0.0, f64::max)
    }

    /// Mean bin position weighted by bin value, on the 0-255 scale.
    /// Matches mean channel intensity up to normalization.
    pub fn weighted_mean(&self) -> f64 {
        let total: f64 = self.bins.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.bins
            .iter()
            .enumerate()
            .map(|(i, &v)| i as f64 * v)
            .sum::<f64>()
            / total
    }
}

/// Red, green, blue and luminance histograms of one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameHistograms {
    pub red: ChannelHistogram,
    pub green: ChannelHistogram,
    pub blue: ChannelHistogram,
    pub luminance: ChannelHistogram,
}

/// Build all four histograms from a pixel buffer.
///
/// Empty buffers produce all-zero histograms rather than an error.
pub fn build_histograms(buffer: &PixelBuffer) -> FrameHistograms {
    let mut red = [0u64; BIN_COUNT];
    let mut green = [0u64; BIN_COUNT];
    let mut blue = [0u64; BIN_COUNT];
    let mut luminance = [0u64; BIN_COUNT];

    let samples = buffer.samples();
    for pixel in samples.chunks_exact(4) {
        let (r, g, b) = (pixel[0], pixel[1], pixel[2]);
        red[r as usize] += 1;
        green[g as usize] += 1;
        blue[b as usize] += 1;
        let luma = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64).round() as usize;
        luminance[luma.min(BIN_COUNT - 1)] += 1;
    }

    FrameHistograms {
        red: ChannelHistogram::from_counts(&red),
        green: ChannelHistogram::from_counts(&green),
        blue: ChannelHistogram::from_counts(&blue),
        luminance: ChannelHistogram::from_counts(&luminance),
    }
}
