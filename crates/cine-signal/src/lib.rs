//! Pixel-signal extraction for CineLens.
//!
//! This crate provides:
//! - Fixed-grid, resolution-independent sampling of RGBA buffers
//! - Technical metric extraction (brightness, contrast, sharpness, noise,
//!   highlights, shadows, tint)
//! - Color profiling (dominant colors, correlated temperature, saturation)
//! - Composition scoring (thirds, symmetry, leading lines, depth layers)
//! - Lighting descriptors
//! - Per-channel and luminance histogram building
//!
//! Everything is a pure function of buffer content: no randomness, no
//! iteration-order dependence, no state between calls.

pub mod analyzer;
pub mod color;
pub mod composition;
pub mod config;
pub mod histogram;
pub mod lighting;
pub mod metrics;
pub mod sampler;

pub use analyzer::FrameAnalyzer;
pub use config::SignalConfig;
pub use histogram::{build_histograms, ChannelHistogram, FrameHistograms, BIN_COUNT};
pub use sampler::SampleField;
