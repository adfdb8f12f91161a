//! Frame analyzer: one call from pixel buffer to analysis snapshot.

use cine_models::{AnalysisSnapshot, PixelBuffer};
use tracing::debug;

use crate::color::extract_color_profile;
use crate::composition::extract_composition;
use crate::config::SignalConfig;
use crate::histogram::{build_histograms, FrameHistograms};
use crate::lighting::extract_lighting;
use crate::metrics::extract_metrics;
use crate::sampler::SampleField;

/// Produces an [`AnalysisSnapshot`] from a borrowed pixel buffer.
///
/// The analyzer is pure and stateless: identical buffer content always
/// yields an identical snapshot, and degenerate buffers yield the
/// documented neutral snapshot rather than an error.
#[derive(Debug, Clone, Default)]
pub struct FrameAnalyzer {
    config: SignalConfig,
}

impl FrameAnalyzer {
    /// Analyzer with default calibration.
    pub fn new() -> Self {
        Self {
            config: SignalConfig::default(),
        }
    }

    /// Analyzer with explicit calibration.
    pub fn with_config(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Analyze one frame.
    pub fn analyze(&self, buffer: &PixelBuffer) -> AnalysisSnapshot {
        let field = match SampleField::collect(buffer, self.config.grid_size) {
            Some(field) => field,
            None => {
                debug!("Degenerate buffer, returning neutral snapshot");
                return AnalysisSnapshot::neutral();
            }
        };

        let metrics = extract_metrics(&field, &self.config);
        let color = extract_color_profile(&field, &self.config);
        let composition = extract_composition(&field);
        let lighting = extract_lighting(&field, &metrics);

        debug!(
            width = buffer.width(),
            height = buffer.height(),
            brightness = format!("{:.1}", metrics.brightness),
            contrast = format!("{:.1}", metrics.contrast),
            composition = format!("{:.1}", composition.score),
            "Frame analyzed"
        );

        AnalysisSnapshot::new(
            buffer.width(),
            buffer.height(),
            metrics,
            color,
            composition,
            lighting,
        )
    }

    /// Analyze one frame and build its histograms in the same pass.
    ///
    /// The luminance histogram doubles as a sanity source for the sampled
    /// brightness estimate; drift between the two is logged, not corrected.
    pub fn analyze_with_histograms(
        &self,
        buffer: &PixelBuffer,
    ) -> (AnalysisSnapshot, FrameHistograms) {
        let snapshot = self.analyze(buffer);
        let histograms = build_histograms(buffer);

        let exact_brightness = histograms.luminance.weighted_mean() / 255.0 * 100.0;
        let drift = (exact_brightness - snapshot.metrics.brightness).abs();
        debug!(
            sampled = format!("{:.1}", snapshot.metrics.brightness),
            exact = format!("{:.1}", exact_brightness),
            drift = format!("{:.2}", drift),
            "Sampled brightness vs histogram mean"
        );

        (snapshot, histograms)
    }
}
