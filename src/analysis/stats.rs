use super::edges::edge_density;
use super::histogram::Histogram;
use super::intensity::mean_stddev;
use super::laplacian::laplacian_variance;
use crate::config::{EdgeConfig, SmearConfig};
use crate::frame::GrayFrame;
use serde::Serialize;

/// Share of pixels (percent) in the dark, mid and bright thirds of the
/// intensity range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandDistribution {
    pub dark_pct: f64,
    pub mid_pct: f64,
    pub bright_pct: f64,
}

impl BandDistribution {
    /// Split at `dark_end` and `bright_start`: dark `[0, dark_end)`, mid
    /// `[dark_end, bright_start)`, bright `[bright_start, 256)`.
    pub fn from_histogram(histogram: &Histogram, dark_end: usize, bright_start: usize) -> Self {
        Self {
            dark_pct: histogram.percent_below(dark_end),
            mid_pct: histogram.percent_in(dark_end..bright_start),
            bright_pct: histogram.percent_at_or_above(bright_start),
        }
    }
}

/// Every frame-level statistic the scorers consume, derived once per call.
#[derive(Debug, Clone)]
pub struct FrameStats {
    pub histogram: Histogram,
    pub mean_intensity: f64,
    pub stddev_intensity: f64,
    pub laplacian_variance: f64,
    /// Fraction of edge pixels, 0.0-1.0.
    pub edge_density: f64,
    pub bands: BandDistribution,
}

impl FrameStats {
    pub fn compute(frame: &GrayFrame, edges: &EdgeConfig, smear: &SmearConfig) -> Self {
        let histogram = Histogram::compute(frame);
        let (mean_intensity, stddev_intensity) = mean_stddev(frame);
        let laplacian_variance = laplacian_variance(frame);
        let edge_density = edge_density(frame, edges.low_threshold, edges.high_threshold);
        let bands = BandDistribution::from_histogram(
            &histogram,
            smear.dark_band_end as usize,
            smear.bright_band_start as usize,
        );

        log::debug!(
            "Frame {}x{}: mean={:.2} stddev={:.2} laplacian_var={:.2} edge_density={:.4} bands=({:.1}/{:.1}/{:.1})",
            frame.width(),
            frame.height(),
            mean_intensity,
            stddev_intensity,
            laplacian_variance,
            edge_density,
            bands.dark_pct,
            bands.mid_pct,
            bands.bright_pct
        );

        Self {
            histogram,
            mean_intensity,
            stddev_intensity,
            laplacian_variance,
            edge_density,
            bands,
        }
    }
}
