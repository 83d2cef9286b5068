//! Smear composite score
//!
//! A fouled lens shows up as several weak signals at once: lost sharpness,
//! lost contrast, few edges, and an intensity distribution pushed into one
//! band. The composite combines:
//! 1. A base score from blur, contrast and edge sub-scores
//! 2. An intensity-distribution score whose band thresholds adapt to the
//!    overall brightness of the frame
//! 3. A piecewise remap that stretches scores above the breakpoint and
//!    compresses those below it
//!
//! The remap is discontinuous at the breakpoint: just above it the score
//! tends to the breakpoint itself, at the breakpoint it is the breakpoint
//! times the compress factor.
use super::blur::blur_score;
use super::clamp_score;
use crate::analysis::FrameStats;
use crate::config::{BlurConfig, SmearConfig};
use serde::Serialize;

/// Intermediate values of the smear composite, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmearBreakdown {
    pub blur_score: f64,
    pub contrast_score: f64,
    pub edge_score: f64,
    pub base_score: f64,
    pub brightness_factor: f64,
    pub dark_threshold: f64,
    pub mid_threshold: f64,
    pub bright_threshold: f64,
    pub intensity_score: f64,
    pub combined_score: f64,
    pub smear_score: f64,
}

pub fn smear_score(stats: &FrameStats, blur: &BlurConfig, config: &SmearConfig) -> f64 {
    smear_breakdown(stats, blur, config).smear_score
}

pub fn smear_breakdown(stats: &FrameStats, blur: &BlurConfig, config: &SmearConfig) -> SmearBreakdown {
    let blur_score = blur_score(stats.laplacian_variance, blur);
    let contrast_score = 100.0
        - clamp_score(stats.stddev_intensity / config.contrast_full_scale_stddev * 100.0);
    let edge_score = 100.0 - clamp_score(stats.edge_density * config.edge_density_scale);

    let base_score = blur_score * config.blur_weight
        + contrast_score * config.contrast_weight
        + edge_score * config.edge_weight;

    let mean = stats.mean_intensity;
    let brightness_factor = (mean / config.brightness_pivot).min(1.0);
    let dark_threshold = config.dark_threshold_base + brightness_factor * config.dark_threshold_span;
    let bright_threshold =
        config.bright_threshold_base + (1.0 - brightness_factor) * config.bright_threshold_span;
    let mid_threshold = config.mid_threshold_base + brightness_factor * config.mid_threshold_span;

    // Band checks are independent; any combination may fire.
    let bands = &stats.bands;
    let mut intensity_score = 0.0;
    if mean > config.brightness_pivot {
        intensity_score += (mean - config.brightness_pivot) * config.bright_mean_weight;
    }
    if bands.dark_pct > dark_threshold {
        intensity_score += bands.dark_pct * config.dark_pct_weight;
    }
    if bands.bright_pct > bright_threshold {
        intensity_score += bands.bright_pct * config.bright_pct_weight;
    }
    if bands.mid_pct > mid_threshold {
        intensity_score += bands.mid_pct * config.mid_pct_weight;
    }

    let combined_score = base_score + intensity_score * config.intensity_weight;
    let smear_score = remap_combined(combined_score, config);

    log::debug!(
        "Smear: base={:.2} intensity={:.2} combined={:.2} -> {:.2}",
        base_score,
        intensity_score,
        combined_score,
        smear_score
    );

    SmearBreakdown {
        blur_score,
        contrast_score,
        edge_score,
        base_score,
        brightness_factor,
        dark_threshold,
        mid_threshold,
        bright_threshold,
        intensity_score,
        combined_score,
        smear_score,
    }
}

/// Piecewise remap of the combined score onto `[0, 100]`.
pub fn remap_combined(combined_score: f64, config: &SmearConfig) -> f64 {
    let remapped = if combined_score > config.breakpoint {
        (config.breakpoint + (combined_score - config.breakpoint) * config.stretch_factor)
            .min(100.0)
    } else {
        combined_score * config.compress_factor
    };
    remapped.max(0.0)
}
