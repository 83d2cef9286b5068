use super::clamp_score;
use crate::analysis::FrameStats;
use crate::config::BlackoutConfig;

/// Blackout score: a low mean and a high share of dark pixels each push the
/// score up, and the two terms add.
pub fn blackout_score(stats: &FrameStats, config: &BlackoutConfig) -> f64 {
    let dark_pct = stats.histogram.percent_below(config.dark_level as usize);
    let intensity_term = ((config.mean_pivot - stats.mean_intensity) * config.mean_weight).max(0.0);
    let pixel_term = dark_pct * config.dark_pct_weight;
    clamp_score(intensity_term + pixel_term)
}
