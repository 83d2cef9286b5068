use super::clamp_score;
use crate::analysis::FrameStats;
use crate::config::FlashConfig;

/// Flash score from the share of saturated-bright pixels. With the default
/// weight of 3 the score saturates once about a third of the frame is bright.
pub fn flash_score(stats: &FrameStats, config: &FlashConfig) -> f64 {
    let bright_pct = stats
        .histogram
        .percent_at_or_above(config.bright_level as usize);
    clamp_score(bright_pct * config.bright_pct_weight)
}
