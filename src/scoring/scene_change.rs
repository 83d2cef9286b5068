use super::clamp_score;
use crate::analysis::intensity::mean_abs_diff;
use crate::config::SceneChangeConfig;
use crate::errors::TamperError;
use crate::frame::{FramePair, GrayFrame};

/// Scene change score from the mean absolute intensity difference of a
/// dimension-checked frame pair.
pub fn scene_change_score(pair: &FramePair<'_>, config: &SceneChangeConfig) -> f64 {
    let avg_diff = mean_abs_diff(pair.current().pixels(), pair.previous().pixels());
    log::debug!("Scene change: mean abs diff {:.3}", avg_diff);
    clamp_score(avg_diff / config.full_scale_diff * 100.0)
}

/// Scene change score against an optional previous frame.
///
/// Without a previous frame there is nothing to compare and the score is 0.
/// A previous frame of different dimensions is rejected, never resized.
pub fn scene_change_score_opt(
    current: &GrayFrame,
    previous: Option<&GrayFrame>,
    config: &SceneChangeConfig,
) -> Result<f64, TamperError> {
    match previous {
        None => Ok(0.0),
        Some(previous) => {
            let pair = FramePair::new(current, previous)?;
            Ok(scene_change_score(&pair, config))
        }
    }
}
