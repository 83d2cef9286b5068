use super::clamp_score;
use crate::config::BlurConfig;

/// Blur score from Laplacian variance.
///
/// A variance of 0 (no high-frequency content) scores 100; a variance at or
/// above `max_variance` scores 0.
pub fn blur_score(laplacian_variance: f64, config: &BlurConfig) -> f64 {
    100.0 - clamp_score(laplacian_variance / config.max_variance * 100.0)
}
