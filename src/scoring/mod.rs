//! Tamper score calculators
//!
//! Each scorer is a free function over [`FrameStats`](crate::analysis::FrameStats)
//! (or a validated [`FramePair`](crate::frame::FramePair) for scene change)
//! and returns a value in `[0, 100]`, where higher means more likely tampered.
pub mod alerts;
pub mod blackout;
pub mod blur;
pub mod flash;
pub mod report;
pub mod scene_change;
pub mod smear;

pub use alerts::TamperKind;
pub use blackout::blackout_score;
pub use blur::blur_score;
pub use flash::flash_score;
pub use report::ScoreReport;
pub use scene_change::{scene_change_score, scene_change_score_opt};
pub use smear::{smear_breakdown, smear_score, SmearBreakdown};

/// Clamp a raw score into the `[0, 100]` range.
#[inline]
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
