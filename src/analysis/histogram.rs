//! 256-bin intensity histogram.
use crate::frame::GrayFrame;
use std::ops::Range;

pub const LEVELS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; LEVELS],
    total: u64,
}

impl Histogram {
    /// Count pixels per intensity level in a single pass.
    pub fn compute(frame: &GrayFrame) -> Self {
        let mut counts = [0u32; LEVELS];
        for &p in frame.pixels() {
            counts[p as usize] += 1;
        }
        Self {
            counts,
            total: frame.pixel_count() as u64,
        }
    }

    pub fn counts(&self) -> &[u32; LEVELS] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pixels whose intensity falls in `levels`.
    pub fn count_in(&self, levels: Range<usize>) -> u64 {
        let end = levels.end.min(LEVELS);
        let start = levels.start.min(end);
        self.counts[start..end].iter().map(|&c| c as u64).sum()
    }

    /// Percentage (0-100) of all pixels whose intensity falls in `levels`.
    ///
    /// An empty histogram reports 0 rather than dividing by zero.
    pub fn percent_in(&self, levels: Range<usize>) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count_in(levels) as f64 / self.total as f64 * 100.0
    }

    /// Percentage of pixels strictly below `level`.
    pub fn percent_below(&self, level: usize) -> f64 {
        self.percent_in(0..level)
    }

    /// Percentage of pixels at or above `level`.
    pub fn percent_at_or_above(&self, level: usize) -> f64 {
        self.percent_in(level..LEVELS)
    }
}
