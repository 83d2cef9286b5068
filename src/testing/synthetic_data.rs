//! Synthetic test frames
//!
//! Each pattern mimics a condition the scorers are meant to separate: a
//! detailed healthy scene, a covered or blacked-out lens, a flashlight in
//! the lens, a defocused or smeared lens, and a frame that moved.

use crate::frame::GrayFrame;

/// Frame content to synthesize
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyntheticPattern {
    /// Every pixel at the same intensity
    Solid(u8),
    /// Black and white squares of the given size
    Checkerboard(u32),
    /// Left-to-right ramp from 0 to 255
    Gradient,
    /// Detailed scene: checkerboard texture over a gradient, varies with
    /// the frame number
    Scene,
    /// Low-contrast haze around the given intensity, as a smeared lens
    /// produces
    Haze(u8),
}

/// Create a synthetic grayscale frame
///
/// Zero dimensions are bumped to 1 so the result is always a valid frame.
pub fn synthetic_frame(pattern: SyntheticPattern, frame_number: u64, width: u32, height: u32) -> GrayFrame {
    let width = width.max(1);
    let height = height.max(1);
    let mut data = vec![0u8; (width as usize) * (height as usize)];

    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + x as usize;
            data[idx] = match pattern {
                SyntheticPattern::Solid(v) => v,
                SyntheticPattern::Checkerboard(size) => {
                    let size = size.max(1);
                    if ((x / size) + (y / size)) % 2 == 0 { 255 } else { 0 }
                }
                SyntheticPattern::Gradient => ((x as u64 * 255) / (width.max(2) as u64 - 1)) as u8,
                SyntheticPattern::Scene => {
                    let base = ((x as u64 * 120) / width.max(1) as u64) as u8 + 60;
                    let shift = (frame_number % 8) as u32;
                    if (((x + shift) / 3) + (y / 3)) % 2 == 0 {
                        base.saturating_add(50)
                    } else {
                        base.saturating_sub(40)
                    }
                }
                SyntheticPattern::Haze(v) => {
                    // +-2 levels of slow variation
                    let wobble = ((x / 16 + y / 16) % 5) as i16 - 2;
                    (v as i16 + wobble).clamp(0, 255) as u8
                }
            };
        }
    }

    GrayFrame::new(data, width, height).expect("synthetic frame dimensions are non-zero")
}

/// Create an interleaved RGB24 buffer with a colored version of `pattern`
pub fn synthetic_rgb_frame(pattern: SyntheticPattern, frame_number: u64, width: u32, height: u32) -> Vec<u8> {
    let gray = synthetic_frame(pattern, frame_number, width, height);
    let mut rgb = Vec::with_capacity(gray.pixel_count() * 3);
    for &v in gray.pixels() {
        rgb.extend_from_slice(&[v, v, v]);
    }
    rgb
}
