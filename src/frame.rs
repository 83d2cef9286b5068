//! Pixel buffers consumed by the scoring engine.

use crate::errors::TamperError;

/// Immutable 8-bit grayscale frame, row-major.
///
/// A `GrayFrame` always holds at least one pixel; every constructor rejects
/// zero-area input so downstream statistics never divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayFrame {
    /// Wrap an existing luma buffer.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, TamperError> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(TamperError::invalid_argument(format!(
                "luma buffer holds {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame where every pixel has intensity `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, TamperError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Reduce an interleaved RGB24 buffer to grayscale.
    ///
    /// Uses BT.601 luma weights with 14-bit fixed point rounding, so a gray
    /// RGB pixel `(v, v, v)` maps back to exactly `v`.
    pub fn from_rgb(rgb: &[u8], width: u32, height: u32) -> Result<Self, TamperError> {
        let expected = pixel_count(width, height)?;
        if rgb.len() != expected * 3 {
            return Err(TamperError::invalid_argument(format!(
                "RGB buffer holds {} bytes, expected {} for {}x{}",
                rgb.len(),
                expected * 3,
                width,
                height
            )));
        }

        let data = rgb.chunks_exact(3).map(luminance).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Intensity at `(x, y)` with coordinates clamped into the frame.
    #[inline]
    pub(crate) fn clamped(&self, x: i64, y: i64) -> u8 {
        let cx = x.clamp(0, self.width as i64 - 1) as usize;
        let cy = y.clamp(0, self.height as i64 - 1) as usize;
        self.data[cy * self.width as usize + cx]
    }
}

/// Validated current/previous pair with identical dimensions.
#[derive(Debug, Clone, Copy)]
pub struct FramePair<'a> {
    current: &'a GrayFrame,
    previous: &'a GrayFrame,
}

impl<'a> FramePair<'a> {
    pub fn new(current: &'a GrayFrame, previous: &'a GrayFrame) -> Result<Self, TamperError> {
        if current.dimensions() != previous.dimensions() {
            return Err(TamperError::dimension_mismatch(
                current.dimensions(),
                previous.dimensions(),
            ));
        }
        Ok(Self { current, previous })
    }

    pub fn current(&self) -> &'a GrayFrame {
        self.current
    }

    pub fn previous(&self) -> &'a GrayFrame {
        self.previous
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, TamperError> {
    if width == 0 || height == 0 {
        return Err(TamperError::decode_failure(format!(
            "frame has no pixels ({}x{})",
            width, height
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| TamperError::invalid_argument("frame dimensions overflow"))
}

/// BT.601 luma in fixed point: 0.299 R + 0.587 G + 0.114 B.
#[inline]
fn luminance(rgb: &[u8]) -> u8 {
    const R: u32 = 4899; // 0.299 * 2^14
    const G: u32 = 9617; // 0.587 * 2^14
    const B: u32 = 1868; // 0.114 * 2^14
    let y = R * rgb[0] as u32 + G * rgb[1] as u32 + B * rgb[2] as u32;
    ((y + (1 << 13)) >> 14) as u8
}
