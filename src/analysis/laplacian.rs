//! Laplacian sharpness measure.
//!
//! Convolves the frame with the 4-connected kernel
//! `[[0, 1, 0], [1, -4, 1], [0, 1, 0]]` using replicated borders and returns
//! the population variance of the response. Flat or defocused frames have
//! little second-derivative energy and therefore a low variance.
use crate::frame::GrayFrame;

pub fn laplacian_variance(frame: &GrayFrame) -> f64 {
    let width = frame.width() as i64;
    let height = frame.height() as i64;
    let pixels = frame.pixels();

    let mut sum = 0i64;
    let mut sum_sq = 0i64;

    for y in 0..height {
        let row = (y * width) as usize;
        for x in 0..width {
            let center = pixels[row + x as usize] as i64;
            let response = frame.clamped(x, y - 1) as i64
                + frame.clamped(x, y + 1) as i64
                + frame.clamped(x - 1, y) as i64
                + frame.clamped(x + 1, y) as i64
                - 4 * center;
            sum += response;
            sum_sq += response * response;
        }
    }

    let n = (width * height) as f64;
    let mean = sum as f64 / n;
    (sum_sq as f64 / n - mean * mean).max(0.0)
}
