//! Gradient edge detection with hysteresis.
//!
//! Classic two-threshold detector:
//! 1. 3x3 Sobel gradients with replicated borders
//! 2. L1 magnitude `|gx| + |gy|`
//! 3. Non-maximum suppression along the gradient direction, quantized to
//!    0, 45, 90 or 135 degrees
//! 4. Hysteresis: pixels above `high` seed edges, pixels above `low` join an
//!    edge when 8-connected to one
use crate::frame::GrayFrame;

/// tan(22.5°) in Q15 fixed point.
const TAN_22_5_Q15: i64 = 13573;

const NOT_EDGE: u8 = 0;
const CANDIDATE: u8 = 1;
const EDGE: u8 = 2;

/// Per-pixel edge mask, `true` for edge pixels.
pub fn edge_map(frame: &GrayFrame, low: f64, high: f64) -> Vec<bool> {
    let (low, high) = if low > high { (high, low) } else { (low, high) };
    let low = low.floor() as i32;
    let high = high.floor() as i32;

    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let (gx, gy, mag) = sobel(frame);

    let mag_at = |x: i64, y: i64| -> i32 {
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
            0
        } else {
            mag[y as usize * width + x as usize]
        }
    };

    let mut state = vec![NOT_EDGE; width * height];
    let mut stack = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let m = mag[idx];
            if m <= low {
                continue;
            }

            let (xi, yi) = (x as i64, y as i64);
            let ax = gx[idx].unsigned_abs() as i64;
            let ay = (gy[idx].unsigned_abs() as i64) << 15;
            let tg22x = ax * TAN_22_5_Q15;

            let is_local_max = if ay < tg22x {
                m > mag_at(xi - 1, yi) && m >= mag_at(xi + 1, yi)
            } else {
                let tg67x = tg22x + (ax << 16);
                if ay > tg67x {
                    m > mag_at(xi, yi - 1) && m >= mag_at(xi, yi + 1)
                } else {
                    let s = if (gx[idx] ^ gy[idx]) < 0 { -1 } else { 1 };
                    m > mag_at(xi - s, yi - 1) && m > mag_at(xi + s, yi + 1)
                }
            };

            if !is_local_max {
                continue;
            }
            if m > high {
                state[idx] = EDGE;
                stack.push(idx);
            } else {
                state[idx] = CANDIDATE;
            }
        }
    }

    while let Some(idx) = stack.pop() {
        let x = (idx % width) as i64;
        let y = (idx / width) as i64;
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let n = ny as usize * width + nx as usize;
                if state[n] == CANDIDATE {
                    state[n] = EDGE;
                    stack.push(n);
                }
            }
        }
    }

    state.into_iter().map(|s| s == EDGE).collect()
}

/// Fraction of pixels (0.0-1.0) marked as edges.
pub fn edge_density(frame: &GrayFrame, low: f64, high: f64) -> f64 {
    let edges = edge_map(frame, low, high);
    let count = edges.iter().filter(|&&e| e).count();
    count as f64 / frame.pixel_count() as f64
}

/// Sobel gradients and their L1 magnitude.
fn sobel(frame: &GrayFrame) -> (Vec<i32>, Vec<i32>, Vec<i32>) {
    let width = frame.width() as i64;
    let height = frame.height() as i64;
    let len = frame.pixel_count();

    let mut gx = Vec::with_capacity(len);
    let mut gy = Vec::with_capacity(len);
    let mut mag = Vec::with_capacity(len);

    for y in 0..height {
        for x in 0..width {
            let p = |dx: i64, dy: i64| frame.clamped(x + dx, y + dy) as i32;

            let dx = (p(1, -1) + 2 * p(1, 0) + p(1, 1)) - (p(-1, -1) + 2 * p(-1, 0) + p(-1, 1));
            let dy = (p(-1, 1) + 2 * p(0, 1) + p(1, 1)) - (p(-1, -1) + 2 * p(0, -1) + p(1, -1));

            gx.push(dx);
            gy.push(dy);
            mag.push(dx.abs() + dy.abs());
        }
    }

    (gx, gy, mag)
}
