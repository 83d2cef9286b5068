use crate::frame::GrayFrame;

/// Mean and population standard deviation of pixel intensities.
pub fn mean_stddev(frame: &GrayFrame) -> (f64, f64) {
    let n = frame.pixel_count() as f64;
    let (sum, sum_sq) = frame
        .pixels()
        .iter()
        .fold((0u64, 0u64), |(s, sq), &p| {
            let p = p as u64;
            (s + p, sq + p * p)
        });

    let mean = sum as f64 / n;
    let variance = (sum_sq as f64 / n - mean * mean).max(0.0);
    (mean, variance.sqrt())
}

/// Mean absolute per-pixel difference of two equally sized buffers.
pub fn mean_abs_diff(a: &[u8], b: &[u8]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return 0.0;
    }
    let total: u64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| x.abs_diff(y) as u64)
        .sum();
    total as f64 / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_frame_has_zero_stddev() {
        let frame = GrayFrame::filled(16, 9, 133).unwrap();
        let (mean, stddev) = mean_stddev(&frame);
        assert_eq!(mean, 133.0);
        assert_eq!(stddev, 0.0);
    }

    #[test]
    fn test_two_level_frame() {
        let frame = GrayFrame::new(vec![0, 100, 0, 100], 2, 2).unwrap();
        let (mean, stddev) = mean_stddev(&frame);
        assert_eq!(mean, 50.0);
        assert!((stddev - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_abs_diff() {
        assert_eq!(mean_abs_diff(&[10, 20, 30], &[10, 20, 30]), 0.0);
        assert_eq!(mean_abs_diff(&[0, 255], &[255, 0]), 255.0);
        assert_eq!(mean_abs_diff(&[5, 0], &[0, 5]), 5.0);
    }
}
