//! Scoring Properties Testing
//!
//! End-to-end checks of the documented scorer behaviour:
//! - Constant, black and white frames hit the expected extremes
//! - Scene change responds to identical and offset frames
//! - The smear remap keeps its discontinuity
//! - Input validation separates bad arguments from unreadable images

use camguard::analysis::edges::edge_density;
use camguard::analysis::laplacian::laplacian_variance;
use camguard::config::{EdgeConfig, SmearConfig};
use camguard::scoring::smear::remap_combined;
use camguard::testing::{synthetic_frame, synthetic_rgb_frame, SyntheticPattern};
use camguard::{Detector, GrayFrame, TamperErrorKind, TamperKind};

fn assert_in_range(label: &str, score: Option<f64>) {
    if let Some(score) = score {
        assert!(
            (0.0..=100.0).contains(&score),
            "{} out of range: {}",
            label,
            score
        );
    }
}

/// Test that constant frames are maximally blurry and contrast-free
#[test]
fn test_constant_frames_are_blurred() {
    let detector = Detector::default();

    for v in [0u8, 37, 128, 201, 255] {
        let frame = GrayFrame::filled(64, 48, v).unwrap();
        assert_eq!(laplacian_variance(&frame), 0.0);
        assert_eq!(edge_density(&frame, 50.0, 150.0), 0.0);

        let report = detector.score_sabotage(&frame);
        assert_eq!(report.blur_score, Some(100.0), "value {}", v);

        let breakdown = detector.smear_breakdown(&frame);
        assert_eq!(breakdown.contrast_score, 100.0);
        assert_eq!(breakdown.edge_score, 100.0);
    }
}

/// Test all-black frames report a full blackout
#[test]
fn test_black_frame() {
    let report = Detector::default().score_sabotage(&GrayFrame::filled(32, 32, 0).unwrap());
    assert_eq!(report.blackout_score, Some(100.0));
    assert_eq!(report.flash_score, Some(0.0));
}

/// Test all-white frames report a full flash
#[test]
fn test_white_frame() {
    let report = Detector::default().score_sabotage(&GrayFrame::filled(32, 32, 255).unwrap());
    assert_eq!(report.flash_score, Some(100.0));
    assert_eq!(report.blackout_score, Some(0.0));
}

/// Test a detailed scene is neither blurred, dark nor flashed
#[test]
fn test_healthy_scene() {
    let frame = synthetic_frame(SyntheticPattern::Scene, 0, 320, 240);
    let report = Detector::default().score_sabotage(&frame);

    println!("Healthy scene report: {:?}", report);

    assert_eq!(report.blur_score, Some(0.0));
    assert!(report.blackout_score.unwrap() < 50.0);
    assert!(report.flash_score.unwrap() < 50.0);
    assert!(report.triggered(&Default::default()).is_empty());
    for kind in TamperKind::ALL {
        assert_in_range(kind.key(), report.get(kind));
    }
}

/// Test a hazy, low-contrast frame scores as smeared
#[test]
fn test_haze_is_smeared() {
    let detector = Detector::default();
    let haze = synthetic_frame(SyntheticPattern::Haze(110), 0, 160, 120);
    let sharp = synthetic_frame(SyntheticPattern::Checkerboard(2), 0, 160, 120);

    let haze_score = detector.score_smear(&haze).smear_score.unwrap();
    let sharp_score = detector.score_smear(&sharp).smear_score.unwrap();

    println!("Smear: haze {:.2}, checkerboard {:.2}", haze_score, sharp_score);
    assert!(haze_score > 90.0);
    assert!(haze_score > sharp_score);
}

/// Test smear agrees between sabotage and smear-only modes
#[test]
fn test_smear_consistent_across_modes() {
    let detector = Detector::default();
    let frame = synthetic_frame(SyntheticPattern::Gradient, 0, 128, 64);
    assert_eq!(
        detector.score_sabotage(&frame).smear_score,
        detector.score_smear(&frame).smear_score
    );
}

/// Test smear from an RGB buffer matches the reduced gray frame
#[test]
fn test_smear_from_rgb() {
    let rgb = synthetic_rgb_frame(SyntheticPattern::Scene, 3, 64, 64);
    let gray = GrayFrame::from_rgb(&rgb, 64, 64).unwrap();
    let expected = synthetic_frame(SyntheticPattern::Scene, 3, 64, 64);
    let detector = Detector::default();
    assert_eq!(detector.score_smear(&gray), detector.score_smear(&expected));
}

/// Test the remap discontinuity at the breakpoint
#[test]
fn test_smear_breakpoint_discontinuity() {
    let config = SmearConfig::default();
    assert_eq!(remap_combined(20.0, &config), 10.0);
    assert!((remap_combined(20.000001, &config) - 20.0).abs() < 1e-4);
    assert!(remap_combined(20.000001, &config) > remap_combined(20.0, &config) + 9.0);
}

/// Test scene change between identical and offset frames
#[test]
fn test_scene_change_scores() {
    let detector = Detector::default();
    let base = synthetic_frame(SyntheticPattern::Solid(60), 0, 40, 30);
    let offset = synthetic_frame(SyntheticPattern::Solid(110), 0, 40, 30);

    let same = detector.score_scene_change(&base, Some(&base)).unwrap();
    assert_eq!(same.scene_change_score, Some(0.0));
    assert_eq!(same.to_map().len(), 1);

    let moved = detector.score_scene_change(&offset, Some(&base)).unwrap();
    assert_eq!(moved.scene_change_score, Some(100.0));

    // Direction does not matter
    let back = detector.score_scene_change(&base, Some(&offset)).unwrap();
    assert_eq!(back.scene_change_score, Some(100.0));
}

/// Test mismatched previous frames are rejected, never resized
#[test]
fn test_scene_change_dimension_mismatch() {
    let detector = Detector::default();
    let current = GrayFrame::filled(40, 30, 0).unwrap();
    let previous = GrayFrame::filled(30, 40, 0).unwrap();

    let err = detector
        .score_scene_change(&current, Some(&previous))
        .unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::InvalidArgument);
}

/// Test raw buffer validation at the boundary
#[test]
fn test_invalid_buffers() {
    assert_eq!(
        GrayFrame::new(vec![0; 5], 2, 2).unwrap_err().kind(),
        TamperErrorKind::InvalidArgument
    );
    assert_eq!(
        GrayFrame::new(Vec::new(), 0, 0).unwrap_err().kind(),
        TamperErrorKind::DecodeFailure
    );
    assert_eq!(
        GrayFrame::from_rgb(&[0; 11], 2, 2).unwrap_err().kind(),
        TamperErrorKind::InvalidArgument
    );
}

/// Test edge detector thresholds follow the configuration
#[test]
fn test_edge_thresholds_from_config() {
    let frame = synthetic_frame(SyntheticPattern::Checkerboard(8), 0, 64, 64);
    let edges = EdgeConfig::default();
    let strict = edge_density(&frame, 5000.0, 6000.0);
    let normal = edge_density(&frame, edges.low_threshold, edges.high_threshold);
    assert_eq!(strict, 0.0);
    assert!(normal > 0.0 && normal <= 1.0);
}
