//! Decoding Testing
//!
//! Encoded inputs through the public API:
//! - Path and buffer inputs produce identical scores
//! - Zero-byte and corrupt inputs fail as decode failures
//! - Missing files fail as invalid arguments
//! - Batch scoring isolates failures per input

use camguard::testing::{synthetic_frame, SyntheticPattern};
use camguard::{detect_sabotage, detect_scene_change, Detector, FrameSource, TamperErrorKind};
use image::{DynamicImage, GrayImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use tempfile::tempdir;

fn scene_png(frame_number: u64, width: u32, height: u32) -> Vec<u8> {
    let frame = synthetic_frame(SyntheticPattern::Scene, frame_number, width, height);
    let image = GrayImage::from_raw(width, height, frame.pixels().to_vec()).unwrap();
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_path_and_buffer_agree() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("frame.png");
    let bytes = scene_png(0, 96, 64);
    std::fs::write(&path, &bytes).unwrap();

    let from_path = detect_sabotage(&FrameSource::Path(path)).unwrap();
    let from_bytes = detect_sabotage(&FrameSource::Bytes(bytes)).unwrap();
    assert_eq!(from_path, from_bytes);
    assert!(from_path.smear_score.is_some());
}

#[test]
fn test_decoded_frame_matches_raw_scores() {
    let frame = synthetic_frame(SyntheticPattern::Scene, 2, 80, 60);
    let detector = Detector::default();
    let direct = detector.score_sabotage(&frame);
    let decoded = detector
        .detect_sabotage(&FrameSource::Bytes(scene_png(2, 80, 60)))
        .unwrap();
    assert_eq!(direct, decoded);
}

#[test]
fn test_zero_byte_input() {
    let err = detect_sabotage(&FrameSource::Bytes(Vec::new())).unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::DecodeFailure);

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty.png");
    std::fs::write(&path, b"").unwrap();
    let err = detect_sabotage(&FrameSource::Path(path)).unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::DecodeFailure);
}

#[test]
fn test_corrupt_input() {
    let mut bytes = scene_png(0, 32, 32);
    bytes.truncate(bytes.len() / 2);
    let err = detect_sabotage(&FrameSource::Bytes(bytes)).unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::DecodeFailure);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().expect("tempdir");
    let err = detect_sabotage(&FrameSource::Path(dir.path().join("missing.jpg"))).unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::InvalidArgument);

    // A directory is not an image either
    let err = detect_sabotage(&FrameSource::Path(dir.path().to_path_buf())).unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::InvalidArgument);
}

#[test]
fn test_scene_change_from_encoded_inputs() {
    let current = FrameSource::Bytes(scene_png(0, 64, 48));
    let same = detect_scene_change(&current, &current).unwrap();
    assert_eq!(same.scene_change_score, Some(0.0));

    let smaller = FrameSource::Bytes(scene_png(0, 32, 48));
    let err = detect_scene_change(&current, &smaller).unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::InvalidArgument);

    let err = Detector::default()
        .detect_scene_change(&current, None)
        .unwrap_err();
    assert_eq!(err.kind(), TamperErrorKind::InvalidArgument);
}

#[test]
fn test_smear_from_color_image() {
    let image = RgbImage::from_pixel(48, 48, Rgb([10, 200, 10]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let report = camguard::detect_smear(&FrameSource::Bytes(bytes)).unwrap();
    assert_eq!(report.to_map().len(), 1);
    // Flat green: no detail at all
    assert_eq!(report.smear_score, Some(100.0));
}

#[test]
fn test_batch_isolates_failures() {
    let sources = vec![
        FrameSource::Bytes(scene_png(0, 40, 40)),
        FrameSource::Bytes(Vec::new()),
        FrameSource::Bytes(scene_png(1, 40, 40)),
    ];
    let results = Detector::default().detect_sabotage_batch(&sources);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().kind(),
        TamperErrorKind::DecodeFailure
    );
    assert!(results[2].is_ok());
}
