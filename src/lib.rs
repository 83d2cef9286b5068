//! camguard: deterministic camera-tamper scoring
//!
//! Computes blur, blackout, flash, smear and scene-change indicator scores
//! from decoded pixel data using closed-form image statistics. No learned
//! models, no per-deployment calibration, no state kept between calls.
//!
//! # Features
//! - Histogram, intensity, Laplacian-variance and edge-density statistics
//! - Five scorers, each mapping onto `[0, 100]`
//! - Smear composite with brightness-adaptive band thresholds
//! - TOML-tunable calibration constants with bit-identical defaults
//! - Parallel batch scoring
//!
//! # Usage
//! ```rust,no_run
//! use camguard::{Detector, FrameSource};
//!
//! let detector = Detector::default();
//! let report = detector
//!     .detect_sabotage(&FrameSource::Path("frame.jpg".into()))
//!     .expect("scoring failed");
//! println!("{}", serde_json::to_string(&report).unwrap());
//! ```
pub mod analysis;
pub mod config;
pub mod decode;
pub mod detector;
pub mod errors;
pub mod frame;
pub mod scoring;

// Testing utilities - synthetic frames for offline testing
pub mod testing;

// Re-exports for convenience
pub use config::CamguardConfig;
pub use decode::FrameSource;
pub use detector::Detector;
pub use errors::{TamperError, TamperErrorKind};
pub use frame::{FramePair, GrayFrame};
pub use scoring::{ScoreReport, TamperKind};

/// Sabotage report (blur, blackout, flash, smear) with default calibration.
pub fn detect_sabotage(source: &FrameSource) -> Result<ScoreReport, TamperError> {
    Detector::default().detect_sabotage(source)
}

/// Scene-change report with default calibration.
pub fn detect_scene_change(
    current: &FrameSource,
    previous: &FrameSource,
) -> Result<ScoreReport, TamperError> {
    Detector::default().detect_scene_change(current, Some(previous))
}

/// Smear-only report with default calibration.
pub fn detect_smear(source: &FrameSource) -> Result<ScoreReport, TamperError> {
    Detector::default().detect_smear(source)
}

/// Initialize logging for camguard
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("camguard=info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_crate_info() {
        let info = get_info();
        assert_eq!(info.name, "camguard");
        assert!(!info.version.is_empty());
        assert!(!info.description.is_empty());
    }

    #[test]
    fn test_detect_smear_rejects_empty_buffer() {
        let err = detect_smear(&FrameSource::Bytes(Vec::new())).unwrap_err();
        assert_eq!(err.kind(), TamperErrorKind::DecodeFailure);
    }
}
