//! Result aggregation
//!
//! [`Detector`] is the public boundary of the engine. It validates inputs,
//! computes only the statistics a request mode needs, runs the relevant
//! scorers and assembles a [`ScoreReport`]. It holds nothing but its
//! configuration, so one instance can be shared freely across threads.

use crate::analysis::FrameStats;
use crate::config::CamguardConfig;
use crate::decode::{decode_frame, FrameSource};
use crate::errors::TamperError;
use crate::frame::{FramePair, GrayFrame};
use crate::scoring::{
    blackout_score, blur_score, flash_score, scene_change_score, smear_breakdown, smear_score,
    ScoreReport, SmearBreakdown,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: CamguardConfig,
}

impl Detector {
    pub fn new(config: CamguardConfig) -> Result<Self, TamperError> {
        config.validate().map_err(TamperError::Config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CamguardConfig {
        &self.config
    }

    pub fn frame_stats(&self, frame: &GrayFrame) -> FrameStats {
        FrameStats::compute(frame, &self.config.edges, &self.config.smear)
    }

    // ---- Decoded-frame API ----

    /// Sabotage report: blur, blackout and flash, plus smear unless
    /// `detector.include_smear` is off.
    pub fn score_sabotage(&self, frame: &GrayFrame) -> ScoreReport {
        let stats = self.frame_stats(frame);
        let cfg = &self.config;

        let report = ScoreReport {
            blur_score: Some(blur_score(stats.laplacian_variance, &cfg.blur)),
            blackout_score: Some(blackout_score(&stats, &cfg.blackout)),
            flash_score: Some(flash_score(&stats, &cfg.flash)),
            smear_score: cfg
                .detector
                .include_smear
                .then(|| smear_score(&stats, &cfg.blur, &cfg.smear)),
            scene_change_score: None,
        };

        log::debug!("Sabotage report: {:?}", report);
        report
    }

    /// Smear-only report.
    pub fn score_smear(&self, frame: &GrayFrame) -> ScoreReport {
        let stats = self.frame_stats(frame);
        ScoreReport {
            smear_score: Some(smear_score(&stats, &self.config.blur, &self.config.smear)),
            ..Default::default()
        }
    }

    /// Full smear composite with every intermediate value.
    pub fn smear_breakdown(&self, frame: &GrayFrame) -> SmearBreakdown {
        let stats = self.frame_stats(frame);
        smear_breakdown(&stats, &self.config.blur, &self.config.smear)
    }

    /// Scene-change report. Both frames are required and must have the
    /// same dimensions.
    pub fn score_scene_change(
        &self,
        current: &GrayFrame,
        previous: Option<&GrayFrame>,
    ) -> Result<ScoreReport, TamperError> {
        let previous = previous.ok_or_else(|| {
            TamperError::invalid_argument("scene change requires a previous frame")
        })?;
        let pair = FramePair::new(current, previous)?;

        Ok(ScoreReport {
            scene_change_score: Some(scene_change_score(&pair, &self.config.scene_change)),
            ..Default::default()
        })
    }

    // ---- Encoded-input API ----

    pub fn detect_sabotage(&self, source: &FrameSource) -> Result<ScoreReport, TamperError> {
        let frame = decode_frame(source)?;
        Ok(self.score_sabotage(&frame))
    }

    pub fn detect_smear(&self, source: &FrameSource) -> Result<ScoreReport, TamperError> {
        let frame = decode_frame(source)?;
        Ok(self.score_smear(&frame))
    }

    pub fn detect_scene_change(
        &self,
        current: &FrameSource,
        previous: Option<&FrameSource>,
    ) -> Result<ScoreReport, TamperError> {
        let previous = previous.ok_or_else(|| {
            TamperError::invalid_argument("scene change requires a previous frame")
        })?;
        let current = decode_frame(current)?;
        let previous = decode_frame(previous)?;
        self.score_scene_change(&current, Some(&previous))
    }

    // ---- Batch API ----

    /// Sabotage reports for independent frames, scored in parallel.
    /// Results keep the order of `sources`; one bad input does not affect
    /// the others.
    pub fn detect_sabotage_batch(
        &self,
        sources: &[FrameSource],
    ) -> Vec<Result<ScoreReport, TamperError>> {
        log::info!("Scoring batch of {} frames", sources.len());
        sources
            .par_iter()
            .map(|source| {
                self.detect_sabotage(source).map_err(|e| {
                    log::warn!("Failed to score {}: {}", source.describe(), e);
                    e
                })
            })
            .collect()
    }

    /// Scene-change score for every frame of a sequence against its
    /// predecessor. The first frame has no predecessor and scores 0.
    pub fn scene_change_series(&self, frames: &[GrayFrame]) -> Result<Vec<f64>, TamperError> {
        let pairs = frames
            .windows(2)
            .map(|w| FramePair::new(&w[1], &w[0]))
            .collect::<Result<Vec<_>, _>>()?;

        let mut scores = Vec::with_capacity(frames.len());
        if !frames.is_empty() {
            scores.push(0.0);
        }
        scores.par_extend(
            pairs
                .par_iter()
                .map(|pair| scene_change_score(pair, &self.config.scene_change)),
        );
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TamperErrorKind;

    #[test]
    fn test_sabotage_report_fields() {
        let detector = Detector::default();
        let report = detector.score_sabotage(&GrayFrame::filled(8, 8, 0).unwrap());
        assert_eq!(report.blur_score, Some(100.0));
        assert_eq!(report.blackout_score, Some(100.0));
        assert_eq!(report.flash_score, Some(0.0));
        assert!(report.smear_score.is_some());
        assert!(report.scene_change_score.is_none());
    }

    #[test]
    fn test_sabotage_without_smear() {
        let mut config = CamguardConfig::default();
        config.detector.include_smear = false;
        let detector = Detector::new(config).unwrap();
        let report = detector.score_sabotage(&GrayFrame::filled(8, 8, 128).unwrap());
        assert!(report.smear_score.is_none());
        assert!(report.blur_score.is_some());
    }

    #[test]
    fn test_smear_only_report() {
        let report = Detector::default().score_smear(&GrayFrame::filled(8, 8, 128).unwrap());
        assert!(report.smear_score.is_some());
        assert_eq!(report.to_map().len(), 1);
    }

    #[test]
    fn test_scene_change_requires_previous() {
        let frame = GrayFrame::filled(8, 8, 0).unwrap();
        let err = Detector::default().score_scene_change(&frame, None).unwrap_err();
        assert_eq!(err.kind(), TamperErrorKind::InvalidArgument);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = CamguardConfig::default();
        config.scene_change.full_scale_diff = -1.0;
        let err = Detector::new(config).unwrap_err();
        assert_eq!(err.kind(), TamperErrorKind::Config);
    }

    #[test]
    fn test_scene_change_series() {
        let frames = vec![
            GrayFrame::filled(4, 4, 100).unwrap(),
            GrayFrame::filled(4, 4, 100).unwrap(),
            GrayFrame::filled(4, 4, 125).unwrap(),
            GrayFrame::filled(4, 4, 200).unwrap(),
        ];
        let scores = Detector::default().scene_change_series(&frames).unwrap();
        assert_eq!(scores, vec![0.0, 0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_scene_change_series_rejects_mismatch() {
        let frames = vec![
            GrayFrame::filled(4, 4, 100).unwrap(),
            GrayFrame::filled(4, 5, 100).unwrap(),
        ];
        assert!(Detector::default().scene_change_series(&frames).is_err());
        assert!(Detector::default().scene_change_series(&[]).unwrap().is_empty());
    }
}
