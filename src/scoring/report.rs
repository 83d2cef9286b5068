use super::alerts::TamperKind;
use crate::config::AlertThresholds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores produced by one detector call. Only the scores relevant to the
/// requested mode are present; absent scores are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blur_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blackout_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flash_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub smear_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scene_change_score: Option<f64>,
}

impl ScoreReport {
    pub fn get(&self, kind: TamperKind) -> Option<f64> {
        match kind {
            TamperKind::Blur => self.blur_score,
            TamperKind::Blackout => self.blackout_score,
            TamperKind::Flash => self.flash_score,
            TamperKind::Smear => self.smear_score,
            TamperKind::SceneChange => self.scene_change_score,
        }
    }

    /// Present scores keyed by their stable output names.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        TamperKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind).map(|score| (kind.key(), score)))
            .collect()
    }

    /// Every present score at or above its alert threshold.
    pub fn triggered(&self, thresholds: &AlertThresholds) -> Vec<TamperKind> {
        TamperKind::ALL
            .iter()
            .copied()
            .filter(|kind| {
                self.get(*kind)
                    .map(|score| score >= kind.threshold(thresholds))
                    .unwrap_or(false)
            })
            .collect()
    }
}
