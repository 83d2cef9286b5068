use crate::config::AlertThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tamper categories the engine scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TamperKind {
    Blur,
    Blackout,
    Flash,
    Smear,
    SceneChange,
}

impl TamperKind {
    pub const ALL: [TamperKind; 5] = [
        TamperKind::Blur,
        TamperKind::Blackout,
        TamperKind::Flash,
        TamperKind::Smear,
        TamperKind::SceneChange,
    ];

    /// Stable output key for this score.
    pub fn key(&self) -> &'static str {
        match self {
            TamperKind::Blur => "blurScore",
            TamperKind::Blackout => "blackoutScore",
            TamperKind::Flash => "flashScore",
            TamperKind::Smear => "smearScore",
            TamperKind::SceneChange => "sceneChangeScore",
        }
    }

    pub fn threshold(&self, thresholds: &AlertThresholds) -> f64 {
        match self {
            TamperKind::Blur => thresholds.blur,
            TamperKind::Blackout => thresholds.blackout,
            TamperKind::Flash => thresholds.flash,
            TamperKind::Smear => thresholds.smear,
            TamperKind::SceneChange => thresholds.scene_change,
        }
    }
}

impl fmt::Display for TamperKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TamperKind::Blur => "blur",
            TamperKind::Blackout => "blackout",
            TamperKind::Flash => "flash",
            TamperKind::Smear => "smear",
            TamperKind::SceneChange => "scene change",
        };
        write!(f, "{}", name)
    }
}
