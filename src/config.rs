//! Configuration management for camguard
//!
//! Every calibration constant used by the scorers lives here so it can be
//! tuned without touching scoring logic. `Default` reproduces the reference
//! calibration exactly; a TOML file may override any subset of fields.

use crate::errors::TamperError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CamguardConfig {
    pub blur: BlurConfig,
    pub blackout: BlackoutConfig,
    pub flash: FlashConfig,
    pub scene_change: SceneChangeConfig,
    pub smear: SmearConfig,
    pub edges: EdgeConfig,
    pub detector: DetectorConfig,
    pub alerts: AlertThresholds,
}

/// Blur score calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    /// Laplacian variance at or above which a frame scores 0 (sharp)
    pub max_variance: f64,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            max_variance: 1000.0,
        }
    }
}

/// Blackout score calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackoutConfig {
    /// Pixels with intensity strictly below this level count as dark
    pub dark_level: u32,
    /// Mean intensity below which the intensity term starts contributing
    pub mean_pivot: f64,
    pub mean_weight: f64,
    pub dark_pct_weight: f64,
}

impl Default for BlackoutConfig {
    fn default() -> Self {
        Self {
            dark_level: 75,
            mean_pivot: 60.0,
            mean_weight: 1.5,
            dark_pct_weight: 0.6,
        }
    }
}

/// Flash score calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    /// Pixels at or above this level count as bright
    pub bright_level: u32,
    pub bright_pct_weight: f64,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            bright_level: 200,
            bright_pct_weight: 3.0,
        }
    }
}

/// Scene change calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneChangeConfig {
    /// Mean absolute difference that maps to a full score of 100
    pub full_scale_diff: f64,
}

impl Default for SceneChangeConfig {
    fn default() -> Self {
        Self {
            full_scale_diff: 50.0,
        }
    }
}

/// Edge detector thresholds shared by every edge-density consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub low_threshold: f64,
    pub high_threshold: f64,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

/// Smear composite calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmearConfig {
    /// Standard deviation that maps to a contrast score of 0
    pub contrast_full_scale_stddev: f64,
    /// Multiplier turning edge density (0-1) into an edge penalty
    pub edge_density_scale: f64,

    pub blur_weight: f64,
    pub contrast_weight: f64,
    pub edge_weight: f64,

    /// First intensity level of the mid band
    pub dark_band_end: u32,
    /// First intensity level of the bright band
    pub bright_band_start: u32,

    /// Mean intensity where the brightness factor saturates at 1
    pub brightness_pivot: f64,
    pub bright_mean_weight: f64,

    pub dark_threshold_base: f64,
    pub dark_threshold_span: f64,
    pub bright_threshold_base: f64,
    pub bright_threshold_span: f64,
    pub mid_threshold_base: f64,
    pub mid_threshold_span: f64,

    pub dark_pct_weight: f64,
    pub bright_pct_weight: f64,
    pub mid_pct_weight: f64,

    /// Weight of the intensity-distribution score in the combined score
    pub intensity_weight: f64,

    /// Combined score above which the stretch branch applies
    pub breakpoint: f64,
    pub stretch_factor: f64,
    pub compress_factor: f64,
}

impl Default for SmearConfig {
    fn default() -> Self {
        Self {
            contrast_full_scale_stddev: 10.0,
            edge_density_scale: 150.0,
            blur_weight: 0.5,
            contrast_weight: 0.3,
            edge_weight: 0.2,
            dark_band_end: 85,
            bright_band_start: 170,
            brightness_pivot: 120.0,
            bright_mean_weight: 0.8,
            dark_threshold_base: 8.0,
            dark_threshold_span: 3.0,
            bright_threshold_base: 8.0,
            bright_threshold_span: 3.0,
            mid_threshold_base: 15.0,
            mid_threshold_span: 2.0,
            dark_pct_weight: 0.5,
            bright_pct_weight: 0.5,
            mid_pct_weight: 0.3,
            intensity_weight: 0.4,
            breakpoint: 20.0,
            stretch_factor: 1.5,
            compress_factor: 0.5,
        }
    }
}

/// Aggregator behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Include the smear composite in sabotage reports
    pub include_smear: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            include_smear: true,
        }
    }
}

/// Per-score alert thresholds (0-100); a score at or above its threshold
/// is reported as triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub blur: f64,
    pub blackout: f64,
    pub flash: f64,
    pub smear: f64,
    pub scene_change: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            blur: 50.0,
            blackout: 50.0,
            flash: 50.0,
            smear: 50.0,
            scene_change: 50.0,
        }
    }
}

impl CamguardConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TamperError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| TamperError::Config(format!("Failed to read config file: {}", e)))?;

        let config: CamguardConfig = toml::from_str(&contents)
            .map_err(|e| TamperError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate().map_err(TamperError::Config)?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TamperError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    TamperError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| TamperError::Config(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, TamperError> {
        toml::to_string_pretty(self)
            .map_err(|e| TamperError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("camguard.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number, got {}", name, value));
            }
        }

        if !(self.blur.max_variance > 0.0) {
            return Err("Blur max_variance must be positive".to_string());
        }

        if self.blackout.dark_level > 256 {
            return Err("Blackout dark_level must be at most 256".to_string());
        }
        if self.flash.bright_level > 256 {
            return Err("Flash bright_level must be at most 256".to_string());
        }

        if !(self.scene_change.full_scale_diff > 0.0) {
            return Err("Scene change full_scale_diff must be positive".to_string());
        }

        if self.edges.low_threshold < 0.0 || self.edges.high_threshold < 0.0 {
            return Err("Edge thresholds must be non-negative".to_string());
        }

        let smear = &self.smear;
        if !(smear.contrast_full_scale_stddev > 0.0) {
            return Err("Smear contrast_full_scale_stddev must be positive".to_string());
        }
        if !(smear.brightness_pivot > 0.0) {
            return Err("Smear brightness_pivot must be positive".to_string());
        }
        if smear.dark_band_end > smear.bright_band_start || smear.bright_band_start > 256 {
            return Err(
                "Smear bands must satisfy dark_band_end <= bright_band_start <= 256".to_string(),
            );
        }

        let alerts = [
            ("blur", self.alerts.blur),
            ("blackout", self.alerts.blackout),
            ("flash", self.alerts.flash),
            ("smear", self.alerts.smear),
            ("scene_change", self.alerts.scene_change),
        ];
        for (name, threshold) in alerts {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(format!(
                    "Alert threshold for {} must be between 0 and 100",
                    name
                ));
            }
        }

        Ok(())
    }

    /// Every floating point calibration value, keyed by its TOML path.
    fn numeric_fields(&self) -> [(&'static str, f64); 33] {
        let s = &self.smear;
        [
            ("blur.max_variance", self.blur.max_variance),
            ("blackout.mean_pivot", self.blackout.mean_pivot),
            ("blackout.mean_weight", self.blackout.mean_weight),
            ("blackout.dark_pct_weight", self.blackout.dark_pct_weight),
            ("flash.bright_pct_weight", self.flash.bright_pct_weight),
            ("scene_change.full_scale_diff", self.scene_change.full_scale_diff),
            ("edges.low_threshold", self.edges.low_threshold),
            ("edges.high_threshold", self.edges.high_threshold),
            ("smear.contrast_full_scale_stddev", s.contrast_full_scale_stddev),
            ("smear.edge_density_scale", s.edge_density_scale),
            ("smear.blur_weight", s.blur_weight),
            ("smear.contrast_weight", s.contrast_weight),
            ("smear.edge_weight", s.edge_weight),
            ("smear.brightness_pivot", s.brightness_pivot),
            ("smear.bright_mean_weight", s.bright_mean_weight),
            ("smear.dark_threshold_base", s.dark_threshold_base),
            ("smear.dark_threshold_span", s.dark_threshold_span),
            ("smear.bright_threshold_base", s.bright_threshold_base),
            ("smear.bright_threshold_span", s.bright_threshold_span),
            ("smear.mid_threshold_base", s.mid_threshold_base),
            ("smear.mid_threshold_span", s.mid_threshold_span),
            ("smear.dark_pct_weight", s.dark_pct_weight),
            ("smear.bright_pct_weight", s.bright_pct_weight),
            ("smear.mid_pct_weight", s.mid_pct_weight),
            ("smear.intensity_weight", s.intensity_weight),
            ("smear.breakpoint", s.breakpoint),
            ("smear.stretch_factor", s.stretch_factor),
            ("smear.compress_factor", s.compress_factor),
            ("alerts.blur", self.alerts.blur),
            ("alerts.blackout", self.alerts.blackout),
            ("alerts.flash", self.alerts.flash),
            ("alerts.smear", self.alerts.smear),
            ("alerts.scene_change", self.alerts.scene_change),
        ]
    }
}
