//! Pipeline configuration.
//!
//! Every empirically tuned constant of the pipeline lives here so that
//! tuning against a real camera is a config edit, not a code edit. The
//! defaults are the reference values the gesture thresholds were derived
//! with.

/// Candidate-mask extraction controls.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Minimum contour area (px²) for a region to qualify as a hand.
    pub min_area_px: f64,
    /// Pre-blur sigma applied before locally-normalized binarization.
    pub adaptive_pre_sigma: f32,
    /// Sigma of the local-mean estimate used by the adaptive strategy.
    pub local_mean_sigma: f32,
    /// Offset below the local mean (intensity levels) required for a pixel
    /// to count as foreground in the adaptive strategy.
    pub local_mean_offset: u8,
    /// Pre-blur sigma applied before global bimodal thresholding.
    pub bimodal_sigma: f32,
    /// Mean-intensity factor for the brightness-adaptive fixed threshold.
    pub fixed_mean_factor: f32,
    /// Lower clamp of the brightness-adaptive fixed threshold.
    pub fixed_floor: f32,
    /// Upper clamp of the brightness-adaptive fixed threshold.
    pub fixed_ceiling: f32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_area_px: 2000.0,
            adaptive_pre_sigma: 1.4,
            local_mean_sigma: 2.0,
            local_mean_offset: 2,
            bimodal_sigma: 1.7,
            fixed_mean_factor: 0.7,
            fixed_floor: 80.0,
            fixed_ceiling: 180.0,
        }
    }
}

/// Convexity-defect depth gate.
///
/// A defect counts toward the finger estimate when its depth exceeds
/// `max(depth_floor, area * depth_area_frac)`. Both constants are expressed
/// in 1/256-px fixed-point depth units; the gate scales with contour area so
/// near and far hands are counted consistently.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DefectConfig {
    /// Minimum defect depth gate (fixed-point units).
    pub depth_floor: f64,
    /// Area-proportional component of the depth gate.
    pub depth_area_frac: f64,
}

impl Default for DefectConfig {
    fn default() -> Self {
        Self {
            depth_floor: 1000.0,
            depth_area_frac: 0.01,
        }
    }
}

/// Shape-descriptor controls.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Polygon-approximation epsilon as a fraction of the contour perimeter.
    pub epsilon_frac: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { epsilon_frac: 0.02 }
    }
}

/// Top-level classification configuration.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Candidate extraction controls.
    pub extract: ExtractConfig,
    /// Convexity-defect gating controls.
    pub defects: DefectConfig,
    /// Shape-descriptor controls.
    pub features: FeatureConfig,
}
