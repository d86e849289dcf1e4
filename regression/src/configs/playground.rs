use serde::{Deserialize, Serialize};

use super::RegressorConfig;
use crate::normalization::{MAX_X, MAX_Y};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub max_x: f32,
    pub max_y: f32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_x: MAX_X,
            max_y: MAX_Y,
        }
    }
}

/// The configuration of a whole playground session.
///
/// Every field is optional when deserializing, missing ones fall back to the reference values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default = "RegressorConfig::linear")]
    pub linear: RegressorConfig,
    #[serde(default = "RegressorConfig::polynomial")]
    pub polynomial: RegressorConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            linear: RegressorConfig::linear(),
            polynomial: RegressorConfig::polynomial(),
            seed: None,
        }
    }
}
