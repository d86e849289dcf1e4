use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{
    optimization::Adam,
    sampling::ScanStep,
    training::{LinearRegressor, PolynomialRegressor},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelConfig {
    Linear,
    Cubic,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossFnConfig {
    #[default]
    Mse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptimizerConfig {
    Adam {
        lr: f32,
        #[serde(default = "default_beta1")]
        b1: f32,
        #[serde(default = "default_beta2")]
        b2: f32,
        #[serde(default = "default_epsilon")]
        eps: f32,
    },
    GradientDescent {
        lr: f32,
    },
}

fn default_beta1() -> f32 {
    Adam::DEFAULT_BETA1
}

fn default_beta2() -> f32 {
    Adam::DEFAULT_BETA2
}

fn default_epsilon() -> f32 {
    Adam::DEFAULT_EPSILON
}

/// How the initial parameters get generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamGenConfig {
    /// Every parameter starts at `value`.
    Const { value: f32 },
    /// One value per parameter, in the model's order.
    Fixed { values: Vec<f32> },
    Uniform { low: f32, high: f32 },
}

impl Default for ParamGenConfig {
    fn default() -> Self {
        Self::Uniform { low: -1., high: 1. }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SamplerConfig {
    Endpoints,
    Scan { step: f32 },
}

/// Everything needed to build one regressor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressorConfig {
    pub model: ModelConfig,
    pub optimizer: OptimizerConfig,
    #[serde(default)]
    pub loss_fn: LossFnConfig,
    #[serde(default)]
    pub init: ParamGenConfig,
    pub epochs: NonZeroUsize,
    pub sampler: SamplerConfig,
}

impl RegressorConfig {
    /// The reference linear regressor: gradient descent at 0.5, 50 epochs, both endpoints.
    pub fn linear() -> Self {
        Self {
            model: ModelConfig::Linear,
            optimizer: OptimizerConfig::GradientDescent {
                lr: LinearRegressor::LEARNING_RATE,
            },
            loss_fn: LossFnConfig::Mse,
            init: ParamGenConfig::default(),
            epochs: LinearRegressor::EPOCHS,
            sampler: SamplerConfig::Endpoints,
        }
    }

    /// The reference polynomial regressor: Adam at 0.2, 100 epochs, scanned every 0.02.
    pub fn polynomial() -> Self {
        Self {
            model: ModelConfig::Cubic,
            optimizer: OptimizerConfig::Adam {
                lr: PolynomialRegressor::LEARNING_RATE,
                b1: Adam::DEFAULT_BETA1,
                b2: Adam::DEFAULT_BETA2,
                eps: Adam::DEFAULT_EPSILON,
            },
            loss_fn: LossFnConfig::Mse,
            init: ParamGenConfig::default(),
            epochs: PolynomialRegressor::EPOCHS,
            sampler: SamplerConfig::Scan {
                step: ScanStep::DEFAULT.get(),
            },
        }
    }
}
