mod playground;
mod regressor;

pub use playground::{NormalizerConfig, PlaygroundConfig};
pub use regressor::{
    LossFnConfig, ModelConfig, OptimizerConfig, ParamGenConfig, RegressorConfig, SamplerConfig,
};
