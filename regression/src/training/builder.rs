use std::{cell::RefCell, rc::Rc};

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{OnlineRegressor, OnlineTrainer, Regressor};
use crate::{
    RegressionErr, Result,
    arch::{
        Model,
        loss::{LossFn, Mse},
        models::{Cubic, Linear},
    },
    configs::{
        LossFnConfig, ModelConfig, OptimizerConfig, ParamGenConfig, RegressorConfig,
        SamplerConfig,
    },
    initialization::{FixedParamGen, RandParamGen, generate},
    normalization::Normalizer,
    optimization::{Adam, GradientDescent, Optimizer},
    sampling::CurveSampler,
};

/// Builds `Regressor`s given a configuration.
///
/// Every regressor built by the same builder draws its initial parameters from one shared random
/// number generator, so a seeded builder always yields the same sequence of regressors.
pub struct RegressorBuilder<R: Rng> {
    rng: Rc<RefCell<R>>,
}

impl RegressorBuilder<StdRng> {
    /// Creates a new `RegressorBuilder`.
    ///
    /// # Arguments
    /// * `seed` - The seed for the parameter initialization, or `None` to seed from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(rng)
    }
}

impl<R: Rng + 'static> RegressorBuilder<R> {
    /// Creates a new `RegressorBuilder` drawing from the given random number generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Rc::new(RefCell::new(rng)),
        }
    }

    /// Builds a new `Regressor` following a configuration.
    ///
    /// # Arguments
    /// * `config` - The configuration for the regressor.
    /// * `normalizer` - Maps display-space points into the training domain and back.
    ///
    /// # Returns
    /// An error if the initializer or the sampler are misconfigured.
    pub fn build(
        &self,
        config: &RegressorConfig,
        normalizer: Normalizer,
    ) -> Result<Box<dyn Regressor>> {
        debug!("building {:?} regressor", config.model);
        self.resolve_model(config, normalizer)
    }

    fn resolve_model(
        &self,
        config: &RegressorConfig,
        normalizer: Normalizer,
    ) -> Result<Box<dyn Regressor>> {
        match config.model {
            ModelConfig::Linear => self.resolve_optimizer(config, normalizer, Linear::new()),
            ModelConfig::Cubic => self.resolve_optimizer(config, normalizer, Cubic::new()),
        }
    }

    fn resolve_optimizer<M>(
        &self,
        config: &RegressorConfig,
        normalizer: Normalizer,
        model: M,
    ) -> Result<Box<dyn Regressor>>
    where
        M: Model + 'static,
    {
        let size = model.size();

        match config.optimizer {
            OptimizerConfig::GradientDescent { lr } => {
                let optimizer = GradientDescent::new(lr);
                self.resolve_loss(config, normalizer, model, optimizer)
            }
            OptimizerConfig::Adam { lr, b1, b2, eps } => {
                let optimizer = Adam::new(size, lr, b1, b2, eps);
                self.resolve_loss(config, normalizer, model, optimizer)
            }
        }
    }

    fn resolve_loss<M, O>(
        &self,
        config: &RegressorConfig,
        normalizer: Normalizer,
        model: M,
        optimizer: O,
    ) -> Result<Box<dyn Regressor>>
    where
        M: Model + 'static,
        O: Optimizer + 'static,
    {
        match config.loss_fn {
            LossFnConfig::Mse => {
                let loss = Mse::new();
                self.terminate_build(config, normalizer, model, optimizer, loss)
            }
        }
    }

    fn terminate_build<M, O, L>(
        &self,
        config: &RegressorConfig,
        normalizer: Normalizer,
        model: M,
        optimizer: O,
        loss_fn: L,
    ) -> Result<Box<dyn Regressor>>
    where
        M: Model + 'static,
        O: Optimizer + 'static,
        L: LossFn + 'static,
    {
        let params = self.resolve_params(&config.init, model.size())?;
        let sampler = self.resolve_sampler(config.sampler)?;
        let trainer = OnlineTrainer::new(model, optimizer, loss_fn, params, config.epochs)?;

        let regressor = OnlineRegressor::new(trainer, normalizer, sampler);
        Ok(Box::new(regressor))
    }

    fn resolve_params(&self, config: &ParamGenConfig, n: usize) -> Result<Vec<f32>> {
        match config {
            ParamGenConfig::Const { value } => generate(&mut FixedParamGen::repeat(*value, n), n),
            ParamGenConfig::Fixed { values } => {
                if values.len() != n {
                    return Err(RegressionErr::SizeMismatch {
                        what: "initial parameters",
                        got: values.len(),
                        expected: n,
                    });
                }

                generate(&mut FixedParamGen::new(values.clone()), n)
            }
            ParamGenConfig::Uniform { low, high } => {
                let rng = self.rng.clone();
                generate(&mut RandParamGen::uniform(rng, n, *low, *high)?, n)
            }
        }
    }

    fn resolve_sampler(&self, config: SamplerConfig) -> Result<CurveSampler> {
        match config {
            SamplerConfig::Endpoints => Ok(CurveSampler::Endpoints),
            SamplerConfig::Scan { step } => CurveSampler::scan(step),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    #[test]
    fn reference_configs() {
        let builder = RegressorBuilder::new(Some(1));
        let normalizer = Normalizer::default();

        let linear = builder.build(&RegressorConfig::linear(), normalizer).unwrap();
        let polynomial = builder
            .build(&RegressorConfig::polynomial(), normalizer)
            .unwrap();

        assert_eq!(linear.param_names(), ["m", "b"]);
        assert_eq!(polynomial.param_names(), ["a", "b", "c", "d"]);
        assert_eq!(linear.sample().len(), 2);
        assert_eq!(polynomial.sample().len(), 100);
        assert!(linear.params().iter().all(|p| (-1.0..1.0).contains(p)));
        assert!(polynomial.params().iter().all(|p| (-1.0..1.0).contains(p)));
    }

    #[test]
    fn same_seed_same_params() {
        let a = RegressorBuilder::new(Some(9));
        let b = RegressorBuilder::new(Some(9));
        let config = RegressorConfig::polynomial();
        let normalizer = Normalizer::default();

        let a = a.build(&config, normalizer).unwrap();
        let b = b.build(&config, normalizer).unwrap();

        assert_eq!(a.params(), b.params());
    }

    #[test]
    fn const_init() {
        let config = RegressorConfig {
            init: ParamGenConfig::Const { value: 0.25 },
            ..RegressorConfig::linear()
        };

        let regressor = RegressorBuilder::new(None)
            .build(&config, Normalizer::default())
            .unwrap();

        assert_eq!(regressor.params(), [0.25, 0.25]);
    }

    #[test]
    fn fixed_init() {
        let config = RegressorConfig {
            init: ParamGenConfig::Fixed {
                values: vec![0.8, 0., -0.5, 0.1],
            },
            ..RegressorConfig::polynomial()
        };

        let regressor = RegressorBuilder::new(None)
            .build(&config, Normalizer::default())
            .unwrap();
        assert_eq!(regressor.params(), [0.8, 0., -0.5, 0.1]);

        let result = RegressorBuilder::new(None).build(
            &RegressorConfig {
                init: config.init,
                ..RegressorConfig::linear()
            },
            Normalizer::default(),
        );
        assert!(matches!(
            result,
            Err(RegressionErr::SizeMismatch {
                got: 4,
                expected: 2,
                ..
            })
        ));
    }

    #[test]
    fn custom_optimizer_and_epochs() {
        let config = RegressorConfig {
            optimizer: OptimizerConfig::GradientDescent { lr: 0.1 },
            epochs: NonZeroUsize::new(10).unwrap(),
            ..RegressorConfig::linear()
        };

        let mut regressor = RegressorBuilder::new(Some(0))
            .build(&config, Normalizer::default())
            .unwrap();
        regressor.observe(100., 100.);

        assert_eq!(regressor.last_losses().len(), 10);
    }

    #[test]
    fn invalid_sampler() {
        let config = RegressorConfig {
            sampler: SamplerConfig::Scan { step: 0. },
            ..RegressorConfig::polynomial()
        };

        let result = RegressorBuilder::new(Some(0)).build(&config, Normalizer::default());
        assert!(matches!(result, Err(RegressionErr::InvalidStep(_))));
    }

    #[test]
    fn invalid_init() {
        let config = RegressorConfig {
            init: ParamGenConfig::Uniform { low: 1., high: 1. },
            ..RegressorConfig::linear()
        };

        let result = RegressorBuilder::new(Some(0)).build(&config, Normalizer::default());
        assert!(matches!(result, Err(RegressionErr::InvalidDistribution(_))));
    }
}
