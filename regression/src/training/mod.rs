mod builder;
mod regressor;
mod trainer;

pub use builder::RegressorBuilder;
pub use regressor::{LinearRegressor, OnlineRegressor, PolynomialRegressor, Regressor};
pub use trainer::OnlineTrainer;
