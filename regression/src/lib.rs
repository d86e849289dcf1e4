pub mod arch;
pub mod configs;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod normalization;
pub mod optimization;
pub mod render;
pub mod sampling;
pub mod session;
pub mod training;

pub use error::{RegressionErr, Result};
