use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

/// The result type used in the entire regression crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression crate's error type.
///
/// Only construction and configuration can fail, training and sampling never do.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionErr {
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    ParamGenExhausted {
        got: usize,
        expected: usize,
    },
    InvalidDistribution(String),
    InvalidScale {
        axis: &'static str,
        value: f32,
    },
    InvalidStep(f32),
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch in the {what}, got {got} and expected {expected}"
            ),
            RegressionErr::ParamGenExhausted { got, expected } => write!(
                f,
                "The parameter generator was exhausted, it yielded {got} of the expected {expected} parameters"
            ),
            RegressionErr::InvalidDistribution(msg) => {
                write!(f, "The parameter distribution is invalid: {msg}")
            }
            RegressionErr::InvalidScale { axis, value } => write!(
                f,
                "The {axis} scale must be finite and positive, got {value}"
            ),
            RegressionErr::InvalidStep(step) => {
                write!(f, "The sampling step must be in [1e-4, 2], got {step}")
            }
        }
    }
}

impl Error for RegressionErr {}

impl From<UniformError> for RegressionErr {
    fn from(value: UniformError) -> Self {
        Self::InvalidDistribution(value.to_string())
    }
}
