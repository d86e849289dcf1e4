mod cubic;
mod linear;

pub use cubic::Cubic;
pub use linear::Linear;
