use ndarray::ArrayView1;

/// A growing set of training samples, kept in insertion order.
///
/// `x_vals` and `y_vals` always have the same length since they can only be appended to in
/// lock-step through `push`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    x_vals: Vec<f32>,
    y_vals: Vec<f32>,
}

impl Dataset {
    /// Creates a new empty `Dataset`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new sample at the end of the dataset.
    ///
    /// # Arguments
    /// * `x` - The input value.
    /// * `y` - The expected output for `x`.
    pub fn push(&mut self, x: f32, y: f32) {
        self.x_vals.push(x);
        self.y_vals.push(y);
    }

    pub fn len(&self) -> usize {
        self.x_vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_vals.is_empty()
    }

    /// Returns a view over every input value, in insertion order.
    pub fn x(&self) -> ArrayView1<'_, f32> {
        ArrayView1::from(&self.x_vals[..])
    }

    /// Returns a view over every expected output, in insertion order.
    pub fn y(&self) -> ArrayView1<'_, f32> {
        ArrayView1::from(&self.y_vals[..])
    }

    /// Iterates the samples as `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.x_vals.iter().copied().zip(self.y_vals.iter().copied())
    }
}
