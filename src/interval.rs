//! Interval arithmetic for ray parameter ranges.
//!
//! Provides intervals (min, max) used for ray t-values during nearest-hit
//! selection: the minimum stays at zero and the maximum shrinks to the best
//! hit found so far.

/// Interval (min, max) for range checking.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}
