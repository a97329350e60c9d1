//! Numeric trait for point coordinates
//!
//! Coordinates may be stored as `f32` or `f64`, but every reduction in this
//! workspace accumulates in `f64`.

use num_traits::Float;
use std::fmt::Debug;

/// Base trait for coordinate types accepted by the distance primitives
pub trait Numeric: nalgebra::Scalar + Float + Into<f64> + Copy + Debug + Send + Sync {
    /// Widen to the accumulation type
    #[inline]
    fn widen(self) -> f64 {
        self.into()
    }
}

impl Numeric for f64 {}

impl Numeric for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening() {
        assert_eq!(Numeric::widen(1.5f32), 1.5);
        assert_eq!(Numeric::widen(-2.25f64), -2.25);
    }
}
