//! Unified distance primitives trait
//!
//! Backends share the default reductions below. A backend that overrides one
//! must keep the left-to-right f64 accumulation order, otherwise the two
//! pairwise strategies stop agreeing bit for bit.

use crate::numeric::Numeric;

/// Low-level reductions over coordinate slices
pub trait ComputePrimitives<T: Numeric = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Compute Σ|a[i] - b[i]|
    fn abs_diff_sum(&self, a: &[T], b: &[T]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "Points must have the same dimension");

        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (x.widen() - y.widen()).abs())
            .fold(0.0, |acc, x| acc + x)
    }

    /// Compute Σ(a[i] - b[i])²
    fn squared_diff_sum(&self, a: &[T], b: &[T]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "Points must have the same dimension");

        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| {
                let diff = x.widen() - y.widen();
                diff * diff
            })
            .fold(0.0, |acc, x| acc + x)
    }
}
