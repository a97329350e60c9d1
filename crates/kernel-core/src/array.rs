//! Shape-preserving elementwise maps
//!
//! Kernel transforms work on any distance container without caring whether
//! it holds a dense matrix or a compact vector. Implementors return a new
//! value of the same shape; the input is never modified.

use nalgebra::DMatrix;

/// Array of `f64` values that can be mapped elementwise into a same-shaped copy
pub trait ElementwiseArray: Sized {
    /// Number of stored elements
    fn element_count(&self) -> usize;

    /// Apply `f` to every element, keeping the shape
    fn map_elements<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64;
}

impl ElementwiseArray for DMatrix<f64> {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        self.map(f)
    }
}

impl ElementwiseArray for Vec<f64> {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|&x| f(x)).collect()
    }
}
