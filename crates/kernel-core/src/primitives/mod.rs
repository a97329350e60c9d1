//! Computational primitives with compile-time dispatch
//!
//! - Single `ComputePrimitives<T>` trait for the distance reductions
//! - Concrete backend type: `ScalarBackend`
//! - Zero-cost abstractions, no heap allocation or dynamic dispatch

pub mod traits;

pub use traits::ComputePrimitives;

use crate::Numeric;

/// Scalar backend - works for all numeric types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> ComputePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }
}

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}
