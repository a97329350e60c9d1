//! Core traits and types for kernel statistics
//!
//! This crate provides the shared foundation of the workspace: the error
//! type, the closed set of distance metrics, the numeric trait for point
//! coordinates, the distance primitives and the execution engines that
//! decide whether pairwise work runs sequentially or in parallel.
//!
//! # Example
//!
//! ```rust
//! use kernel_core::{execution::scalar_sequential, ExecutionEngine, Metric};
//!
//! let engine = scalar_sequential::<f64>();
//! let d = Metric::L2.distance(engine.primitives(), &[0.0, 0.0], &[3.0, 4.0]);
//! assert_eq!(d, 5.0);
//! ```

pub mod array;
pub mod error;
pub mod execution;
pub mod metric;
pub mod numeric;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use array::ElementwiseArray;
#[cfg(feature = "parallel")]
pub use execution::{scalar_parallel, ParallelEngine};
pub use execution::{
    auto_engine, scalar_sequential, AutoEngine, ExecutionEngine, ExecutionStrategy,
    SequentialEngine,
};
pub use metric::Metric;
pub use numeric::Numeric;
pub use primitives::{scalar_backend, ComputePrimitives, ScalarBackend};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ComputePrimitives, ElementwiseArray, Error, ExecutionEngine, ExecutionStrategy, Metric,
        Numeric, Result, ScalarBackend, SequentialEngine,
    };

    #[cfg(feature = "parallel")]
    pub use crate::execution::scalar_parallel;
    pub use crate::execution::{auto_engine, scalar_sequential};
}
