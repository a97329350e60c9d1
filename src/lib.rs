//! Kernel statistics toolkit
//!
//! Distance and kernel matrices for kernel-based two-sample statistics such
//! as MMD estimators. This crate re-exports the workspace crates:
//!
//! - [`kernel_core`]: errors, metrics, primitives and execution engines
//! - [`kernel_distance`]: pairwise distances over the union of two samples
//! - [`kernel_transform`]: gaussian, laplace and imq kernels over distances
//!
//! # Example
//!
//! ```rust
//! use kernel_stats::{distances, kernel_matrix, PointSet};
//!
//! let x = PointSet::from_rows(&[[0.0]]).unwrap();
//! let y = PointSet::from_rows(&[[1.0]]).unwrap();
//!
//! let d = distances(&x, &y, "l2", true, false).unwrap();
//! let k = kernel_matrix(&d, "l2", "gaussian", 1.0).unwrap();
//!
//! let k = k.into_matrix();
//! assert_eq!(k[(0, 0)], 1.0);
//! assert!((k[(0, 1)] - (-1.0f64).exp()).abs() < 1e-12);
//! ```

pub use kernel_core;
pub use kernel_distance;
pub use kernel_transform;

pub use kernel_core::{ElementwiseArray, Error, Metric, Result};
pub use kernel_distance::{
    distances, CompactDistances, DistanceConfig, DistanceEngine, DistanceOutput, OutputLayout,
    PointSet, StrategyKind,
};
pub use kernel_transform::{kernel_matrix, Kernel, KernelConfig, KernelTransform};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        distances, kernel_matrix, CompactDistances, DistanceConfig, DistanceEngine,
        DistanceOutput, ElementwiseArray, Error, Kernel, KernelConfig, KernelTransform, Metric,
        OutputLayout, PointSet, Result, StrategyKind,
    };
    pub use kernel_distance::{LowMemoryStrategy, PairwiseDistanceStrategy, VectorizedStrategy};
}
