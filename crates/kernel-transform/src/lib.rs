//! Kernel matrices from pairwise distances
//!
//! Maps a distance array elementwise to kernel similarities, with a
//! bandwidth controlling how fast similarity decays with distance. Three
//! kernel families are supported, each tied to the metric under which it is
//! a valid positive-definite kernel:
//!
//! - **gaussian** on l2 distances: `exp(-(d/h)²)`
//! - **laplace** on l1 distances: `exp(-d/h)`
//! - **imq** on l2 distances: `(1 + (d/h)²)^(-1/2)`
//!
//! Any other (kernel, metric) combination is an error rather than a silent
//! fallback.
//!
//! # Example
//!
//! ```rust
//! use kernel_transform::kernel_matrix;
//!
//! // compact upper triangle of the distances between 0.0 and 1.0
//! let distances = vec![0.0, 1.0, 0.0];
//! let k = kernel_matrix(&distances, "l2", "gaussian", 1.0).unwrap();
//! assert_eq!(k[0], 1.0);
//! assert!((k[1] - (-1.0f64).exp()).abs() < 1e-12);
//!
//! assert!(kernel_matrix(&distances, "l1", "gaussian", 1.0).is_err());
//! ```

pub mod kernel;
pub mod transform;

pub use kernel::{Kernel, KernelSpec, KERNEL_TABLE};
pub use transform::{kernel_matrix, validate_bandwidth, KernelConfig, KernelTransform};
