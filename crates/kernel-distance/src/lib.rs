//! Pairwise distance matrices for kernel two-sample statistics
//!
//! Given samples `X` (m points) and `Y` (n points) of the same dimension,
//! this crate computes the l1 or l2 distance between every pair of points of
//! the combined set `X ++ Y`, returned either as the full symmetric
//! `(m+n, m+n)` matrix or as its compact upper triangle.
//!
//! # Strategies
//!
//! - [`VectorizedStrategy`]: all pairs as one batch on an execution engine
//!   (parallel with the `parallel` feature)
//! - [`LowMemoryStrategy`]: one row at a time with `O(m+n)` temporaries
//!
//! Both produce the same values; pick by memory budget.
//!
//! # Example
//!
//! ```rust
//! use kernel_distance::{distances, PointSet};
//!
//! let x = PointSet::from_rows(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
//! let y = PointSet::from_rows(&[[2.0, 2.0]]).unwrap();
//!
//! let fast = distances(&x, &y, "l1", true, false).unwrap();
//! let slow = distances(&x, &y, "l1", true, true).unwrap();
//! assert_eq!(fast, slow);
//! assert_eq!(fast.as_matrix().unwrap()[(0, 2)], 4.0);
//! ```

pub mod engine;
pub mod output;
pub mod points;
pub mod strategy;

pub use engine::{distances, DistanceConfig, DistanceEngine};
pub use output::{compact_len, CompactDistances, DistanceOutput, OutputLayout};
pub use points::PointSet;
pub use strategy::{LowMemoryStrategy, PairwiseDistanceStrategy, StrategyKind, VectorizedStrategy};
