//! Pairwise distance strategies
//!
//! Two interchangeable ways to evaluate every pair of a point set:
//!
//! - [`VectorizedStrategy`] submits all `N²` pairs to an execution engine as
//!   one batch. With a parallel engine the pairs are spread over the Rayon
//!   pool; peak memory is the full result plus the engine's scratch.
//! - [`LowMemoryStrategy`] walks the points one row at a time, computing a
//!   row's distances to every point into a reused buffer before storing it.
//!   Temporary memory stays `O(N)` and the compact layout never materializes
//!   the full matrix.
//!
//! Both call [`Metric::distance`] with the same primitives for every pair,
//! so their results are identical value for value.

use crate::output::{compact_len, CompactDistances};
use crate::points::PointSet;
use kernel_core::{
    auto_engine, AutoEngine, ComputePrimitives, ExecutionEngine, Metric, Numeric, ScalarBackend,
};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which strategy a configuration selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// All pairs at once through an execution engine
    #[default]
    Vectorized,
    /// One row at a time, bounded temporary memory
    LowMemory,
}

impl StrategyKind {
    /// Strategy selected by the `low_memory` / `min_mem` flag
    pub fn from_low_memory_flag(low_memory: bool) -> Self {
        if low_memory {
            StrategyKind::LowMemory
        } else {
            StrategyKind::Vectorized
        }
    }
}

/// Evaluates distances between every ordered pair of a point set
pub trait PairwiseDistanceStrategy<T: Numeric = f64> {
    /// Name of this strategy for debugging/logging
    fn name(&self) -> &'static str;

    /// Full symmetric `(N, N)` distance matrix
    fn pairwise_matrix(&self, points: &PointSet<T>, metric: Metric) -> DMatrix<f64>;

    /// Upper triangle of the distance matrix, diagonal included
    fn pairwise_compact(&self, points: &PointSet<T>, metric: Metric) -> CompactDistances {
        CompactDistances::from_square(&self.pairwise_matrix(points, metric))
    }
}

/// All pairs evaluated as a single batch
#[derive(Debug, Clone)]
pub struct VectorizedStrategy<E> {
    engine: E,
}

impl<E> VectorizedStrategy<E> {
    /// Create a strategy running on the given execution engine
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// The execution engine used for the batch
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<T: Numeric> Default for VectorizedStrategy<AutoEngine<T>> {
    fn default() -> Self {
        Self::new(auto_engine())
    }
}

impl<T, E> PairwiseDistanceStrategy<T> for VectorizedStrategy<E>
where
    T: Numeric,
    E: ExecutionEngine<T>,
{
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn pairwise_matrix(&self, points: &PointSet<T>, metric: Metric) -> DMatrix<f64> {
        let n = points.len();
        let primitives = self.engine.primitives();
        debug!(
            "Vectorized pairwise {}: {} pairs on {} thread(s), backend {}",
            metric,
            n * n,
            self.engine.num_threads(),
            primitives.backend_name()
        );

        // Flat index k addresses (k % n, k / n), matching nalgebra's column-major storage
        let values = self.engine.execute_batch(n * n, |k| {
            metric.distance(primitives, points.point(k % n), points.point(k / n))
        });
        DMatrix::from_vec(n, n, values)
    }
}

/// Row-by-row evaluation with a reused row buffer
#[derive(Debug, Clone, Default)]
pub struct LowMemoryStrategy<P = ScalarBackend> {
    primitives: P,
}

impl<P> LowMemoryStrategy<P> {
    /// Create a strategy using the given primitives
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }
}

impl<P> LowMemoryStrategy<P> {
    /// Distances from point `i` to every point, written into `row`
    fn fill_row<T>(&self, points: &PointSet<T>, metric: Metric, i: usize, row: &mut Vec<f64>)
    where
        T: Numeric,
        P: ComputePrimitives<T>,
    {
        let p = points.point(i);
        row.clear();
        row.extend(points.iter().map(|q| metric.distance(&self.primitives, p, q)));
        trace!("Low-memory pairwise: row {} of {}", i + 1, points.len());
    }
}

impl<T, P> PairwiseDistanceStrategy<T> for LowMemoryStrategy<P>
where
    T: Numeric,
    P: ComputePrimitives<T>,
{
    fn name(&self) -> &'static str {
        "low_memory"
    }

    fn pairwise_matrix(&self, points: &PointSet<T>, metric: Metric) -> DMatrix<f64> {
        let n = points.len();
        debug!("Low-memory pairwise {}: {} rows", metric, n);

        let mut matrix = DMatrix::zeros(n, n);
        let mut row = Vec::with_capacity(n);
        for i in 0..n {
            self.fill_row(points, metric, i, &mut row);
            for (j, &d) in row.iter().enumerate() {
                matrix[(i, j)] = d;
            }
        }
        matrix
    }

    fn pairwise_compact(&self, points: &PointSet<T>, metric: Metric) -> CompactDistances {
        let n = points.len();
        debug!("Low-memory pairwise {} (compact): {} rows", metric, n);

        let mut values = Vec::with_capacity(compact_len(n));
        let mut row = Vec::with_capacity(n);
        for i in 0..n {
            self.fill_row(points, metric, i, &mut row);
            values.extend_from_slice(&row[i..]);
        }
        CompactDistances::from_parts(values, n)
    }
}
