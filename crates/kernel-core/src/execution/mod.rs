//! Execution engines for controlling computation strategy
//!
//! This module provides the execution engine abstraction that pairs the
//! primitive backend with an execution strategy (sequential vs parallel).
//!
//! # Design Philosophy
//!
//! - **Unified Control**: Single type parameter controls both backend and parallelism
//! - **Zero-Cost**: All decisions made at compile time
//! - **Thread Pool Integration**: Works with Rayon's global pool or a custom one

use crate::numeric::Numeric;
use crate::primitives::ComputePrimitives;
#[cfg(feature = "parallel")]
use crate::Result;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Trait for execution engines that control how computations are performed
///
/// An execution engine combines:
/// - Primitive operations (the backend computing per-pair reductions)
/// - Execution strategy (sequential vs parallel)
pub trait ExecutionEngine<T: Numeric>: Clone + Send + Sync {
    /// The type of primitives used by this engine
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives for low-level operations
    fn primitives(&self) -> &Self::Primitives;

    /// Evaluate `f` for every index in `0..count`, results in index order
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        self.strategy() == ExecutionStrategy::Parallel
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Debug)]
pub struct SequentialEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> SequentialEngine<T, P> {
    /// Create a new sequential engine with the given primitives
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for SequentialEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's thread pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
    _phantom: std::marker::PhantomData<T>,
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ParallelEngine<T, P> {
    /// Create a new parallel engine with default thread pool
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            thread_pool: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(primitives: P, pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            primitives,
            thread_pool: Some(pool),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(primitives: P, num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self::with_thread_pool(primitives, std::sync::Arc::new(pool)))
    }
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for ParallelEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Create a sequential scalar engine
pub fn scalar_sequential<T: Numeric>() -> SequentialEngine<T, crate::primitives::ScalarBackend> {
    SequentialEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel scalar engine
#[cfg(feature = "parallel")]
pub fn scalar_parallel<T: Numeric>() -> ParallelEngine<T, crate::primitives::ScalarBackend> {
    ParallelEngine::new(crate::primitives::ScalarBackend)
}

/// Engine chosen by [`auto_engine`]
#[cfg(feature = "parallel")]
pub type AutoEngine<T> = ParallelEngine<T, crate::primitives::ScalarBackend>;

/// Engine chosen by [`auto_engine`]
#[cfg(not(feature = "parallel"))]
pub type AutoEngine<T> = SequentialEngine<T, crate::primitives::ScalarBackend>;

/// Create an auto-selected engine based on available features
pub fn auto_engine<T: Numeric>() -> AutoEngine<T> {
    #[cfg(feature = "parallel")]
    {
        scalar_parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        scalar_sequential()
    }
}
