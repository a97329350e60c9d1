//! Distance engine
//!
//! Combines the two input samples into one point set `Z = X ++ Y` and
//! evaluates every pair of `Z`, so the result carries the within-X,
//! within-Y and cross distances that two-sample statistics need together.
//! Point `i` of the output is `X[i]` for `i < m` and `Y[i - m]` otherwise.

use crate::output::{DistanceOutput, OutputLayout};
use crate::points::PointSet;
use crate::strategy::{LowMemoryStrategy, PairwiseDistanceStrategy, StrategyKind, VectorizedStrategy};
use kernel_core::{auto_engine, Metric, Numeric, Result, ScalarBackend};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Configuration of a pairwise distance computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Distance metric
    pub metric: Metric,
    /// Matrix or compact output
    pub layout: OutputLayout,
    /// Vectorized or low-memory evaluation
    pub strategy: StrategyKind,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            metric: Metric::L2,
            layout: OutputLayout::Compact,
            strategy: StrategyKind::Vectorized,
        }
    }
}

impl DistanceConfig {
    /// Create a configuration for `metric` with default layout and strategy
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    /// Build from the plain call-surface parameters
    ///
    /// `l` must be `"l1"` or `"l2"`; anything else fails with `InvalidMetric`.
    pub fn from_flags(l: &str, matrix: bool, low_memory: bool) -> Result<Self> {
        Ok(Self {
            metric: l.parse()?,
            layout: OutputLayout::from_matrix_flag(matrix),
            strategy: StrategyKind::from_low_memory_flag(low_memory),
        })
    }

    /// Set the output layout
    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the evaluation strategy
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Computes pairwise distances over the union of two point sets
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceEngine {
    config: DistanceConfig,
}

impl DistanceEngine {
    /// Create an engine for the given configuration
    pub fn new(config: DistanceConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &DistanceConfig {
        &self.config
    }

    /// Pairwise distances over `X ++ Y` with the configured strategy
    ///
    /// The vectorized strategy runs on [`auto_engine`], which is parallel when
    /// the `parallel` feature is enabled.
    pub fn compute<T: Numeric>(&self, x: &PointSet<T>, y: &PointSet<T>) -> Result<DistanceOutput> {
        match self.config.strategy {
            StrategyKind::Vectorized => {
                self.compute_with(&VectorizedStrategy::new(auto_engine::<T>()), x, y)
            }
            StrategyKind::LowMemory => {
                self.compute_with(&LowMemoryStrategy::<ScalarBackend>::default(), x, y)
            }
        }
    }

    /// Pairwise distances over `X ++ Y` with an explicit strategy
    ///
    /// The configured `strategy` field is ignored; metric and layout apply.
    #[instrument(
        skip_all,
        fields(m = x.len(), n = y.len(), metric = %self.config.metric, strategy = strategy.name())
    )]
    pub fn compute_with<T, S>(
        &self,
        strategy: &S,
        x: &PointSet<T>,
        y: &PointSet<T>,
    ) -> Result<DistanceOutput>
    where
        T: Numeric,
        S: PairwiseDistanceStrategy<T>,
    {
        let combined = x.concat(y)?;
        debug!(
            "Pairwise distances over {} points of dimension {}",
            combined.len(),
            combined.dimension()
        );

        let metric = self.config.metric;
        Ok(match self.config.layout {
            OutputLayout::Matrix => DistanceOutput::Matrix(strategy.pairwise_matrix(&combined, metric)),
            OutputLayout::Compact => {
                DistanceOutput::Compact(strategy.pairwise_compact(&combined, metric))
            }
        })
    }
}

/// Pairwise distances over `X ++ Y`
///
/// `matrix` selects the full `(m+n, m+n)` matrix over the compact upper
/// triangle; `low_memory` selects row-by-row evaluation over the vectorized
/// batch. The metric name is validated before any work.
pub fn distances<T: Numeric>(
    x: &PointSet<T>,
    y: &PointSet<T>,
    l: &str,
    matrix: bool,
    low_memory: bool,
) -> Result<DistanceOutput> {
    let config = DistanceConfig::from_flags(l, matrix, low_memory)?;
    DistanceEngine::new(config).compute(x, y)
}
