//! Distance-to-kernel transform
//!
//! Divides every distance by the bandwidth and applies the kernel formula.
//! The transform is elementwise, so the output has exactly the shape of the
//! input, whether that is a full matrix or a compact triangle.

use crate::kernel::{Kernel, KernelSpec};
use kernel_core::{ElementwiseArray, Error, Metric, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Check that a bandwidth is strictly positive and finite
pub fn validate_bandwidth(bandwidth: f64) -> Result<f64> {
    if bandwidth > 0.0 && bandwidth.is_finite() {
        Ok(bandwidth)
    } else {
        Err(Error::InvalidBandwidth(bandwidth))
    }
}

/// Kernel family, distance metric and bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    pub kernel: Kernel,
    pub metric: Metric,
    pub bandwidth: f64,
}

impl KernelConfig {
    /// Create a validated configuration
    pub fn new(kernel: Kernel, metric: Metric, bandwidth: f64) -> Result<Self> {
        let config = Self {
            kernel,
            metric,
            bandwidth,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration for `kernel` under the metric it requires
    pub fn for_kernel(kernel: Kernel, bandwidth: f64) -> Result<Self> {
        Self::new(kernel, kernel.required_metric(), bandwidth)
    }

    /// Check the (kernel, metric) pair, then the bandwidth
    pub fn validate(&self) -> Result<KernelSpec> {
        let spec = KernelSpec::lookup(self.kernel, self.metric)?;
        validate_bandwidth(self.bandwidth)?;
        Ok(spec)
    }
}

/// Validated kernel ready to map distances
#[derive(Debug, Clone, Copy)]
pub struct KernelTransform {
    spec: KernelSpec,
    bandwidth: f64,
}

impl KernelTransform {
    /// Create a transform; fails on an invalid pair or bandwidth
    pub fn new(config: KernelConfig) -> Result<Self> {
        let spec = config.validate()?;
        Ok(Self {
            spec,
            bandwidth: config.bandwidth,
        })
    }

    /// Kernel family in use
    pub fn kernel(&self) -> Kernel {
        self.spec.kernel
    }

    /// Metric the input distances are expected to use
    pub fn metric(&self) -> Metric {
        self.spec.metric
    }

    /// Bandwidth in use
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Kernel value for a single distance
    #[inline]
    pub fn evaluate(&self, distance: f64) -> f64 {
        self.spec.evaluate(distance / self.bandwidth)
    }

    /// Map every distance of `distances` to its kernel value
    ///
    /// Values lie in `[0, 1]` and are exactly 1 at distance 0. Gaussian and
    /// laplace underflow to exactly 0.0 in f64 once the normalized distance
    /// passes roughly 27 (gaussian) or 745 (laplace), so the open bound
    /// `(0, 1]` only holds below those points.
    #[instrument(skip_all, fields(kernel = %self.spec.kernel, bandwidth = self.bandwidth))]
    pub fn apply<A: ElementwiseArray>(&self, distances: &A) -> A {
        debug!("Kernel transform over {} values", distances.element_count());
        distances.map_elements(|d| self.evaluate(d))
    }
}

/// Kernel values for a distance array
///
/// `l` and `kernel` are the plain names (`"l1"`/`"l2"` and
/// `"gaussian"`/`"laplace"`/`"imq"`). All validation happens before any
/// value is computed. An unknown metric is `InvalidMetric`; any kernel name
/// that does not form one of the admissible pairs with `l`, including an
/// unknown one, is `InvalidKernelMetricPair`.
pub fn kernel_matrix<A: ElementwiseArray>(
    pairwise_distances: &A,
    l: &str,
    kernel: &str,
    bandwidth: f64,
) -> Result<A> {
    let metric: Metric = l.parse()?;
    let kernel: Kernel = kernel
        .parse()
        .map_err(|_| Error::invalid_pair(kernel, metric))?;
    let transform = KernelTransform::new(KernelConfig {
        kernel,
        metric,
        bandwidth,
    })?;
    Ok(transform.apply(pairwise_distances))
}
