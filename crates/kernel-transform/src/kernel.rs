//! Kernel families and their admissible metrics
//!
//! Each kernel is only positive definite under one metric, so the valid
//! combinations live in a fixed table and every other pairing is rejected.
//!
//! | kernel   | metric | k(d), d = distance / bandwidth |
//! |----------|--------|--------------------------------|
//! | gaussian | l2     | exp(-d²)                       |
//! | laplace  | l1     | exp(-d)                        |
//! | imq      | l2     | (1 + d²)^(-1/2)                |

use kernel_core::{Error, Metric, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kernel family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    /// exp(-d²)
    Gaussian,
    /// exp(-d)
    Laplace,
    /// Inverse multiquadric, (1 + d²)^(-1/2)
    Imq,
}

impl Kernel {
    /// All supported kernels
    pub const ALL: [Kernel; 3] = [Kernel::Gaussian, Kernel::Laplace, Kernel::Imq];

    /// Canonical name, as accepted by [`Kernel::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Kernel::Gaussian => "gaussian",
            Kernel::Laplace => "laplace",
            Kernel::Imq => "imq",
        }
    }

    /// The metric this kernel requires
    pub fn required_metric(&self) -> Metric {
        match self {
            Kernel::Gaussian | Kernel::Imq => Metric::L2,
            Kernel::Laplace => Metric::L1,
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the canonical lowercase names. `kernel_matrix` reports a failed
/// parse as an invalid (kernel, metric) pair.
impl FromStr for Kernel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gaussian" => Ok(Kernel::Gaussian),
            "laplace" => Ok(Kernel::Laplace),
            "imq" => Ok(Kernel::Imq),
            other => Err(Error::InvalidKernel(other.to_string())),
        }
    }
}

fn gaussian(d: f64) -> f64 {
    (-d * d).exp()
}

fn laplace(d: f64) -> f64 {
    (-d).exp()
}

fn imq(d: f64) -> f64 {
    1.0 / (1.0 + d * d).sqrt()
}

/// A valid (kernel, metric) pair with its formula on normalized distance
#[derive(Debug, Clone, Copy)]
pub struct KernelSpec {
    pub kernel: Kernel,
    pub metric: Metric,
    formula: fn(f64) -> f64,
}

/// The only admissible (kernel, metric) pairs
pub const KERNEL_TABLE: [KernelSpec; 3] = [
    KernelSpec {
        kernel: Kernel::Gaussian,
        metric: Metric::L2,
        formula: gaussian,
    },
    KernelSpec {
        kernel: Kernel::Laplace,
        metric: Metric::L1,
        formula: laplace,
    },
    KernelSpec {
        kernel: Kernel::Imq,
        metric: Metric::L2,
        formula: imq,
    },
];

impl KernelSpec {
    /// Find the table entry for `(kernel, metric)`
    pub fn lookup(kernel: Kernel, metric: Metric) -> Result<Self> {
        KERNEL_TABLE
            .iter()
            .find(|spec| spec.kernel == kernel && spec.metric == metric)
            .copied()
            .ok_or_else(|| Error::invalid_pair(kernel, metric))
    }

    /// Kernel value at normalized distance `d`
    #[inline]
    pub fn evaluate(&self, d: f64) -> f64 {
        (self.formula)(d)
    }
}
