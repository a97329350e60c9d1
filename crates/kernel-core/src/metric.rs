//! Distance metrics
//!
//! The metric set is closed: `l1` (Manhattan) and `l2` (Euclidean). String
//! names are parsed once at the API boundary; everything past that point works
//! with the enum.

use crate::{primitives::ComputePrimitives, Error, Numeric, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance metric between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Sum of absolute coordinate differences
    #[serde(rename = "l1")]
    L1,
    /// Square root of the sum of squared coordinate differences
    #[serde(rename = "l2")]
    L2,
}

impl Metric {
    /// All supported metrics
    pub const ALL: [Metric; 2] = [Metric::L1, Metric::L2];

    /// Canonical name, as accepted by [`Metric::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::L1 => "l1",
            Metric::L2 => "l2",
        }
    }

    /// Distance between two points of equal dimension
    #[inline]
    pub fn distance<T, P>(&self, primitives: &P, a: &[T], b: &[T]) -> f64
    where
        T: Numeric,
        P: ComputePrimitives<T>,
    {
        match self {
            Metric::L1 => primitives.abs_diff_sum(a, b),
            Metric::L2 => primitives.squared_diff_sum(a, b).sqrt(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "l1" => Ok(Metric::L1),
            "l2" => Ok(Metric::L2),
            other => Err(Error::InvalidMetric(other.to_string())),
        }
    }
}
