//! Error types for kernel statistics
//!
//! Provides a unified error type for all kernel-stats crates.

use thiserror::Error;

/// Core error type for distance and kernel operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Distance metric name outside the supported set
    #[error("Invalid metric '{0}': expected \"l1\" or \"l2\"")]
    InvalidMetric(String),

    /// Kernel name outside the supported set, from parsing a `Kernel` alone
    #[error("Invalid kernel '{0}': expected \"gaussian\", \"laplace\" or \"imq\"")]
    InvalidKernel(String),

    /// Kernel and metric that do not form a valid kernel together
    #[error(
        "Invalid (kernel, metric) pair ({kernel}, {metric}): expected \
         (gaussian, l2), (laplace, l1) or (imq, l2)"
    )]
    InvalidKernelMetricPair { kernel: String, metric: String },

    /// Bandwidth that is not a strictly positive finite number
    #[error("Invalid bandwidth {0}: must be strictly positive and finite")]
    InvalidBandwidth(f64),

    /// Array shapes that cannot be combined
    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::ShapeMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for an invalid (kernel, metric) combination
    pub fn invalid_pair(kernel: impl ToString, metric: impl ToString) -> Self {
        Self::InvalidKernelMetricPair {
            kernel: kernel.to_string(),
            metric: metric.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMetric("l3".to_string());
        assert_eq!(err.to_string(), "Invalid metric 'l3': expected \"l1\" or \"l2\"");

        let err = Error::InvalidKernel("rbf".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid kernel 'rbf': expected \"gaussian\", \"laplace\" or \"imq\""
        );

        let err = Error::invalid_pair("gaussian", "l1");
        assert_eq!(
            err.to_string(),
            "Invalid (kernel, metric) pair (gaussian, l1): expected \
             (gaussian, l2), (laplace, l1) or (imq, l2)"
        );

        let err = Error::InvalidBandwidth(-1.5);
        assert_eq!(
            err.to_string(),
            "Invalid bandwidth -1.5: must be strictly positive and finite"
        );

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");
    }

    #[test]
    fn test_size_mismatch_helper() {
        let err = Error::size_mismatch(3, 2, "point dimension");
        assert_eq!(
            err.to_string(),
            "Shape mismatch in point dimension: expected 3, got 2"
        );
        match err {
            Error::ShapeMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_invalid_pair_names_both_values() {
        match Error::invalid_pair("laplace", "l2") {
            Error::InvalidKernelMetricPair { kernel, metric } => {
                assert_eq!(kernel, "laplace");
                assert_eq!(metric, "l2");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn check(bandwidth: f64) -> Result<f64> {
            if bandwidth > 0.0 {
                Ok(bandwidth)
            } else {
                Err(Error::InvalidBandwidth(bandwidth))
            }
        }

        assert_eq!(check(2.0).unwrap(), 2.0);
        assert_eq!(check(0.0), Err(Error::InvalidBandwidth(0.0)));
    }
}
