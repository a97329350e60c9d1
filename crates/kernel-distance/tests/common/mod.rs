//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use kernel_distance::PointSet;
use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const REL_TOLERANCE: f64 = 1e-6;

/// Uniform points in `[-scale, scale)^dimension` from a fixed seed
pub fn random_points(count: usize, dimension: usize, scale: f64, seed: u64) -> PointSet<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..count * dimension)
        .map(|_| rng.gen_range(-scale..scale))
        .collect();
    PointSet::from_row_major(count, dimension, data).unwrap()
}

/// Dimension and sizes exercising empty, single and uneven samples
pub fn sample_shapes() -> Vec<(usize, usize, usize)> {
    vec![
        (0, 0, 3),  // Nothing at all
        (1, 0, 2),  // Y empty
        (0, 1, 2),  // X empty
        (1, 1, 1),  // One point each
        (3, 5, 2),  // Uneven
        (10, 10, 16),
        (7, 2, 128), // High dimension
    ]
}

/// Assert two matrices agree within the relative tolerance
pub fn assert_matrices_close(actual: &DMatrix<f64>, expected: &DMatrix<f64>, context: &str) {
    assert_eq!(actual.shape(), expected.shape(), "shape mismatch for {context}");
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(*a, *e, max_relative = REL_TOLERANCE, epsilon = 1e-12);
    }
}

/// Textbook distance between two points
pub fn naive_distance(p: &[f64], q: &[f64], metric: &str) -> f64 {
    match metric {
        "l1" => p.iter().zip(q).map(|(a, b)| (a - b).abs()).sum(),
        "l2" => p.iter().zip(q).map(|(a, b)| (a - b) * (a - b)).sum::<f64>().sqrt(),
        other => panic!("unknown metric {other}"),
    }
}
