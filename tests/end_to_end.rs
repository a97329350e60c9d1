//! End-to-end tests: samples to distances to kernel matrices

use anyhow::Result;
use approx::assert_relative_eq;
use kernel_stats::prelude::*;
use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_sample(count: usize, dimension: usize, shift: f64, seed: u64) -> Result<PointSet<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..count * dimension)
        .map(|_| shift + rng.gen_range(-1.0..1.0))
        .collect();
    Ok(PointSet::from_row_major(count, dimension, data)?)
}

/// Biased MMD² from the blocks of a kernel matrix over X ++ Y
fn mmd_squared(k: &DMatrix<f64>, m: usize) -> f64 {
    let n = k.nrows() - m;
    let xx = k.slice((0, 0), (m, m)).mean();
    let yy = k.slice((m, m), (n, n)).mean();
    let xy = k.slice((0, m), (m, n)).mean();
    xx + yy - 2.0 * xy
}

#[test]
fn test_two_point_gaussian_scenario() -> Result<()> {
    let x = PointSet::from_rows(&[[0.0]])?;
    let y = PointSet::from_rows(&[[1.0]])?;

    let matrix = distances(&x, &y, "l2", true, false)?;
    assert_eq!(
        matrix.as_matrix().unwrap(),
        &DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0])
    );

    let compact = distances(&x, &y, "l2", false, false)?;
    assert_eq!(compact.as_compact().unwrap().as_slice(), &[0.0, 1.0, 0.0]);

    let k = kernel_matrix(&matrix, "l2", "gaussian", 1.0)?.into_matrix();
    let e = (-1.0f64).exp();
    assert_eq!(k[(0, 0)], 1.0);
    assert_eq!(k[(1, 1)], 1.0);
    assert_relative_eq!(k[(0, 1)], e);
    assert_relative_eq!(k[(1, 0)], e);
    Ok(())
}

#[test]
fn test_every_configuration_gives_the_same_kernel() -> Result<()> {
    let x = random_sample(8, 3, 0.0, 1)?;
    let y = random_sample(6, 3, 0.5, 2)?;

    for kernel in Kernel::ALL {
        let l = kernel.required_metric().as_str();
        let reference = kernel_matrix(&distances(&x, &y, l, true, false)?, l, kernel.as_str(), 0.8)?
            .into_matrix();

        for (matrix, low_memory) in [(true, true), (false, false), (false, true)] {
            let k = kernel_matrix(
                &distances(&x, &y, l, matrix, low_memory)?,
                l,
                kernel.as_str(),
                0.8,
            )?
            .into_matrix();
            for (a, b) in k.iter().zip(reference.iter()) {
                assert_relative_eq!(*a, *b, max_relative = 1e-6);
            }
        }
    }
    Ok(())
}

#[test]
fn test_kernel_matrix_separates_shifted_samples() -> Result<()> {
    let x = random_sample(30, 2, 0.0, 10)?;
    let same = random_sample(30, 2, 0.0, 11)?;
    let shifted = random_sample(30, 2, 3.0, 12)?;

    let engine = DistanceEngine::new(DistanceConfig::new(Metric::L2).with_layout(OutputLayout::Matrix));
    let transform = KernelTransform::new(KernelConfig::for_kernel(Kernel::Gaussian, 1.0)?)?;

    let k_same = transform.apply(&engine.compute(&x, &same)?).into_matrix();
    let k_shifted = transform.apply(&engine.compute(&x, &shifted)?).into_matrix();

    assert!(mmd_squared(&k_shifted, 30) > mmd_squared(&k_same, 30));
    Ok(())
}

#[test]
fn test_errors_propagate_unchanged() {
    let x = PointSet::from_rows(&[[0.0, 1.0]]).unwrap();
    let y = PointSet::from_rows(&[[1.0]]).unwrap();

    assert!(matches!(
        distances(&x, &y, "l2", true, false),
        Err(Error::ShapeMismatch { .. })
    ));
    assert_eq!(
        distances(&x, &x, "l3", true, false),
        Err(Error::InvalidMetric("l3".to_string()))
    );

    let d = distances(&x, &x, "l1", false, false).unwrap();
    assert!(matches!(
        kernel_matrix(&d, "l1", "gaussian", 1.0),
        Err(Error::InvalidKernelMetricPair { .. })
    ));
    assert_eq!(
        kernel_matrix(&d, "l1", "laplace", -2.0),
        Err(Error::InvalidBandwidth(-2.0))
    );
}
