//! Build distance and kernel matrices for two small samples
//!
//! Run with `RUST_LOG=debug` to see the strategy and sizes chosen.

use anyhow::Result;
use kernel_distance::{DistanceConfig, DistanceEngine, OutputLayout, PointSet, StrategyKind};
use kernel_transform::{Kernel, KernelConfig, KernelTransform};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let x = PointSet::from_rows(&[[0.0, 0.0], [0.5, 0.1], [0.2, 0.4]])?;
    let y = PointSet::from_rows(&[[2.0, 2.0], [2.5, 1.5]])?;

    for kernel in Kernel::ALL {
        let metric = kernel.required_metric();
        let config = DistanceConfig::new(metric)
            .with_layout(OutputLayout::Matrix)
            .with_strategy(StrategyKind::LowMemory);
        let distances = DistanceEngine::new(config).compute(&x, &y)?;

        let transform = KernelTransform::new(KernelConfig::for_kernel(kernel, 1.0)?)?;
        let k = transform.apply(&distances).into_matrix();

        println!("{kernel} kernel ({metric} distances), bandwidth 1.0:");
        println!("{k:.4}");

        // within-X, within-Y and cross blocks of the kernel matrix
        let m = x.len();
        let n = y.len();
        let xx = k.slice((0, 0), (m, m)).mean();
        let yy = k.slice((m, m), (n, n)).mean();
        let xy = k.slice((0, m), (m, n)).mean();
        println!("mean k(X,X) = {xx:.4}, mean k(Y,Y) = {yy:.4}, mean k(X,Y) = {xy:.4}\n");
    }

    Ok(())
}
