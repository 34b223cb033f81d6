//! Benchmark profiles for the swellray tracer.
//!
//! Provides pre-built fields and step contexts shared by the criterion
//! benches:
//!
//! - [`deep_basin`]: 1000 m flat bottom, rays run straight
//! - [`shelf`]: planar beach with the shoreline inside the domain
//! - [`ridge_field`]: deterministic rough bottom on a 100x100 grid
//! - [`reference_context`]: the step size and horizon every profile uses

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swellray_core::StepContext;
use swellray_field::{ConstantDepth, ConstantSlope, GridBathymetry};

/// 1000 m of water everywhere; the integrator's straight-line case.
pub fn deep_basin() -> ConstantDepth {
    ConstantDepth::new(1000.0)
}

/// A planar beach falling from 30 m at y = 0 to the shoreline at
/// y = 300. Shore-normal rays reflect about half-way through the
/// reference horizon.
pub fn shelf() -> ConstantSlope {
    ConstantSlope::new(30.0, 0.0, -0.1)
}

/// A deterministic rough bottom on a 100x100 grid with 10 m spacing:
/// 40 m base depth, node-level ridges of up to 5 m.
///
/// The perturbation is a fixed integer hash of the node index, so the
/// field is identical across runs without pulling an RNG into the
/// benches.
pub fn ridge_field() -> GridBathymetry {
    let nx = 100;
    let ny = 100;
    let xs: Vec<f64> = (0..nx).map(|i| i as f64 * 10.0).collect();
    let ys: Vec<f64> = (0..ny).map(|j| j as f64 * 10.0).collect();
    let depth: Vec<f64> = (0..nx * ny)
        .map(|i| {
            let h = (i as u64).wrapping_mul(6364136223846793005) >> 40;
            40.0 + (h % 1000) as f64 / 100.0 - 5.0
        })
        .collect();
    match GridBathymetry::from_parts(&xs, &ys, depth) {
        Ok(field) => field,
        Err(e) => unreachable!("benchmark grid is well-formed: {e}"),
    }
}

/// 60 s horizon at 0.1 s steps: 600 RK4 steps per trace.
pub fn reference_context() -> StepContext {
    match StepContext::new(0.1, 60.0) {
        Ok(ctx) => ctx,
        Err(e) => unreachable!("reference context is valid: {e}"),
    }
}
