//! Test fixtures for swellray development.
//!
//! Provides builders that write small bathymetry grids to temporary
//! NetCDF-3 files ([`TempGrid`]) and deterministic synthetic depth
//! fields (flat, beach, seeded random ridges) for exercising the
//! loader, interpolator, and tracer.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use netcdf3::{DataSet, FileWriter, Version};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

static NEXT_FILE_ID: AtomicU64 = AtomicU64::new(0);

/// A bathymetry grid written to a unique temporary NetCDF-3 file.
///
/// The file is deleted when the guard is dropped.
pub struct TempGrid {
    path: PathBuf,
}

impl TempGrid {
    /// Write `depth` (row-major, y outer) over the given axes to a
    /// fresh temp file.
    ///
    /// # Panics
    ///
    /// Panics on any write failure; fixtures are test-only code.
    pub fn write(xs: &[f64], ys: &[f64], depth: &[f64]) -> Self {
        assert_eq!(
            depth.len(),
            xs.len() * ys.len(),
            "depth length must be nx * ny"
        );
        let id = NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "swellray-test-{}-{id}.nc",
            std::process::id()
        ));
        write_grid_file(&path, xs, ys, depth);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempGrid {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Write a classic NetCDF-3 grid file with `x`, `y`, and `depth`
/// variables at the given path.
pub fn write_grid_file(path: &Path, xs: &[f64], ys: &[f64], depth: &[f64]) {
    let mut data_set = DataSet::new();
    data_set
        .add_fixed_dim("y", ys.len())
        .expect("add y dimension");
    data_set
        .add_fixed_dim("x", xs.len())
        .expect("add x dimension");
    data_set.add_var_f64("y", &["y"]).expect("add y variable");
    data_set.add_var_f64("x", &["x"]).expect("add x variable");
    data_set
        .add_var_f64("depth", &["y", "x"])
        .expect("add depth variable");

    let mut writer = FileWriter::open(path).expect("open grid file for writing");
    writer
        .set_def(&data_set, Version::Classic, 0)
        .expect("set grid definition");
    writer.write_var_f64("y", ys).expect("write y axis");
    writer.write_var_f64("x", xs).expect("write x axis");
    writer.write_var_f64("depth", depth).expect("write depth");
    writer.close().expect("close grid file");
}

/// Evenly spaced axis `0, spacing, ..., (n - 1) * spacing`.
pub fn axis(n: usize, spacing: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * spacing).collect()
}

/// A flat grid: every node at the same depth.
pub fn constant_grid(nx: usize, ny: usize, spacing: f64, depth: f64) -> TempGrid {
    let xs = axis(nx, spacing);
    let ys = axis(ny, spacing);
    TempGrid::write(&xs, &ys, &vec![depth; nx * ny])
}

/// A planar beach: depth falls linearly along +y from `deep` at y = 0
/// to `shallow` at the far edge. Pass a negative `shallow` to put a
/// dry shoreline inside the grid.
pub fn beach_grid(nx: usize, ny: usize, spacing: f64, deep: f64, shallow: f64) -> TempGrid {
    let xs = axis(nx, spacing);
    let ys = axis(ny, spacing);
    let mut depth = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        let frac = j as f64 / (ny - 1) as f64;
        let h = deep + (shallow - deep) * frac;
        for _ in 0..nx {
            depth.push(h);
        }
    }
    TempGrid::write(&xs, &ys, &depth)
}

/// A deterministic rough bottom: `base` depth plus seeded random
/// perturbations in `[-amplitude, amplitude]`.
///
/// The same seed always produces the same field.
pub fn ridged_grid(
    seed: u64,
    nx: usize,
    ny: usize,
    spacing: f64,
    base: f64,
    amplitude: f64,
) -> TempGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let xs = axis(nx, spacing);
    let ys = axis(ny, spacing);
    let depth: Vec<f64> = (0..nx * ny)
        .map(|_| base + rng.random_range(-amplitude..=amplitude))
        .collect();
    TempGrid::write(&xs, &ys, &depth)
}
