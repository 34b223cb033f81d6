//! Bathymetry fields for swellray.
//!
//! [`GridBathymetry`] holds a uniformly gridded depth field with
//! bilinear interpolation and a one-cell clamped extrapolation margin;
//! [`load`](GridBathymetry::load) reads one from a classic NetCDF-3
//! file. [`ConstantDepth`] and [`ConstantSlope`] are analytic depth
//! fields for tests and library callers; [`UniformCurrent`] and
//! [`LinearCurrent`] are the matching analytic background currents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod analytic;
mod current;
mod grid;
mod loader;

pub use analytic::{ConstantDepth, ConstantSlope};
pub use current::{LinearCurrent, UniformCurrent};
pub use grid::GridBathymetry;
