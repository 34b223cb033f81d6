//! Analytic bathymetry fields defined everywhere.

use swellray_core::{Bathymetry, DomainError};

/// A flat bottom: the same depth at every horizontal position.
///
/// Rays over a constant depth travel in straight lines, which makes
/// this the reference field for integrator accuracy tests.
#[derive(Clone, Copy, Debug)]
pub struct ConstantDepth {
    depth: f64,
}

impl ConstantDepth {
    /// A field with uniform depth `depth` (meters, positive down).
    pub fn new(depth: f64) -> Self {
        Self { depth }
    }
}

impl Bathymetry for ConstantDepth {
    fn depth(&self, _x: f64, _y: f64) -> Result<f64, DomainError> {
        Ok(self.depth)
    }

    fn depth_and_gradient(&self, _x: f64, _y: f64) -> Result<(f64, (f64, f64)), DomainError> {
        Ok((self.depth, (0.0, 0.0)))
    }
}

/// A planar bottom: depth varies linearly with position.
///
/// `depth(x, y) = offset + slope_x * x + slope_y * y`. A negative
/// depth region models a shoreline; rays refract toward shallower
/// water and ground where depth reaches zero.
#[derive(Clone, Copy, Debug)]
pub struct ConstantSlope {
    offset: f64,
    slope_x: f64,
    slope_y: f64,
}

impl ConstantSlope {
    /// A planar field with depth `offset` at the origin and constant
    /// gradient `(slope_x, slope_y)`.
    pub fn new(offset: f64, slope_x: f64, slope_y: f64) -> Self {
        Self {
            offset,
            slope_x,
            slope_y,
        }
    }
}

impl Bathymetry for ConstantSlope {
    fn depth(&self, x: f64, y: f64) -> Result<f64, DomainError> {
        Ok(self.offset + self.slope_x * x + self.slope_y * y)
    }

    fn depth_and_gradient(&self, x: f64, y: f64) -> Result<(f64, (f64, f64)), DomainError> {
        Ok((
            self.offset + self.slope_x * x + self.slope_y * y,
            (self.slope_x, self.slope_y),
        ))
    }
}
