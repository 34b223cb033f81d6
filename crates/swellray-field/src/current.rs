//! Analytic current fields defined everywhere.

use swellray_core::{Current, CurrentGradient, DomainError};

/// The same current at every horizontal position.
///
/// Zero gradient, so it advects rays without shearing the wavenumber.
#[derive(Clone, Copy, Debug)]
pub struct UniformCurrent {
    u: f64,
    v: f64,
}

impl UniformCurrent {
    /// A current with velocity `(u, v)` m/s everywhere.
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

impl Current for UniformCurrent {
    fn velocity(&self, _x: f64, _y: f64) -> Result<(f64, f64), DomainError> {
        Ok((self.u, self.v))
    }

    fn velocity_and_gradient(
        &self,
        _x: f64,
        _y: f64,
    ) -> Result<((f64, f64), CurrentGradient), DomainError> {
        Ok(((self.u, self.v), (0.0, 0.0, 0.0, 0.0)))
    }
}

/// A current whose components vary linearly with position.
///
/// `u(x, y) = u0 + du_dx * (x - x0) + du_dy * (y - y0)`, and likewise
/// for `v`. The gradient is the same everywhere, which makes this the
/// reference field for wavenumber shear tests; the default value is
/// still water.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearCurrent {
    /// x of the reference point where the velocity is `(u0, v0)`.
    pub x0: f64,
    /// y of the reference point.
    pub y0: f64,
    /// u at the reference point, m/s.
    pub u0: f64,
    /// v at the reference point, m/s.
    pub v0: f64,
    /// du/dx, 1/s.
    pub du_dx: f64,
    /// du/dy, 1/s.
    pub du_dy: f64,
    /// dv/dx, 1/s.
    pub dv_dx: f64,
    /// dv/dy, 1/s.
    pub dv_dy: f64,
}

impl Current for LinearCurrent {
    fn velocity(&self, x: f64, y: f64) -> Result<(f64, f64), DomainError> {
        let u = self.u0 + self.du_dx * (x - self.x0) + self.du_dy * (y - self.y0);
        let v = self.v0 + self.dv_dx * (x - self.x0) + self.dv_dy * (y - self.y0);
        Ok((u, v))
    }

    fn velocity_and_gradient(
        &self,
        x: f64,
        y: f64,
    ) -> Result<((f64, f64), CurrentGradient), DomainError> {
        let velocity = self.velocity(x, y)?;
        Ok((velocity, (self.du_dx, self.du_dy, self.dv_dx, self.dv_dy)))
    }
}
