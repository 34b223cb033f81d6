//! Strategy traits: depth data access and the medium model.

use crate::error::DomainError;
use crate::extent::Extent;

/// Read-only access to a depth field.
///
/// Implementations are immutable after construction and `Sync`, so one
/// loaded field can back many concurrent single-ray traces.
///
/// Depth is positive downward: `depth > 0` is water, `depth <= 0` is
/// above the bottom surface (land).
pub trait Bathymetry: Sync {
    /// Depth at `(x, y)` in meters.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the query lies outside the field's
    /// coverage beyond its extrapolation margin.
    fn depth(&self, x: f64, y: f64) -> Result<f64, DomainError>;

    /// Depth and horizontal depth gradient `(dh/dx, dh/dy)` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the query lies outside the field's
    /// coverage beyond its extrapolation margin.
    fn depth_and_gradient(&self, x: f64, y: f64) -> Result<(f64, (f64, f64)), DomainError>;

    /// The covered horizontal domain, or `None` for analytic fields
    /// defined everywhere.
    fn extent(&self) -> Option<Extent> {
        None
    }
}

/// Spatial gradient of a current field:
/// `(du/dx, du/dy, dv/dx, dv/dy)`.
pub type CurrentGradient = (f64, f64, f64, f64);

/// A horizontal background current advecting the medium.
///
/// Folded into the ray equations as an advection term on the position
/// and a shear term on the wavenumber: `dx/dt` gains `(u, v)`, and
/// `dk_i/dt` gains `-(kx * dU/dx_i + ky * dV/dx_i)`. Still water is
/// represented by the absence of a current, not by a zero-valued one.
///
/// Implementations are immutable after construction and `Sync`.
pub trait Current: Sync {
    /// Current velocity `(u, v)` at `(x, y)`, m/s.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the query lies outside the
    /// current field's coverage.
    fn velocity(&self, x: f64, y: f64) -> Result<(f64, f64), DomainError>;

    /// Velocity and its spatial gradient at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the query lies outside the
    /// current field's coverage.
    fn velocity_and_gradient(
        &self,
        x: f64,
        y: f64,
    ) -> Result<((f64, f64), CurrentGradient), DomainError>;
}

/// The dispersion relation of the medium: how wavenumber magnitude and
/// local depth map to propagation speed and refraction.
///
/// Both methods are pure; implementations may assume `k > 0` and
/// `h > 0` (the caller enforces this before evaluating the model).
pub trait Dispersion: Sync {
    /// Group speed `cg(k, h)` in m/s — the speed at which the ray
    /// advances along its wavenumber direction.
    fn group_speed(&self, k: f64, h: f64) -> f64;

    /// Sensitivity of the intrinsic frequency to depth, `dω/dh`.
    ///
    /// The refraction term of the ray equations is
    /// `dk/dt = -(dω/dh) * grad h`; a depth-independent medium returns
    /// zero and its rays travel straight.
    fn depth_rate(&self, k: f64, h: f64) -> f64;

    /// Short model name for diagnostics.
    fn name(&self) -> &'static str;
}
