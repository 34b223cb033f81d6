//! Fixed-step 4th-order Runge–Kutta integration.
//!
//! The stepper is the single point of truth for time advancement: one
//! call to [`Rk4::step`] moves the ray forward by exactly `dt`, and no
//! other component writes `t`.

use swellray_core::{Derivative, NumericalError, RayState};

use crate::system::{RaySystem, StepFault};

/// Classic explicit RK4 over the four-component ray state.
pub struct Rk4;

impl Rk4 {
    /// Advance `state` by `dt` seconds.
    ///
    /// Evaluates the system at the four standard stage points and
    /// combines them with the 1/6–2/6–2/6–1/6 weights.
    ///
    /// # Errors
    ///
    /// Propagates any [`StepFault`] from a stage evaluation, and
    /// reports a non-finite combined state as
    /// [`NumericalError::NonFiniteState`].
    pub fn step(system: &RaySystem<'_>, state: &RayState, dt: f64) -> Result<RayState, StepFault> {
        let k1 = system.derivative(state)?;
        let k2 = system.derivative(&offset(state, &k1, dt / 2.0))?;
        let k3 = system.derivative(&offset(state, &k2, dt / 2.0))?;
        let k4 = system.derivative(&offset(state, &k3, dt))?;

        let next = RayState {
            x: state.x + dt / 6.0 * (k1.dx_dt + 2.0 * k2.dx_dt + 2.0 * k3.dx_dt + k4.dx_dt),
            y: state.y + dt / 6.0 * (k1.dy_dt + 2.0 * k2.dy_dt + 2.0 * k3.dy_dt + k4.dy_dt),
            kx: state.kx + dt / 6.0 * (k1.dkx_dt + 2.0 * k2.dkx_dt + 2.0 * k3.dkx_dt + k4.dkx_dt),
            ky: state.ky + dt / 6.0 * (k1.dky_dt + 2.0 * k2.dky_dt + 2.0 * k3.dky_dt + k4.dky_dt),
            t: state.t + dt,
        };
        if !next.is_finite() {
            return Err(StepFault::Numerical(NumericalError::NonFiniteState {
                t: state.t,
            }));
        }
        Ok(next)
    }
}

/// The stage point `state + dt * d`, with time moved along for
/// completeness (the system itself is autonomous).
fn offset(state: &RayState, d: &Derivative, dt: f64) -> RayState {
    RayState {
        x: state.x + dt * d.dx_dt,
        y: state.y + dt * d.dy_dt,
        kx: state.kx + dt * d.dkx_dt,
        ky: state.ky + dt * d.dky_dt,
        t: state.t + dt,
    }
}
