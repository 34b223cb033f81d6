//! Boundary interaction and termination policy.
//!
//! Consulted after every integrator step. The policy is the only
//! component allowed to alter the ray direction outside the natural
//! ODE flow: it mirrors the wavenumber about the local bottom normal
//! when a step makes boundary contact. Phases other than running
//! (exited, completed, failed) are terminal.

use swellray_core::{Bathymetry, NumericalError, RayState};

use crate::system::StepFault;

/// Depth at or below which the ray is considered in contact with the
/// bottom, in meters.
pub(crate) const GROUNDING_DEPTH: f64 = 0.01;

/// Gradient magnitude below which no reflection normal exists.
const MIN_SLOPE: f64 = 1e-12;

/// How a trace ended. Produced exactly once per trace.
#[derive(Clone, Debug, PartialEq)]
pub enum Termination {
    /// Reached the end time; `reflections` counts bottom contacts
    /// along the way.
    Completed {
        /// Number of reflections that occurred during the trace.
        reflections: usize,
    },
    /// The ray left the field's covered domain at roughly `(x, y)`.
    ExitedDomain {
        /// x coordinate of the out-of-domain sample.
        x: f64,
        /// y coordinate of the out-of-domain sample.
        y: f64,
    },
    /// Integration failed; the trace is unusable past this point.
    Failed(NumericalError),
}

/// One bottom contact: when, where, and about which normal the
/// wavenumber was mirrored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflection {
    /// Elapsed time of the contact.
    pub t: f64,
    /// x position of the contact.
    pub x: f64,
    /// y position of the contact.
    pub y: f64,
    /// Unit up-slope normal the wavenumber was mirrored about.
    pub normal: (f64, f64),
}

/// The policy's decision for one attempted step.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// The step is valid; commit the new state.
    Advance(RayState),
    /// The step made boundary contact: discard it and resume from the
    /// pre-step position with the mirrored wavenumber.
    Reflect(Reflection, RayState),
    /// The ray left the domain; terminate normally.
    Exit {
        /// x coordinate of the out-of-domain sample.
        x: f64,
        /// y coordinate of the out-of-domain sample.
        y: f64,
    },
    /// Numerical failure; terminate with an error.
    Fail(NumericalError),
}

/// Boundary/termination rules for one trace.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundaryPolicy;

impl BoundaryPolicy {
    /// Review one attempted step from `current`.
    ///
    /// `attempt` is the integrator's result. A committed endpoint that
    /// leaves the field's proper extent is a domain exit: the
    /// extrapolation margin only cushions mid-step stage samples, so a
    /// ray crossing the boundary never lingers inside the margin. A
    /// successful step is additionally checked for grounding at its
    /// endpoint, which is what makes reflection robust to steps longer
    /// than the distance to the bottom: the contact is detected from
    /// the end state, not from whether any sample happened to land
    /// inside the bottom.
    pub fn review(
        &self,
        bathymetry: &dyn Bathymetry,
        current: &RayState,
        attempt: Result<RayState, StepFault>,
    ) -> Verdict {
        match attempt {
            Ok(next) => {
                if let Some(extent) = bathymetry.extent() {
                    if !extent.contains(next.x, next.y) {
                        return Verdict::Exit {
                            x: next.x,
                            y: next.y,
                        };
                    }
                }
                match bathymetry.depth(next.x, next.y) {
                    Ok(h) if h <= GROUNDING_DEPTH => self.reflect_at(bathymetry, current),
                    Ok(_) => Verdict::Advance(next),
                    Err(e) => Verdict::Exit { x: e.x, y: e.y },
                }
            }
            Err(StepFault::Grounded) => self.reflect_at(bathymetry, current),
            Err(StepFault::OutOfDomain(e)) => Verdict::Exit { x: e.x, y: e.y },
            Err(StepFault::Numerical(e)) => Verdict::Fail(e),
        }
    }

    /// Mirror the wavenumber about the up-slope normal at the pre-step
    /// position. The position and elapsed time are unchanged; the
    /// offending step is discarded.
    fn reflect_at(&self, bathymetry: &dyn Bathymetry, current: &RayState) -> Verdict {
        let (_, (gx, gy)) = match bathymetry.depth_and_gradient(current.x, current.y) {
            Ok(v) => v,
            Err(e) => return Verdict::Exit { x: e.x, y: e.y },
        };
        let slope = gx.hypot(gy);
        if slope < MIN_SLOPE {
            return Verdict::Fail(NumericalError::FlatGrounding {
                x: current.x,
                y: current.y,
            });
        }
        let (nx, ny) = (gx / slope, gy / slope);
        let (kx, ky) = reflect_wavenumber(current.kx, current.ky, nx, ny);
        let reflected = RayState {
            kx,
            ky,
            ..*current
        };
        Verdict::Reflect(
            Reflection {
                t: current.t,
                x: current.x,
                y: current.y,
                normal: (nx, ny),
            },
            reflected,
        )
    }
}

/// Mirror `(kx, ky)` about the unit normal `(nx, ny)`:
/// `k' = k − 2·(k·n̂)·n̂`. The normal component reverses sign, the
/// tangential component and the magnitude are preserved.
pub fn reflect_wavenumber(kx: f64, ky: f64, nx: f64, ny: f64) -> (f64, f64) {
    let k_dot_n = kx * nx + ky * ny;
    (kx - 2.0 * k_dot_n * nx, ky - 2.0 * k_dot_n * ny)
}
