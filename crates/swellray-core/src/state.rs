//! Ray state, derivative, and per-trace step context.

use crate::error::StepContextError;

/// The state of one ray: horizontal position, horizontal wavenumber,
/// and elapsed time.
///
/// Mutated only by the integrator, one step at a time. The wavenumber
/// magnitude `|k|` stays positive along the path; it varies only as
/// the dispersion relation dictates, and flips its bottom-normal
/// component at reflections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayState {
    /// x position in meters.
    pub x: f64,
    /// y position in meters.
    pub y: f64,
    /// x component of the wavenumber vector, 1/m.
    pub kx: f64,
    /// y component of the wavenumber vector, 1/m.
    pub ky: f64,
    /// Elapsed time in seconds.
    pub t: f64,
}

impl RayState {
    /// Initial state at `t = 0`.
    pub fn initial(x0: f64, y0: f64, kx0: f64, ky0: f64) -> Self {
        Self {
            x: x0,
            y: y0,
            kx: kx0,
            ky: ky0,
            t: 0.0,
        }
    }

    /// Wavenumber magnitude `|k| = hypot(kx, ky)`.
    pub fn wavenumber(&self) -> f64 {
        self.kx.hypot(self.ky)
    }

    /// Whether every component (including `t`) is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.kx.is_finite()
            && self.ky.is_finite()
            && self.t.is_finite()
    }
}

/// The time derivative of a [`RayState`], as produced by the ray
/// equations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Derivative {
    /// dx/dt — x component of the group velocity, m/s.
    pub dx_dt: f64,
    /// dy/dt — y component of the group velocity, m/s.
    pub dy_dt: f64,
    /// dkx/dt — wavenumber refraction rate along x.
    pub dkx_dt: f64,
    /// dky/dt — wavenumber refraction rate along y.
    pub dky_dt: f64,
}

impl Derivative {
    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.dx_dt.is_finite()
            && self.dy_dt.is_finite()
            && self.dkx_dt.is_finite()
            && self.dky_dt.is_finite()
    }
}

/// Upper bound on `end_time / step_size` for one trace.
///
/// Keeps the step count representable and the trace buffer within what
/// a host process can hold; a context above this bound is rejected at
/// construction rather than discovered as an allocation failure
/// mid-trace.
pub const MAX_TRACE_STEPS: f64 = 1e9;

/// Fixed step size and time horizon for one trace.
///
/// Validated once at construction; immutable for the duration of the
/// trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepContext {
    step_size: f64,
    end_time: f64,
}

impl StepContext {
    /// Validate and build a step context.
    ///
    /// # Errors
    ///
    /// Returns [`StepContextError::InvalidStepSize`] unless
    /// `step_size` is positive and finite,
    /// [`StepContextError::InvalidEndTime`] unless `end_time` is
    /// non-negative and finite, and
    /// [`StepContextError::ExcessiveSteps`] when the pair implies more
    /// than [`MAX_TRACE_STEPS`] steps.
    pub fn new(step_size: f64, end_time: f64) -> Result<Self, StepContextError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(StepContextError::InvalidStepSize(step_size));
        }
        if !end_time.is_finite() || end_time < 0.0 {
            return Err(StepContextError::InvalidEndTime(end_time));
        }
        let steps = end_time / step_size;
        if steps > MAX_TRACE_STEPS {
            return Err(StepContextError::ExcessiveSteps { steps });
        }
        Ok(Self {
            step_size,
            end_time,
        })
    }

    /// The fixed step size in seconds.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// The integration horizon in seconds.
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// The step to take from elapsed time `t`: the fixed step size,
    /// shortened if necessary so the trace lands exactly on the end
    /// time. Zero or negative means the horizon is already reached.
    pub fn dt_from(&self, t: f64) -> f64 {
        self.step_size.min(self.end_time - t)
    }

    /// The number of steps a full trace takes, rounded up. Bounded by
    /// [`MAX_TRACE_STEPS`], which construction enforces.
    pub fn expected_steps(&self) -> usize {
        (self.end_time / self.step_size).ceil() as usize
    }
}
