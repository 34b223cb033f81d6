//! Error taxonomy for ray tracing.
//!
//! Organized by failure class, matching the status codes surfaced at
//! the FFI boundary: [`LoadError`] (bathymetry resource unusable),
//! [`DomainError`] (query outside field coverage — a termination
//! reason, not a fault), [`NumericalError`] (non-finite or otherwise
//! invalid state during integration), and [`StepContextError`]
//! (invalid step size or time horizon).

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::extent::Extent;

/// Errors loading a bathymetry field from a resource.
///
/// All variants are unrecoverable for the current trace and map to the
/// load-failure status code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The path could not be opened or read.
    Io {
        /// The offending path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
    /// A required variable is absent from the resource.
    MissingVariable {
        /// The variable that could not be found.
        name: String,
    },
    /// A coordinate axis is not strictly increasing.
    NonMonotonicAxis {
        /// Which axis (`"x"` or `"y"`).
        axis: &'static str,
    },
    /// A coordinate axis is not uniformly spaced within tolerance.
    IrregularAxis {
        /// Which axis (`"x"` or `"y"`).
        axis: &'static str,
    },
    /// A coordinate axis has fewer than two samples.
    AxisTooShort {
        /// Which axis (`"x"` or `"y"`).
        axis: &'static str,
        /// Number of samples found.
        len: usize,
    },
    /// The depth variable's length does not match the axis lengths.
    ShapeMismatch {
        /// Expected element count (`len(x) * len(y)`).
        expected: usize,
        /// Actual element count of the depth variable.
        actual: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => {
                write!(f, "cannot read bathymetry at {}: {reason}", path.display())
            }
            Self::MissingVariable { name } => {
                write!(f, "bathymetry variable '{name}' not found")
            }
            Self::NonMonotonicAxis { axis } => {
                write!(f, "{axis} axis is not strictly increasing")
            }
            Self::IrregularAxis { axis } => {
                write!(f, "{axis} axis is not uniformly spaced")
            }
            Self::AxisTooShort { axis, len } => {
                write!(f, "{axis} axis has {len} samples, need at least 2")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "depth variable has {actual} elements, expected {expected}"
                )
            }
        }
    }
}

impl Error for LoadError {}

/// A depth query outside the field's covered domain, beyond the
/// one-cell extrapolation margin.
///
/// This is a normal termination reason for a trace (the ray left the
/// field), never a fatal error.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainError {
    /// Queried x coordinate.
    pub x: f64,
    /// Queried y coordinate.
    pub y: f64,
    /// The field's covered domain.
    pub extent: Extent,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query ({}, {}) outside field domain {}",
            self.x, self.y, self.extent
        )
    }
}

impl Error for DomainError {}

/// Numerical failures during integration.
///
/// Reported as a distinct status, never silently clamped.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericalError {
    /// The integrator produced a state with a non-finite component.
    NonFiniteState {
        /// Elapsed time at which the state broke down.
        t: f64,
    },
    /// The ray equations produced a non-finite derivative.
    NonFiniteDerivative {
        /// Elapsed time at which the derivative broke down.
        t: f64,
    },
    /// The wavenumber magnitude is zero, negative, or non-finite; the
    /// dispersion relation is undefined there.
    InvalidWavenumber {
        /// The offending magnitude `|k|`.
        k: f64,
    },
    /// The ray grounded where the bottom has no usable slope, so no
    /// reflection normal exists.
    FlatGrounding {
        /// x coordinate of the grounding contact.
        x: f64,
        /// y coordinate of the grounding contact.
        y: f64,
    },
    /// Repeated reflections at the same instant without the ray
    /// advancing; the trace cannot make progress.
    ReflectionLoop {
        /// Elapsed time at which the trace stalled.
        t: f64,
    },
}

impl fmt::Display for NumericalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteState { t } => write!(f, "non-finite ray state at t = {t}"),
            Self::NonFiniteDerivative { t } => {
                write!(f, "non-finite derivative at t = {t}")
            }
            Self::InvalidWavenumber { k } => {
                write!(f, "invalid wavenumber magnitude |k| = {k}")
            }
            Self::FlatGrounding { x, y } => {
                write!(f, "grounded on a flat bottom at ({x}, {y}); no reflection normal")
            }
            Self::ReflectionLoop { t } => {
                write!(f, "reflection loop at t = {t}; ray cannot advance")
            }
        }
    }
}

impl Error for NumericalError {}

/// Invalid step size or time horizon for a trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepContextError {
    /// The step size is zero, negative, or non-finite.
    InvalidStepSize(f64),
    /// The end time is negative or non-finite.
    InvalidEndTime(f64),
    /// `end_time / step_size` exceeds
    /// [`MAX_TRACE_STEPS`](crate::state::MAX_TRACE_STEPS).
    ExcessiveSteps {
        /// Requested number of steps.
        steps: f64,
    },
}

impl fmt::Display for StepContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepSize(dt) => {
                write!(f, "step size must be positive and finite, got {dt}")
            }
            Self::InvalidEndTime(t) => {
                write!(f, "end time must be non-negative and finite, got {t}")
            }
            Self::ExcessiveSteps { steps } => {
                write!(
                    f,
                    "trace would take {steps:e} steps, more than the supported {:e}",
                    crate::state::MAX_TRACE_STEPS
                )
            }
        }
    }
}

impl Error for StepContextError {}
