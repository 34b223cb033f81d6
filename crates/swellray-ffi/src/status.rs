//! C-compatible status codes.
//!
//! [`SwellStatus`] is a `repr(i32)` enum covering every way a trace
//! call can end. Conversions from the library's termination and error
//! types are provided.

use swellray_core::{LoadError, StepContextError};
use swellray_trace::Termination;

/// C-compatible status code returned by all FFI functions.
///
/// Normal terminations are non-negative, errors are negative. Values
/// are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwellStatus {
    /// The ray ran to its end time without touching the bottom.
    Completed = 0,
    /// The ray ran to its end time after one or more reflections.
    CompletedReflected = 1,
    /// The ray left the covered domain before the end time.
    ExitedDomain = 2,
    /// The bathymetry file could not be loaded.
    LoadFailed = -1,
    /// Integration failed (non-finite state, degenerate wavenumber, or
    /// a reflection loop).
    NumericalFailed = -2,
    /// An argument is null, non-finite, out of range, or otherwise
    /// invalid.
    InvalidArgument = -3,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&Termination> for SwellStatus {
    fn from(t: &Termination) -> Self {
        match t {
            Termination::Completed { reflections: 0 } => SwellStatus::Completed,
            Termination::Completed { .. } => SwellStatus::CompletedReflected,
            Termination::ExitedDomain { .. } => SwellStatus::ExitedDomain,
            Termination::Failed(_) => SwellStatus::NumericalFailed,
        }
    }
}

impl From<&LoadError> for SwellStatus {
    fn from(_e: &LoadError) -> Self {
        SwellStatus::LoadFailed
    }
}

impl From<&StepContextError> for SwellStatus {
    fn from(_e: &StepContextError) -> Self {
        SwellStatus::InvalidArgument
    }
}
