//! The single-ray entry point.
//!
//! One call loads a bathymetry grid, traces one ray to its end time,
//! and reports how the trace ended as a status code. The call owns
//! everything it allocates; nothing survives the return.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::Path;

use swellray_core::{RayState, StepContext};
use swellray_field::GridBathymetry;
use swellray_trace::{RaySystem, RayTracer, SurfaceGravity};

use crate::status::SwellStatus;

/// Trace one surface-gravity ray over the bathymetry grid at `path`.
///
/// The ray starts at `(x0, y0)` with wavenumber `(kx0, ky0)` and is
/// integrated with fixed RK4 steps of `step_size` seconds until
/// `end_time` seconds have elapsed or the ray terminates early.
///
/// Returns a [`SwellStatus`] value as `i32`:
///
/// * `0` — completed without bottom contact
/// * `1` — completed after one or more reflections
/// * `2` — left the covered domain (normal termination)
/// * `-1` — the grid file could not be loaded
/// * `-2` — integration failed
/// * `-3` — invalid argument (null or non-UTF-8 path, non-positive or
///   non-finite `step_size`, negative or non-finite `end_time`)
/// * `-128` — a panic was caught at the boundary
///
/// # Safety
///
/// `path` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn single_ray(
    path: *const c_char,
    x0: f64,
    y0: f64,
    kx0: f64,
    ky0: f64,
    end_time: f64,
    step_size: f64,
) -> i32 {
    ffi_guard!({
        if path.is_null() {
            return SwellStatus::InvalidArgument as i32;
        }
        // SAFETY: non-null and NUL-terminated per caller contract.
        let path = unsafe { CStr::from_ptr(path) };
        let path = match path.to_str() {
            Ok(p) => p,
            Err(_) => return SwellStatus::InvalidArgument as i32,
        };

        let ctx = match StepContext::new(step_size, end_time) {
            Ok(c) => c,
            Err(e) => return SwellStatus::from(&e) as i32,
        };
        let field = match GridBathymetry::load(Path::new(path)) {
            Ok(f) => f,
            Err(e) => return SwellStatus::from(&e) as i32,
        };

        let model = SurfaceGravity::default();
        let tracer = RayTracer::new(RaySystem::new(&field, &model));
        let trace = tracer.trace(RayState::initial(x0, y0, kx0, ky0), &ctx);
        SwellStatus::from(&trace.termination) as i32
    })
}
