//! Swellray: wave ray tracing over gridded bathymetry.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the swellray sub-crates. For most users, adding `swellray` as
//! a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use swellray::prelude::*;
//!
//! // A deep flat bottom: the ray runs straight at its group speed.
//! let field = ConstantDepth::new(1000.0);
//! let model = SurfaceGravity::default();
//! let tracer = RayTracer::new(RaySystem::new(&field, &model));
//!
//! let ctx = StepContext::new(0.1, 10.0).unwrap();
//! let trace = tracer.trace(RayState::initial(0.0, 0.0, 1.0, 0.0), &ctx);
//!
//! assert!(trace.completed());
//! assert!(trace.last().x > 15.0, "10 s of deep-water group speed");
//! ```
//!
//! Gridded fields come from NetCDF-3 files via
//! [`field::GridBathymetry::load`]; the C entry point lives in the
//! separate `swellray-ffi` crate.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swellray-core` | Ray state, step context, traits, error types |
//! | [`field`] | `swellray-field` | Gridded and analytic bathymetry fields |
//! | [`trace`] | `swellray-trace` | Dispersion models, integrator, boundary policy, tracer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`swellray-core`).
///
/// Contains [`types::RayState`], [`types::StepContext`], the
/// [`types::Bathymetry`] and [`types::Dispersion`] traits, and every
/// error type the tracer can report.
pub use swellray_core as types;

/// Bathymetry fields (`swellray-field`).
///
/// [`field::GridBathymetry`] loads a uniform depth grid from a classic
/// NetCDF-3 file; [`field::ConstantDepth`] and
/// [`field::ConstantSlope`] are analytic fields for tests and
/// controlled experiments, with [`field::UniformCurrent`] and
/// [`field::LinearCurrent`] as the matching background currents.
pub use swellray_field as field;

/// Ray tracing (`swellray-trace`).
///
/// Dispersion models ([`trace::SurfaceGravity`],
/// [`trace::ConstantSpeed`]), the ray ODE system, the fixed-step RK4
/// integrator, the reflection policy, and the [`trace::RayTracer`]
/// loop that drives them.
pub use swellray_trace as trace;

/// Common imports for typical swellray usage.
///
/// ```rust
/// use swellray::prelude::*;
/// ```
pub mod prelude {
    // Core state and traits
    pub use swellray_core::{Bathymetry, Current, Dispersion, RayState, StepContext};

    // Errors
    pub use swellray_core::{DomainError, LoadError, NumericalError, StepContextError};

    // Fields and currents
    pub use swellray_field::{
        ConstantDepth, ConstantSlope, GridBathymetry, LinearCurrent, UniformCurrent,
    };

    // Tracing
    pub use swellray_trace::{
        ConstantSpeed, RaySystem, RayTracer, SurfaceGravity, Termination, Trace,
    };
}
