//! Single-ray tracing: dispersion models, the coupled ray ODE system,
//! a fixed-step RK4 integrator, and the boundary/termination policy.
//!
//! The [`RayTracer`] drives the loop: it asks the [`RaySystem`] for the
//! local derivative, advances one step with [`Rk4`], and hands the
//! result to the [`BoundaryPolicy`], which either commits the step,
//! reflects the ray off the bottom, or terminates the trace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dispersion;
pub mod integrator;
pub mod policy;
pub mod system;
pub mod tracer;

pub use dispersion::{ConstantSpeed, SurfaceGravity};
pub use integrator::Rk4;
pub use policy::{BoundaryPolicy, Reflection, Termination};
pub use system::{RaySystem, StepFault};
pub use tracer::{RayTracer, Trace};
