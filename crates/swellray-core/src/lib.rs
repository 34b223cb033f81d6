//! Core types and traits for the swellray ray-tracing library.
//!
//! This crate defines the vocabulary shared by the field, trace, and FFI
//! crates: the ray state vector, the per-trace step context, the error
//! taxonomy, and the strategy seams — [`Bathymetry`] for depth data,
//! [`Dispersion`] for the medium model, and [`Current`] for an optional
//! background flow.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extent;
pub mod state;
pub mod traits;

pub use error::{DomainError, LoadError, NumericalError, StepContextError};
pub use extent::Extent;
pub use state::{Derivative, RayState, StepContext, MAX_TRACE_STEPS};
pub use traits::{Bathymetry, Current, CurrentGradient, Dispersion};
