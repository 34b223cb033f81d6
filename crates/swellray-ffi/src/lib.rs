//! C FFI bindings for the swellray tracer.
//!
//! Exposes a C-compatible API for language bindings. This is the only
//! crate in the workspace that may contain `unsafe` code, and every
//! exported function catches panics at the boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body under `catch_unwind`, mapping a panic to
/// [`SwellStatus::Panicked`](crate::status::SwellStatus::Panicked).
///
/// No panic may cross the `extern "C"` boundary; that is undefined
/// behavior. Every exported function wraps its body in this macro.
macro_rules! ffi_guard {
    ($body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $crate::status::SwellStatus::Panicked as i32,
        }
    };
}

pub mod ray;
pub mod status;

pub use ray::single_ray;
pub use status::SwellStatus;
