//! Precision-polymorphic bridge to native complex linear algebra
//!
//! Generic numerical code written against a single complex-number
//! abstraction needs to call the correct single- or double-precision entry
//! point of an underlying dense linear-algebra backend. This crate is that
//! dispatch-and-bridge layer:
//!
//! - [`precision`] resolves, once per public operation, which concrete
//!   precision's native routine to call, and rejects unsupported component
//!   types at first use;
//! - [`layout`] reinterprets interleaved complex buffers as the scalar
//!   layout the native routines expect, without copying;
//! - [`kernels`] wraps the vector/matrix kernels (norms, scaling, argmax,
//!   dot products, matrix products, rank-1 updates) behind one
//!   precision-agnostic call each, including the infinity-norm argmax
//!   policy the backend does not provide;
//! - [`factor`] wraps solve, least squares, SVD, Hermitian
//!   eigendecomposition and Schur, owning the call-scoped scratch
//!   workspace and the Schur eigenvalue split;
//! - [`elementwise`] converts between interleaved and split storage and
//!   routes elementwise abs/conj/mul/div through the split-only vectorized
//!   backend.
//!
//! The backend itself is pluggable: [`backend::NativeBackend`] states the
//! native call contract, [`reference::ReferenceBackend`] is the default
//! pure-Rust implementation, and [`backend::set_backend`] installs a
//! binding to an external native library. Every operation is synchronous
//! and fail-fast; numerical failures carry the backend's status code
//! verbatim as a [`FactorError`].
//!
//! ```
//! use complex_bridge::{elementwise, kernels};
//! use num_complex::Complex;
//!
//! let x = [Complex::new(1.0f64, 2.0)];
//! let y = [Complex::new(3.0f64, 4.0)];
//! assert_eq!(kernels::dotc(1, &x, 1, &y, 1), Complex::new(11.0, 2.0));
//!
//! let mut out = [Complex::new(0.0f64, 0.0)];
//! elementwise::mul(&x, &y, &mut out);
//! assert_eq!(out[0], Complex::new(-5.0, 10.0));
//! ```

pub mod backend;
pub mod elementwise;
pub mod error;
pub mod factor;
pub mod kernels;
pub mod layout;
pub mod precision;
pub mod reference;

pub use backend::{backend_name, reset_backend, set_backend, NativeBackend, Order, Transpose};
pub use error::FactorError;
pub use factor::{SvdJob, Uplo, Vectors};
pub use precision::Precision;
pub use reference::ReferenceBackend;
