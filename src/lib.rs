//! distvec: PETSc-style distributed vector adapter
//!
//! This crate wraps a backend vector (a possibly partitioned array of scalars) in
//! [`VectorBase`], which adds ownership-aware element access, whole-vector
//! reductions with a reproducible summation order, and in-place vector algebra.
//! Backend status codes become [`VecError`]s; checked-out arrays are always handed
//! back, also on error paths.

pub mod parallel;

pub mod backend;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-exports for convenience
pub use backend::{HostVector, Layout, RawVector, Scalar};
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
