//! Backend vector interface.
//!
//! [`RawVector`] is the boundary between the adapter in [`crate::core`] and whatever
//! library actually stores the numbers. Its shape mirrors the classic PETSc `Vec`
//! API: every call reports success or a nonzero [`ErrorCode`], the local part of
//! the vector is reached through a get/restore array pair, and modifications made
//! through `set_values` only become globally consistent after an assembly pass.
//!
//! [`HostVector`] implements the interface in-process and is the backend used by
//! default.

use std::ops::Range;

use crate::error::ErrorCode;

pub mod layout;
pub use layout::Layout;

pub mod host;
pub use host::HostVector;

/// Scalar type stored by every backend vector.
pub type Scalar = f64;

/// Concrete representation of a backend vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecType {
    /// Sequential: a single owner holds every entry.
    Seq,
    /// Distributed: each rank of a communicator owns a contiguous range.
    Mpi,
}

/// Norms computed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormType {
    L1,
    L2,
    Infinity,
}

/// How `set_values` combines new values with the stored ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertMode {
    Insert,
    Add,
}

/// Operations a vector backend has to provide.
///
/// Two-vector operations may assume nothing about the layouts of their
/// arguments and should report [`ErrorCode::SIZ`] or [`ErrorCode::INCOMP`] when
/// they do not conform.
pub trait RawVector: Sized {
    fn vec_type(&self) -> VecType;

    /// New vector with the same layout; contents are zero.
    fn duplicate(&self) -> Result<Self, ErrorCode>;
    /// Release the storage. Any later call on the vector fails.
    fn destroy(&mut self) -> Result<(), ErrorCode>;
    /// `self = src`.
    fn copy_from(&mut self, src: &Self) -> Result<(), ErrorCode>;

    fn size(&self) -> Result<usize, ErrorCode>;
    fn local_size(&self) -> Result<usize, ErrorCode>;
    fn ownership_range(&self) -> Result<Range<usize>, ErrorCode>;

    /// Check out the contiguous local storage. Must be paired with
    /// [`restore_array`](RawVector::restore_array).
    fn get_array(&self) -> Result<&[Scalar], ErrorCode>;
    fn restore_array(&self) -> Result<(), ErrorCode>;

    /// Every entry becomes `alpha`.
    fn set(&mut self, alpha: Scalar) -> Result<(), ErrorCode>;
    /// `self = alpha * self`.
    fn scale(&mut self, alpha: Scalar) -> Result<(), ErrorCode>;
    /// `self = self + alpha` entrywise.
    fn shift(&mut self, alpha: Scalar) -> Result<(), ErrorCode>;
    /// `self = self + alpha * x`.
    fn axpy(&mut self, alpha: Scalar, x: &Self) -> Result<(), ErrorCode>;
    /// `self = x + beta * self`.
    fn aypx(&mut self, beta: Scalar, x: &Self) -> Result<(), ErrorCode>;
    /// `self = self + sum_i alphas[i] * xs[i]`.
    fn maxpy(&mut self, alphas: &[Scalar], xs: &[&Self]) -> Result<(), ErrorCode>;
    /// `self[i] = self[i] * x[i]`.
    fn pointwise_mult(&mut self, x: &Self) -> Result<(), ErrorCode>;
    /// `self[i] = x[i] / y[i]`.
    fn pointwise_divide(&mut self, x: &Self, y: &Self) -> Result<(), ErrorCode>;
    /// Exchange the contents of two vectors with the same layout.
    fn swap(&mut self, other: &mut Self) -> Result<(), ErrorCode>;

    fn dot(&self, other: &Self) -> Result<Scalar, ErrorCode>;
    fn equal(&self, other: &Self) -> Result<bool, ErrorCode>;
    fn norm(&self, kind: NormType) -> Result<Scalar, ErrorCode>;
    /// Sum a per-owner partial result over every owner of the vector.
    fn sum_reduce(&self, local: Scalar) -> Result<Scalar, ErrorCode>;

    /// Write `values` at the global `indices`.
    fn set_values(&mut self, indices: &[usize], values: &[Scalar], mode: InsertMode) -> Result<(), ErrorCode>;
    fn assembly_begin(&mut self) -> Result<(), ErrorCode>;
    fn assembly_end(&mut self) -> Result<(), ErrorCode>;
}
