//! The vector adapter.
//!
//! - [`VectorBase`]: owns a backend vector; lifecycle, element writes, `compress`.
//! - [`VectorReference`] / [`VectorReferenceMut`]: proxies for single entries with
//!   ownership-aware bounds checks.
//! - [`VectorView`]: scoped checkout of the local array.
//! - reductions (norms, mean, dot, sign scans, equality), in-place algebra and
//!   `print` are implemented on `VectorBase` in their own modules.

pub mod vector;
pub use vector::{LastAction, Storage, VectorBase};
pub mod reference;
pub use reference::{VectorReference, VectorReferenceMut};
pub mod view;
pub use view::VectorView;

mod algebra;
mod print;
mod reductions;

#[cfg(test)]
pub(crate) mod mock;
