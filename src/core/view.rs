//! Scoped access to the local storage of a backend vector.

use std::ops::Deref;

use log::error;

use crate::backend::{RawVector, Scalar};
use crate::error::Result;

/// Checked-out local array of a vector, derefs to a slice.
///
/// The array is handed back to the backend when the view is dropped, so early
/// returns and `?` never leave the vector locked. Call [`restore`](Self::restore)
/// on the normal path to observe a failing restore as an error; on drop a
/// failure can only be logged.
pub struct VectorView<'a, V: RawVector> {
    vec: &'a V,
    array: &'a [Scalar],
    restored: bool,
}

impl<'a, V: RawVector> VectorView<'a, V> {
    pub fn new(vec: &'a V) -> Result<Self> {
        let array = vec.get_array()?;
        Ok(Self { vec, array, restored: false })
    }

    /// Hand the array back to the backend.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        self.vec.restore_array()?;
        Ok(())
    }
}

impl<V: RawVector> Drop for VectorView<'_, V> {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(code) = self.vec.restore_array() {
                error!("failed to restore vector array (backend error code {})", code);
            }
        }
    }
}

impl<V: RawVector> Deref for VectorView<'_, V> {
    type Target = [Scalar];
    fn deref(&self) -> &[Scalar] {
        self.array
    }
}
