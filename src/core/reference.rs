//! Proxies for single vector entries.
//!
//! A backend offers no "get one value" call: reading an entry means checking out
//! the local array, picking the value and handing the array back. Only the part
//! of a partitioned vector stored by the calling process can be read this way.

use super::vector::{Storage, VectorBase};
use super::view::VectorView;
use crate::backend::{RawVector, Scalar};
use crate::error::{Result, VecError};

/// Read-only proxy for the entry at a global index.
pub struct VectorReference<'a, V: RawVector> {
    vector: &'a VectorBase<V>,
    index: usize,
}

impl<'a, V: RawVector> VectorReference<'a, V> {
    pub(crate) fn new(vector: &'a VectorBase<V>, index: usize) -> Self {
        Self { vector, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self) -> Result<Scalar> {
        read(self.vector, self.index)
    }
}

/// Read/write proxy for the entry at a global index.
///
/// Writes go through the vector's insert/add path: they must target a locally
/// stored entry and obey the [`LastAction`](super::LastAction) rules.
pub struct VectorReferenceMut<'a, V: RawVector> {
    vector: &'a mut VectorBase<V>,
    index: usize,
}

impl<'a, V: RawVector> VectorReferenceMut<'a, V> {
    pub(crate) fn new(vector: &'a mut VectorBase<V>, index: usize) -> Self {
        Self { vector, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self) -> Result<Scalar> {
        read(&*self.vector, self.index)
    }

    /// Overwrite the entry.
    pub fn set(&mut self, value: Scalar) -> Result<()> {
        self.vector.set(&[self.index], &[value])
    }

    /// Add to the entry.
    pub fn add(&mut self, value: Scalar) -> Result<()> {
        self.vector.add_values(&[self.index], &[value])
    }

    /// Subtract from the entry.
    pub fn sub(&mut self, value: Scalar) -> Result<()> {
        self.vector.add_values(&[self.index], &[-value])
    }
}

fn read<V: RawVector>(vector: &VectorBase<V>, index: usize) -> Result<Scalar> {
    let size = vector.size()?;
    if index >= size {
        return Err(VecError::IndexOutOfRange { index, size });
    }
    match vector.storage() {
        Storage::Serial => {
            let view = VectorView::new(vector.raw())?;
            let value = *view
                .get(index)
                .ok_or(VecError::Internal("serial vector stores fewer entries than its size"))?;
            view.restore()?;
            Ok(value)
        }
        Storage::Partitioned => {
            let owned = vector.raw().ownership_range()?;
            if !owned.contains(&index) {
                return Err(VecError::NonLocalAccess {
                    index,
                    begin: owned.start,
                    last: owned.end.saturating_sub(1),
                });
            }
            let view = VectorView::new(vector.raw())?;
            let value = *view
                .get(index - owned.start)
                .ok_or(VecError::Internal("local array is shorter than the ownership range"))?;
            view.restore()?;
            Ok(value)
        }
    }
}
