//! The vector adapter: lifecycle, sizes, element writes and synchronization.
//!
//! `VectorBase` owns exactly one backend vector and forwards every operation to
//! it, turning backend status codes into [`VecError`]s. Element reads live in
//! [`reference`](super::reference), reductions in [`reductions`](super::reductions)
//! and the in-place algebra in [`algebra`](super::algebra).

use std::ops::Range;
use std::sync::Arc;

use log::{error, trace};

use super::reference::{VectorReference, VectorReferenceMut};
use crate::backend::{HostVector, InsertMode, RawVector, Scalar, VecType};
use crate::error::{Result, VecError};
use crate::parallel::{Comm, UniverseComm};

/// Kind of modification applied since the last [`VectorBase::compress`].
///
/// Inserting and adding values are different operations for a distributed
/// backend; a batch of one kind has to be closed by `compress()` before a batch
/// of the other kind may start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LastAction {
    None,
    Insert,
    Add,
}

/// Representation of the wrapped vector, fixed when the adapter is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    /// Every entry is stored by the calling process.
    Serial,
    /// The calling process stores the contiguous range reported by the backend.
    Partitioned,
}

impl From<VecType> for Storage {
    fn from(kind: VecType) -> Self {
        match kind {
            VecType::Seq => Storage::Serial,
            VecType::Mpi => Storage::Partitioned,
        }
    }
}

pub struct VectorBase<V: RawVector = HostVector> {
    pub(crate) raw: V,
    pub(crate) storage: Storage,
    pub(crate) last_action: LastAction,
}

impl VectorBase<HostVector> {
    /// Empty sequential vector.
    pub fn new() -> Self {
        Self::from_raw(HostVector::seq(0))
    }

    /// Sequential vector of `size` zeros.
    pub fn with_size(size: usize) -> Self {
        Self::from_raw(HostVector::seq(size))
    }

    pub fn from_slice(values: &[Scalar]) -> Self {
        Self::from_raw(HostVector::from_slice(values))
    }

    /// Distributed vector of `size` zeros, split evenly over the ranks of `comm`.
    pub fn distributed(comm: Arc<UniverseComm>, size: usize) -> Self {
        Self::from_raw(HostVector::mpi(comm, size))
    }

    /// Distributed vector in which the calling rank keeps its share of `global`.
    pub fn distributed_from_global(comm: Arc<UniverseComm>, global: &[Scalar]) -> Self {
        Self::from_raw(HostVector::mpi_from_global(comm, global))
    }

    pub fn comm(&self) -> &UniverseComm {
        self.raw.comm()
    }

    /// Rank of the calling process in the vector's communicator.
    pub fn rank(&self) -> usize {
        self.raw.comm().rank()
    }
}

impl Default for VectorBase<HostVector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: RawVector> VectorBase<V> {
    /// Take ownership of a backend vector.
    pub fn from_raw(raw: V) -> Self {
        let storage = Storage::from(raw.vec_type());
        Self { raw, storage, last_action: LastAction::None }
    }

    /// New vector with the same layout and a copy of the values.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::from_raw(self.raw.duplicate()?);
        copy.raw.copy_from(&self.raw)?;
        Ok(copy)
    }

    /// The wrapped backend vector.
    pub fn raw(&self) -> &V {
        &self.raw
    }

    pub fn storage(&self) -> Storage {
        self.storage
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// Global number of entries.
    pub fn size(&self) -> Result<usize> {
        Ok(self.raw.size()?)
    }

    /// Number of entries stored by the calling process.
    pub fn local_size(&self) -> Result<usize> {
        Ok(self.raw.local_size()?)
    }

    /// Global indices stored by the calling process.
    pub fn local_range(&self) -> Result<Range<usize>> {
        Ok(self.raw.ownership_range()?)
    }

    /// Fails with `DimensionMismatch` unless `other` has the same global size.
    pub(crate) fn check_size(&self, other: &Self) -> Result<usize> {
        let (n, m) = (self.size()?, other.size()?);
        if n != m {
            return Err(VecError::DimensionMismatch(n, m));
        }
        Ok(n)
    }

    /// Set every entry to zero.
    pub fn clear(&mut self) -> Result<()> {
        self.raw.set(0.0)?;
        Ok(())
    }

    /// Set every entry to `s`.
    pub fn assign(&mut self, s: Scalar) -> Result<&mut Self> {
        self.raw.set(s)?;
        Ok(self)
    }

    /// Finish a batch of `set`/`add_values` calls.
    ///
    /// Collective for distributed vectors: every rank must call it.
    pub fn compress(&mut self) -> Result<()> {
        trace!("compress after {:?}", self.last_action);
        self.raw.assembly_begin()?;
        self.raw.assembly_end()?;
        self.last_action = LastAction::None;
        Ok(())
    }

    /// Read proxy for the entry at global `index`.
    pub fn at(&self, index: usize) -> VectorReference<'_, V> {
        VectorReference::new(self, index)
    }

    /// Read/write proxy for the entry at global `index`.
    pub fn at_mut(&mut self, index: usize) -> VectorReferenceMut<'_, V> {
        VectorReferenceMut::new(self, index)
    }

    /// Value of the locally stored entry at global `index`.
    pub fn get(&self, index: usize) -> Result<Scalar> {
        self.at(index).get()
    }

    /// Overwrite the entries at `indices` with `values`.
    pub fn set(&mut self, indices: &[usize], values: &[Scalar]) -> Result<()> {
        self.write(indices, values, InsertMode::Insert)
    }

    /// Add `values` to the entries at `indices`.
    pub fn add_values(&mut self, indices: &[usize], values: &[Scalar]) -> Result<()> {
        self.write(indices, values, InsertMode::Add)
    }

    fn write(&mut self, indices: &[usize], values: &[Scalar], mode: InsertMode) -> Result<()> {
        let requested = match mode {
            InsertMode::Insert => LastAction::Insert,
            InsertMode::Add => LastAction::Add,
        };
        if self.last_action != LastAction::None && self.last_action != requested {
            return Err(VecError::WrongMode { last: self.last_action, requested });
        }
        if indices.len() != values.len() {
            return Err(VecError::DimensionMismatch(indices.len(), values.len()));
        }
        let size = self.size()?;
        let owned = self.raw.ownership_range()?;
        for &index in indices {
            if index >= size {
                return Err(VecError::IndexOutOfRange { index, size });
            }
            if !owned.contains(&index) {
                return Err(VecError::NonLocalAccess {
                    index,
                    begin: owned.start,
                    last: owned.end.saturating_sub(1),
                });
            }
        }
        self.raw.set_values(indices, values, mode)?;
        self.last_action = requested;
        Ok(())
    }
}

impl<V: RawVector> Drop for VectorBase<V> {
    fn drop(&mut self) {
        if let Err(code) = self.raw.destroy() {
            error!("failed to destroy vector (backend error code {}); aborting", code);
            std::process::abort();
        }
    }
}

impl<V: RawVector> std::fmt::Debug for VectorBase<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorBase")
            .field("storage", &self.storage)
            .field("size", &self.raw.size().ok())
            .field("local_range", &self.raw.ownership_range().ok())
            .field("last_action", &self.last_action)
            .finish()
    }
}
