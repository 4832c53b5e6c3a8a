//! In-process vector backend.
//!
//! `HostVector` stores the locally owned entries in a contiguous `Vec` and combines
//! per-owner partial results through a [`UniverseComm`]. With the `rayon` feature
//! the elementwise kernels and local reductions run on the rayon thread pool.

use std::ops::Range;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use super::{InsertMode, Layout, NormType, RawVector, Scalar, VecType};
use crate::error::ErrorCode;
use crate::parallel::{Comm, ReduceOp, UniverseComm};

#[derive(Debug)]
pub struct HostVector {
    kind: VecType,
    layout: Layout,
    comm: Arc<UniverseComm>,
    values: Vec<Scalar>,
    /// Number of outstanding `get_array` calls.
    locks: AtomicUsize,
    pending: Option<InsertMode>,
    destroyed: bool,
}

impl HostVector {
    fn from_parts(kind: VecType, layout: Layout, comm: Arc<UniverseComm>, values: Vec<Scalar>) -> Self {
        debug_assert_eq!(layout.local_size(), values.len());
        debug!("creating {:?} vector of size {} owning {:?} on {:?}", kind, layout.size(), layout.owned(), comm);
        Self {
            kind,
            layout,
            comm,
            values,
            locks: AtomicUsize::new(0),
            pending: None,
            destroyed: false,
        }
    }

    /// Sequential vector of `size` zeros.
    pub fn seq(size: usize) -> Self {
        Self::from_slice(&vec![0.0; size])
    }

    /// Sequential vector holding a copy of `values`.
    pub fn from_slice(values: &[Scalar]) -> Self {
        Self::from_parts(
            VecType::Seq,
            Layout::serial(values.len()),
            Arc::new(UniverseComm::Serial),
            values.to_vec(),
        )
    }

    /// Distributed vector of `size` zeros, split evenly over the ranks of `comm`.
    pub fn mpi(comm: Arc<UniverseComm>, size: usize) -> Self {
        let layout = Layout::split(size, comm.rank(), comm.size());
        let values = vec![0.0; layout.local_size()];
        Self::from_parts(VecType::Mpi, layout, comm, values)
    }

    /// Distributed vector whose calling rank keeps its share of `global`.
    pub fn mpi_from_global(comm: Arc<UniverseComm>, global: &[Scalar]) -> Self {
        let layout = Layout::split(global.len(), comm.rank(), comm.size());
        let values = global[layout.owned()].to_vec();
        Self::from_parts(VecType::Mpi, layout, comm, values)
    }

    pub fn layout(&self) -> &Layout { &self.layout }

    pub fn comm(&self) -> &Arc<UniverseComm> { &self.comm }

    /// Number of local arrays currently checked out through `get_array`.
    pub fn array_locks(&self) -> usize {
        self.locks.load(Ordering::Acquire)
    }

    fn live(&self) -> Result<(), ErrorCode> {
        if self.destroyed { Err(ErrorCode::WRONG_STATE) } else { Ok(()) }
    }

    fn writable(&self) -> Result<(), ErrorCode> {
        self.live()?;
        if self.array_locks() > 0 { Err(ErrorCode::LOCKED) } else { Ok(()) }
    }

    fn conforms(&self, other: &Self) -> Result<(), ErrorCode> {
        other.live()?;
        if self.layout.size() != other.layout.size() {
            return Err(ErrorCode::SIZ);
        }
        if self.layout != other.layout {
            return Err(ErrorCode::INCOMP);
        }
        Ok(())
    }

    fn all_reduce(&self, local: Scalar, op: ReduceOp) -> Scalar {
        match self.kind {
            VecType::Seq => local,
            VecType::Mpi => self.comm.all_reduce(local, op),
        }
    }
}

fn map_inplace<F>(dst: &mut [Scalar], f: F)
where
    F: Fn(Scalar) -> Scalar + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        dst.par_iter_mut().for_each(|d| *d = f(*d));
    }
    #[cfg(not(feature = "rayon"))]
    {
        dst.iter_mut().for_each(|d| *d = f(*d));
    }
}

fn zip_inplace<F>(dst: &mut [Scalar], src: &[Scalar], f: F)
where
    F: Fn(Scalar, Scalar) -> Scalar + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        dst.par_iter_mut().zip(src.par_iter()).for_each(|(d, &s)| *d = f(*d, s));
    }
    #[cfg(not(feature = "rayon"))]
    {
        dst.iter_mut().zip(src.iter()).for_each(|(d, &s)| *d = f(*d, s));
    }
}

fn local_sum<F>(xs: &[Scalar], ys: &[Scalar], f: F) -> Scalar
where
    F: Fn(Scalar, Scalar) -> Scalar + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        xs.par_iter().zip(ys.par_iter()).map(|(&x, &y)| f(x, y)).sum()
    }
    #[cfg(not(feature = "rayon"))]
    {
        xs.iter().zip(ys.iter()).map(|(&x, &y)| f(x, y)).sum()
    }
}

impl RawVector for HostVector {
    fn vec_type(&self) -> VecType {
        self.kind
    }

    fn duplicate(&self) -> Result<Self, ErrorCode> {
        self.live()?;
        let values = vec![0.0; self.layout.local_size()];
        Ok(Self::from_parts(self.kind, self.layout.clone(), Arc::clone(&self.comm), values))
    }

    fn destroy(&mut self) -> Result<(), ErrorCode> {
        self.writable()?;
        self.values = Vec::new();
        self.destroyed = true;
        Ok(())
    }

    fn copy_from(&mut self, src: &Self) -> Result<(), ErrorCode> {
        self.writable()?;
        self.conforms(src)?;
        self.values.copy_from_slice(&src.values);
        Ok(())
    }

    fn size(&self) -> Result<usize, ErrorCode> {
        self.live()?;
        Ok(self.layout.size())
    }

    fn local_size(&self) -> Result<usize, ErrorCode> {
        self.live()?;
        Ok(self.layout.local_size())
    }

    fn ownership_range(&self) -> Result<Range<usize>, ErrorCode> {
        self.live()?;
        Ok(self.layout.owned())
    }

    fn get_array(&self) -> Result<&[Scalar], ErrorCode> {
        self.live()?;
        self.locks.fetch_add(1, Ordering::AcqRel);
        Ok(self.values.as_slice())
    }

    fn restore_array(&self) -> Result<(), ErrorCode> {
        self.locks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .map(|_| ())
            .map_err(|_| ErrorCode::WRONG_STATE)
    }

    fn set(&mut self, alpha: Scalar) -> Result<(), ErrorCode> {
        self.writable()?;
        map_inplace(&mut self.values, |_| alpha);
        Ok(())
    }

    fn scale(&mut self, alpha: Scalar) -> Result<(), ErrorCode> {
        self.writable()?;
        map_inplace(&mut self.values, |v| alpha * v);
        Ok(())
    }

    fn shift(&mut self, alpha: Scalar) -> Result<(), ErrorCode> {
        self.writable()?;
        map_inplace(&mut self.values, |v| v + alpha);
        Ok(())
    }

    fn axpy(&mut self, alpha: Scalar, x: &Self) -> Result<(), ErrorCode> {
        self.writable()?;
        self.conforms(x)?;
        zip_inplace(&mut self.values, &x.values, |y, x| y + alpha * x);
        Ok(())
    }

    fn aypx(&mut self, beta: Scalar, x: &Self) -> Result<(), ErrorCode> {
        self.writable()?;
        self.conforms(x)?;
        zip_inplace(&mut self.values, &x.values, |y, x| x + beta * y);
        Ok(())
    }

    fn maxpy(&mut self, alphas: &[Scalar], xs: &[&Self]) -> Result<(), ErrorCode> {
        self.writable()?;
        if alphas.len() != xs.len() {
            return Err(ErrorCode::SIZ);
        }
        for x in xs {
            self.conforms(x)?;
        }
        // one pass over the local storage for all addends
        let cols: Vec<&[Scalar]> = xs.iter().map(|x| x.values.as_slice()).collect();
        let addend = |i: usize| alphas.iter().zip(&cols).map(|(&a, x)| a * x[i]).sum::<Scalar>();
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            self.values.par_iter_mut().enumerate().for_each(|(i, y)| *y += addend(i));
        }
        #[cfg(not(feature = "rayon"))]
        {
            self.values.iter_mut().enumerate().for_each(|(i, y)| *y += addend(i));
        }
        Ok(())
    }

    fn pointwise_mult(&mut self, x: &Self) -> Result<(), ErrorCode> {
        self.writable()?;
        self.conforms(x)?;
        zip_inplace(&mut self.values, &x.values, |w, x| w * x);
        Ok(())
    }

    fn pointwise_divide(&mut self, x: &Self, y: &Self) -> Result<(), ErrorCode> {
        self.writable()?;
        self.conforms(x)?;
        self.conforms(y)?;
        self.values.copy_from_slice(&x.values);
        zip_inplace(&mut self.values, &y.values, |x, y| x / y);
        Ok(())
    }

    fn swap(&mut self, other: &mut Self) -> Result<(), ErrorCode> {
        self.writable()?;
        other.writable()?;
        self.conforms(other)?;
        std::mem::swap(&mut self.values, &mut other.values);
        std::mem::swap(&mut self.pending, &mut other.pending);
        Ok(())
    }

    fn dot(&self, other: &Self) -> Result<Scalar, ErrorCode> {
        self.live()?;
        self.conforms(other)?;
        let local = local_sum(&self.values, &other.values, |x, y| x * y);
        Ok(self.all_reduce(local, ReduceOp::Sum))
    }

    fn equal(&self, other: &Self) -> Result<bool, ErrorCode> {
        self.live()?;
        self.conforms(other)?;
        let local = if self.values == other.values { 1.0 } else { 0.0 };
        Ok(self.all_reduce(local, ReduceOp::Min) == 1.0)
    }

    fn norm(&self, kind: NormType) -> Result<Scalar, ErrorCode> {
        self.live()?;
        let v = &self.values;
        Ok(match kind {
            NormType::L1 => self.all_reduce(local_sum(v, v, |x, _| x.abs()), ReduceOp::Sum),
            NormType::L2 => self.all_reduce(local_sum(v, v, |x, _| x * x), ReduceOp::Sum).sqrt(),
            NormType::Infinity => {
                let local = v.iter().fold(0.0, |m: Scalar, x| m.max(x.abs()));
                self.all_reduce(local, ReduceOp::Max)
            }
        })
    }

    fn sum_reduce(&self, local: Scalar) -> Result<Scalar, ErrorCode> {
        self.live()?;
        Ok(self.all_reduce(local, ReduceOp::Sum))
    }

    fn set_values(&mut self, indices: &[usize], values: &[Scalar], mode: InsertMode) -> Result<(), ErrorCode> {
        self.writable()?;
        if indices.len() != values.len() {
            return Err(ErrorCode::SIZ);
        }
        let owned = self.layout.owned();
        // validate everything before touching storage
        if indices.iter().any(|&i| !owned.contains(&i)) {
            return Err(ErrorCode::OUT_OF_RANGE);
        }
        match self.pending {
            Some(p) if p != mode => return Err(ErrorCode::WRONG_STATE),
            _ => self.pending = Some(mode),
        }
        for (&i, &v) in indices.iter().zip(values) {
            let slot = &mut self.values[i - owned.start];
            match mode {
                InsertMode::Insert => *slot = v,
                InsertMode::Add => *slot += v,
            }
        }
        Ok(())
    }

    fn assembly_begin(&mut self) -> Result<(), ErrorCode> {
        self.writable()
    }

    fn assembly_end(&mut self) -> Result<(), ErrorCode> {
        self.writable()?;
        if self.kind == VecType::Mpi {
            self.comm.barrier();
        }
        self.pending = None;
        Ok(())
    }
}
