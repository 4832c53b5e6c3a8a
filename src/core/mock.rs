// Backend wrapper for tests: forwards to a HostVector, optionally misbehaving.

use std::ops::Range;

use crate::backend::{HostVector, InsertMode, NormType, RawVector, Scalar, VecType};
use crate::error::ErrorCode;

pub(crate) struct MockVector {
    pub inner: HostVector,
    /// Added to the reported global size, making the local array too short.
    pub extra_size: usize,
    pub fail_restore: bool,
    pub fail_duplicate: bool,
    pub fail_copy: bool,
    pub fail_norm: bool,
}

impl MockVector {
    pub fn from_slice(values: &[Scalar]) -> Self {
        Self::wrap(HostVector::from_slice(values))
    }

    fn wrap(inner: HostVector) -> Self {
        Self {
            inner,
            extra_size: 0,
            fail_restore: false,
            fail_duplicate: false,
            fail_copy: false,
            fail_norm: false,
        }
    }
}

impl RawVector for MockVector {
    fn vec_type(&self) -> VecType { self.inner.vec_type() }

    fn duplicate(&self) -> Result<Self, ErrorCode> {
        if self.fail_duplicate {
            return Err(ErrorCode::MEM);
        }
        let mut dup = Self::wrap(self.inner.duplicate()?);
        dup.fail_copy = self.fail_copy;
        Ok(dup)
    }

    fn destroy(&mut self) -> Result<(), ErrorCode> { self.inner.destroy() }

    fn copy_from(&mut self, src: &Self) -> Result<(), ErrorCode> {
        if self.fail_copy {
            return Err(ErrorCode::INCOMP);
        }
        self.inner.copy_from(&src.inner)
    }

    fn size(&self) -> Result<usize, ErrorCode> { Ok(self.inner.size()? + self.extra_size) }
    fn local_size(&self) -> Result<usize, ErrorCode> { self.inner.local_size() }
    fn ownership_range(&self) -> Result<Range<usize>, ErrorCode> { self.inner.ownership_range() }
    fn get_array(&self) -> Result<&[Scalar], ErrorCode> { self.inner.get_array() }

    fn restore_array(&self) -> Result<(), ErrorCode> {
        self.inner.restore_array()?;
        if self.fail_restore { Err(ErrorCode::WRONG_STATE) } else { Ok(()) }
    }

    fn set(&mut self, alpha: Scalar) -> Result<(), ErrorCode> { self.inner.set(alpha) }
    fn scale(&mut self, alpha: Scalar) -> Result<(), ErrorCode> { self.inner.scale(alpha) }
    fn shift(&mut self, alpha: Scalar) -> Result<(), ErrorCode> { self.inner.shift(alpha) }
    fn axpy(&mut self, alpha: Scalar, x: &Self) -> Result<(), ErrorCode> { self.inner.axpy(alpha, &x.inner) }
    fn aypx(&mut self, beta: Scalar, x: &Self) -> Result<(), ErrorCode> { self.inner.aypx(beta, &x.inner) }

    fn maxpy(&mut self, alphas: &[Scalar], xs: &[&Self]) -> Result<(), ErrorCode> {
        let inner: Vec<&HostVector> = xs.iter().map(|x| &x.inner).collect();
        self.inner.maxpy(alphas, &inner)
    }

    fn pointwise_mult(&mut self, x: &Self) -> Result<(), ErrorCode> { self.inner.pointwise_mult(&x.inner) }
    fn pointwise_divide(&mut self, x: &Self, y: &Self) -> Result<(), ErrorCode> {
        self.inner.pointwise_divide(&x.inner, &y.inner)
    }
    fn swap(&mut self, other: &mut Self) -> Result<(), ErrorCode> { self.inner.swap(&mut other.inner) }
    fn dot(&self, other: &Self) -> Result<Scalar, ErrorCode> { self.inner.dot(&other.inner) }
    fn equal(&self, other: &Self) -> Result<bool, ErrorCode> { self.inner.equal(&other.inner) }

    fn norm(&self, kind: NormType) -> Result<Scalar, ErrorCode> {
        if self.fail_norm {
            return Err(ErrorCode::OUT_OF_RANGE);
        }
        self.inner.norm(kind)
    }

    fn sum_reduce(&self, local: Scalar) -> Result<Scalar, ErrorCode> { self.inner.sum_reduce(local) }

    fn set_values(&mut self, indices: &[usize], values: &[Scalar], mode: InsertMode) -> Result<(), ErrorCode> {
        self.inner.set_values(indices, values, mode)
    }
    fn assembly_begin(&mut self) -> Result<(), ErrorCode> { self.inner.assembly_begin() }
    fn assembly_end(&mut self) -> Result<(), ErrorCode> { self.inner.assembly_end() }
}
