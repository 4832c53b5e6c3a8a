//! Whole-vector reductions and comparisons.

use super::vector::VectorBase;
use super::view::VectorView;
use crate::backend::{NormType, RawVector, Scalar};
use crate::error::Result;
use crate::utils::{strided_power_sum, strided_sum};

impl<V: RawVector> VectorBase<V> {
    /// Inner product with `other`.
    pub fn dot(&self, other: &Self) -> Result<Scalar> {
        self.check_size(other)?;
        Ok(self.raw.dot(&other.raw)?)
    }

    pub fn l1_norm(&self) -> Result<Scalar> {
        Ok(self.raw.norm(NormType::L1)?)
    }

    pub fn l2_norm(&self) -> Result<Scalar> {
        Ok(self.raw.norm(NormType::L2)?)
    }

    pub fn linfty_norm(&self) -> Result<Scalar> {
        Ok(self.raw.norm(NormType::Infinity)?)
    }

    /// Square of the l2 norm.
    pub fn norm_sqr(&self) -> Result<Scalar> {
        let d = self.l2_norm()?;
        Ok(d * d)
    }

    /// Arithmetic mean of all entries. NaN for an empty vector.
    ///
    /// The local entries are summed in four-way strided order
    /// (see [`strided_sum`]), then the per-owner sums are added.
    pub fn mean_value(&self) -> Result<Scalar> {
        let view = VectorView::new(&self.raw)?;
        let local = strided_sum(&view, |x| x);
        view.restore()?;
        let sum = self.raw.sum_reduce(local)?;
        Ok(sum / self.size()? as Scalar)
    }

    /// `(sum |x_i|^p)^(1/p)`, accumulated like [`mean_value`](Self::mean_value).
    pub fn lp_norm(&self, p: Scalar) -> Result<Scalar> {
        let view = VectorView::new(&self.raw)?;
        let local = strided_power_sum(&view, p);
        view.restore()?;
        let sum = self.raw.sum_reduce(local)?;
        Ok(sum.powf(1.0 / p))
    }

    /// Whether every locally stored entry is zero.
    ///
    /// Only the calling process's entries are inspected; there is no reduction
    /// over the other owners of a partitioned vector.
    pub fn all_zero(&self) -> Result<bool> {
        let view = VectorView::new(&self.raw)?;
        let flag = view.iter().all(|&x| x == 0.0);
        view.restore()?;
        Ok(flag)
    }

    /// Whether no locally stored entry is negative. Local only, like
    /// [`all_zero`](Self::all_zero).
    pub fn is_non_negative(&self) -> Result<bool> {
        let view = VectorView::new(&self.raw)?;
        let flag = !view.iter().any(|&x| x < 0.0);
        view.restore()?;
        Ok(flag)
    }

    /// Elementwise equality.
    pub fn is_equal(&self, other: &Self) -> Result<bool> {
        self.check_size(other)?;
        Ok(self.raw.equal(&other.raw)?)
    }

    /// Elementwise inequality; always `!is_equal(other)`.
    pub fn is_not_equal(&self, other: &Self) -> Result<bool> {
        self.check_size(other)?;
        let equal = self.raw.equal(&other.raw)?;
        Ok(!equal)
    }
}
