//! In-place vector algebra.
//!
//! Every operation checks the sizes of all vector arguments before anything is
//! modified, then forwards to the backend. Combinations the backend has no single
//! kernel for (`s*this + a*v`, `a*v + b*w`, ...) are applied as a scale followed
//! by a (multi-)axpy.

use super::vector::VectorBase;
use crate::backend::{RawVector, Scalar};
use crate::error::{Result, VecError};

impl<V: RawVector> VectorBase<V> {
    /// `this *= a`
    pub fn mul_assign(&mut self, a: Scalar) -> Result<&mut Self> {
        self.raw.scale(a)?;
        Ok(self)
    }

    /// `this /= a`
    pub fn div_assign(&mut self, a: Scalar) -> Result<&mut Self> {
        self.raw.scale(1.0 / a)?;
        Ok(self)
    }

    /// `this += v`
    pub fn add_assign(&mut self, v: &Self) -> Result<&mut Self> {
        self.check_size(v)?;
        self.raw.axpy(1.0, &v.raw)?;
        Ok(self)
    }

    /// `this -= v`
    pub fn sub_assign(&mut self, v: &Self) -> Result<&mut Self> {
        self.check_size(v)?;
        self.raw.axpy(-1.0, &v.raw)?;
        Ok(self)
    }

    /// Add `s` to every entry.
    pub fn shift(&mut self, s: Scalar) -> Result<()> {
        self.raw.shift(s)?;
        Ok(())
    }

    /// `this += v`
    pub fn add(&mut self, v: &Self) -> Result<()> {
        self.add_assign(v)?;
        Ok(())
    }

    /// `this += a*v`
    pub fn add_scaled(&mut self, a: Scalar, v: &Self) -> Result<()> {
        self.check_size(v)?;
        self.raw.axpy(a, &v.raw)?;
        Ok(())
    }

    /// `this += a*v + b*w`
    pub fn add_scaled_pair(&mut self, a: Scalar, v: &Self, b: Scalar, w: &Self) -> Result<()> {
        self.check_size(v)?;
        self.check_size(w)?;
        self.raw.maxpy(&[a, b], &[&v.raw, &w.raw])?;
        Ok(())
    }

    /// `this = s*this + v`
    pub fn sadd(&mut self, s: Scalar, v: &Self) -> Result<()> {
        self.check_size(v)?;
        self.raw.aypx(s, &v.raw)?;
        Ok(())
    }

    /// `this = s*this + a*v`
    pub fn sadd_scaled(&mut self, s: Scalar, a: Scalar, v: &Self) -> Result<()> {
        self.check_size(v)?;
        self.mul_assign(s)?;
        self.add_scaled(a, v)
    }

    /// `this = s*this + a*v + b*w`
    pub fn sadd_scaled_pair(&mut self, s: Scalar, a: Scalar, v: &Self, b: Scalar, w: &Self) -> Result<()> {
        self.check_size(v)?;
        self.check_size(w)?;
        self.mul_assign(s)?;
        self.raw.maxpy(&[a, b], &[&v.raw, &w.raw])?;
        Ok(())
    }

    /// `this = s*this + a*v + b*w + c*x`
    #[allow(clippy::too_many_arguments)]
    pub fn sadd_scaled_triple(
        &mut self,
        s: Scalar,
        a: Scalar,
        v: &Self,
        b: Scalar,
        w: &Self,
        c: Scalar,
        x: &Self,
    ) -> Result<()> {
        self.check_size(v)?;
        self.check_size(w)?;
        self.check_size(x)?;
        self.mul_assign(s)?;
        self.raw.maxpy(&[a, b, c], &[&v.raw, &w.raw, &x.raw])?;
        Ok(())
    }

    /// `this[i] *= factors[i]`
    pub fn scale(&mut self, factors: &Self) -> Result<()> {
        self.check_size(factors)?;
        self.raw.pointwise_mult(&factors.raw)?;
        Ok(())
    }

    /// `this = a*v`
    pub fn equ(&mut self, a: Scalar, v: &Self) -> Result<()> {
        self.check_matching(v)?;
        self.raw.copy_from(&v.raw)?;
        self.mul_assign(a)?;
        Ok(())
    }

    /// `this = a*v + b*w`: copy `v`, then `sadd_scaled(a, b, w)`.
    pub fn equ_pair(&mut self, a: Scalar, v: &Self, b: Scalar, w: &Self) -> Result<()> {
        self.check_matching(v)?;
        self.check_matching(w)?;
        self.raw.copy_from(&v.raw)?;
        self.sadd_scaled(a, b, w)
    }

    /// `this[i] = a[i] / b[i]`
    pub fn ratio(&mut self, a: &Self, b: &Self) -> Result<()> {
        self.check_size(a)?;
        self.check_size(b)?;
        self.raw.pointwise_divide(&a.raw, &b.raw)?;
        Ok(())
    }

    /// Exchange the contents of two vectors without copying entries.
    pub fn swap(&mut self, v: &mut Self) -> Result<()> {
        self.check_size(v)?;
        self.raw.swap(&mut v.raw)?;
        std::mem::swap(&mut self.last_action, &mut v.last_action);
        Ok(())
    }

    fn check_matching(&self, other: &Self) -> Result<()> {
        let (n, m) = (self.size()?, other.size()?);
        if n != m {
            return Err(VecError::NonMatchingSizes(n, m));
        }
        Ok(())
    }
}
