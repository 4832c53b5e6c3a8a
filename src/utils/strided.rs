//! Four-way strided accumulation.
//!
//! The local part of a vector is summed with four independent accumulators that
//! advance in lockstep over groups of four entries; leftover entries go into the
//! first accumulator and the four partial sums are added at the end as
//! `((s0 + s1) + s2) + s3`. This keeps the dependency chains short enough to be
//! pipelined, and it fixes the rounding of the result: callers that compare means
//! or p-norms bit for bit rely on exactly this summation order.

use num_traits::Float;

/// Sum of `f(x)` over `values` in four-way strided order.
pub fn strided_sum<T, F>(values: &[T], f: F) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let (mut s0, mut s1, mut s2, mut s3) = (T::zero(), T::zero(), T::zero(), T::zero());
    let mut quads = values.chunks_exact(4);
    for q in &mut quads {
        s0 = s0 + f(q[0]);
        s1 = s1 + f(q[1]);
        s2 = s2 + f(q[2]);
        s3 = s3 + f(q[3]);
    }
    for &x in quads.remainder() {
        s0 = s0 + f(x);
    }
    s0 + s1 + s2 + s3
}

/// Sum of `|x|^p` over `values` in four-way strided order.
pub fn strided_power_sum<T: Float>(values: &[T], p: T) -> T {
    strided_sum(values, |x| x.abs().powf(p))
}
