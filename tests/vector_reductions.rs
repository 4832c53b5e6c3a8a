//! Tests for whole-vector reductions: norms, mean, dot product and sign scans.
//!
//! Serial cases are checked against manual computations on random data; the
//! partitioned cases check that norms, means and dot products are global while
//! `all_zero` and `is_non_negative` only look at the calling rank's entries.

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use distvec::VectorBase;
use distvec::utils::strided_sum;
use rand::Rng;

fn random_values(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect()
}

/// Fixed examples for mean, p-norm and l1 norm.
#[test]
fn reference_values() {
    assert_eq!(VectorBase::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).mean_value().unwrap(), 3.0);
    assert_abs_diff_eq!(VectorBase::from_slice(&[3.0, 4.0]).lp_norm(2.0).unwrap(), 5.0, epsilon = 1e-14);
    assert_abs_diff_eq!(VectorBase::from_slice(&[-1.0, 2.0, -3.0]).l1_norm().unwrap(), 6.0, epsilon = 1e-14);
}

/// Norms and dot product on random data agree with direct formulas.
#[test]
fn norms_match_manual_computation() {
    let n = 37;
    let x = random_values(n);
    let y = random_values(n);
    let vx = VectorBase::from_slice(&x);
    let vy = VectorBase::from_slice(&y);

    let l1: f64 = x.iter().map(|v| v.abs()).sum();
    let l2: f64 = x.iter().map(|v| v * v).sum::<f64>().sqrt();
    let linf = x.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let dot: f64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();

    assert_relative_eq!(vx.l1_norm().unwrap(), l1, max_relative = 1e-12);
    assert_relative_eq!(vx.l2_norm().unwrap(), l2, max_relative = 1e-12);
    assert_eq!(vx.linfty_norm().unwrap(), linf);
    assert_relative_eq!(vx.dot(&vy).unwrap(), dot, max_relative = 1e-10, epsilon = 1e-12);
    assert_relative_eq!(vx.norm_sqr().unwrap(), l2 * l2, max_relative = 1e-12);
    assert_relative_eq!(vx.lp_norm(2.0).unwrap(), l2, max_relative = 1e-12);
    assert_relative_eq!(vx.lp_norm(1.0).unwrap(), l1, max_relative = 1e-12);
}

/// The mean is the four-way strided sum divided by the size, bit for bit.
#[test]
fn mean_uses_strided_summation() {
    for n in [1, 3, 4, 5, 8, 13, 64] {
        let x = random_values(n);
        let v = VectorBase::from_slice(&x);
        let expected = strided_sum(&x, |v| v) / n as f64;
        assert_eq!(v.mean_value().unwrap(), expected, "n = {}", n);
        let naive = x.iter().sum::<f64>() / n as f64;
        assert_abs_diff_eq!(v.mean_value().unwrap(), naive, epsilon = 1e-12);
    }
}

/// Norms, mean and dot product of a partitioned vector cover every rank.
#[test]
fn partitioned_reductions_are_global() {
    let global: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let results = common::on_ranks(3, |comm| {
        let v = VectorBase::distributed_from_global(comm.clone(), &global);
        let w = VectorBase::distributed_from_global(comm, &global);
        (
            v.l1_norm().unwrap(),
            v.norm_sqr().unwrap(),
            v.linfty_norm().unwrap(),
            v.mean_value().unwrap(),
            v.lp_norm(1.0).unwrap(),
            v.dot(&w).unwrap(),
            v.is_equal(&w).unwrap(),
        )
    });
    for (l1, sqr, linf, mean, lp1, dot, equal) in results {
        assert_eq!(l1, 55.0);
        assert_relative_eq!(sqr, 385.0, max_relative = 1e-12);
        assert_eq!(linf, 10.0);
        assert_eq!(mean, 5.5);
        assert_eq!(lp1, 55.0);
        assert_eq!(dot, 385.0);
        assert!(equal);
    }
}

/// A difference on one rank makes the vectors unequal on every rank.
#[test]
fn partitioned_equality_is_collective() {
    let global = vec![1.0; 6];
    let results = common::on_ranks(2, |comm| {
        let v = VectorBase::distributed_from_global(comm.clone(), &global);
        let mut w = VectorBase::distributed_from_global(comm, &global);
        if w.rank() == 1 {
            let last = w.local_range().unwrap().end - 1;
            w.set(&[last], &[2.0]).unwrap();
        }
        w.compress().unwrap();
        (v.is_equal(&w).unwrap(), v.is_not_equal(&w).unwrap())
    });
    assert_eq!(results, vec![(false, true), (false, true)]);
}

/// `all_zero` and `is_non_negative` only inspect the calling rank's entries; there
/// is no reduction, so ranks may disagree about the same vector.
#[test]
fn sign_scans_are_local_only() {
    let mut global = vec![0.0; 9];
    global[8] = -1.0;
    let results = common::on_ranks(3, |comm| {
        let v = VectorBase::distributed_from_global(comm, &global);
        (v.all_zero().unwrap(), v.is_non_negative().unwrap())
    });
    assert_eq!(results, vec![(true, true), (true, true), (false, false)]);
}

/// Clearing any vector makes it all zero.
#[test]
fn clear_then_all_zero() {
    let mut v = VectorBase::from_slice(&random_values(11));
    v.clear().unwrap();
    assert!(v.all_zero().unwrap());
    assert!(v.is_non_negative().unwrap());
    assert_eq!(v.l2_norm().unwrap(), 0.0);
}
