//! Binet's closed form and golden-ratio helpers.
//!
//! These are `f64` approximations; they are used to study precision loss, never
//! as a source of exact values.

use std::mem;

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use crate::{error::FibError, iterative::fib_iterative};

/// The golden ratio `(1 + √5) / 2`.
pub const PHI: f64 = 1.618033988749895;
/// The conjugate root `(1 - √5) / 2`.
pub const PSI: f64 = -0.6180339887498949;
pub const SQRT_5: f64 = 2.23606797749979;

/// Binet's formula `(φⁿ - ψⁿ) / √5` evaluated in double precision.
pub fn fib_binet_f64(n: u64) -> f64 {
    let Ok(exp) = i32::try_from(n) else {
        return f64::INFINITY;
    };
    (PHI.powf(n as f64) - PSI.powi(exp)) / SQRT_5
}

/// Rounds the Binet approximation to the nearest integer.
///
/// Returns `None` once `φⁿ` leaves the finite `f64` range.
pub fn fib_binet_rounded(n: u64) -> Option<BigUint> {
    let approx = fib_binet_f64(n).round();
    if !approx.is_finite() {
        return None;
    }
    BigUint::from_f64(approx)
}

/// Smallest `n` whose Binet approximation no longer fits in an `f64`.
pub fn binet_overflow_index() -> u64 {
    (0..)
        .find(|&n| fib_binet_rounded(n).is_none())
        .unwrap_or(u64::MAX)
}

/// Absolute and relative error of the rounded Binet value against the exact `F(n)`.
///
/// The difference is taken between exact integers before converting to `f64`, so a
/// zero error really means the approximation is exact.
pub fn binet_error_analysis(n: u64) -> Result<(f64, f64), FibError> {
    let exact = fib_iterative(n);
    let approx = fib_binet_rounded(n).ok_or(FibError::BinetOverflow { n })?;
    Ok(error_against(&exact, &approx))
}

fn error_against(exact: &BigUint, approx: &BigUint) -> (f64, f64) {
    let diff = (BigInt::from(approx.clone()) - BigInt::from(exact.clone())).abs();
    let abs_error = diff.to_f64().unwrap_or(f64::INFINITY);
    let rel_error = if exact.is_zero() {
        if diff.is_zero() {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        abs_error / exact.to_f64().unwrap_or(f64::INFINITY)
    };
    (abs_error, rel_error)
}

/// Largest `n` such that the rounded Binet value is exact for every index `0..=n`.
pub fn find_binet_accuracy_limit() -> u64 {
    let mut current = BigUint::zero();
    let mut next = BigUint::from(1u32);
    let mut n = 0u64;
    loop {
        match fib_binet_rounded(n) {
            Some(approx) if approx == current => {}
            _ => return n.saturating_sub(1),
        }
        let sum = &current + &next;
        current = mem::replace(&mut next, sum);
        n += 1;
    }
}

/// Ratio `F(n+1) / F(n)` of consecutive terms; `∞` for `n = 0`.
pub fn fibonacci_ratio(n: u64) -> f64 {
    let denominator = fib_iterative(n);
    let numerator = fib_iterative(n + 1);
    ratio_of(&numerator, &denominator)
}

/// `numerator / denominator` as `f64`, accurate even when both exceed the `f64` range.
pub fn ratio_of(numerator: &BigUint, denominator: &BigUint) -> f64 {
    if denominator.is_zero() {
        return f64::INFINITY;
    }
    // keep both operands inside the f64 exponent range
    let shift = numerator.bits().saturating_sub(960);
    let numerator = numerator >> shift;
    let denominator = denominator >> shift;
    match (numerator.to_f64(), denominator.to_f64()) {
        (Some(num), Some(den)) if den != 0.0 => num / den,
        _ => f64::NAN,
    }
}
