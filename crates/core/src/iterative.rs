//! Linear-time Fibonacci over arbitrary-precision integers.

use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `F(n)` by iterating the pair `(F(k-1), F(k))` from `(0, 1)`.
///
/// Runs `n - 1` big-integer additions; every intermediate value is exact.
pub fn fib_iterative(n: u64) -> BigUint {
    match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        _ => {
            let mut a = BigUint::zero();
            let mut b = BigUint::one();
            for _ in 2..=n {
                let next = &a + &b;
                a = mem::replace(&mut b, next);
            }
            b
        }
    }
}

/// Same recurrence without special-casing small `n`: the pair is advanced
/// exactly `n` times and the loop body never branches on the index.
pub fn fib_iterative_branchless(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = mem::replace(&mut b, next);
    }
    a
}

/// Computes each index independently, preserving input order.
pub fn fib_iterative_batch(indices: &[u64]) -> Vec<BigUint> {
    indices.iter().map(|&n| fib_iterative(n)).collect()
}
