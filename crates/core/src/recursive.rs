//! Top-down recursive Fibonacci, naive and memoised.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::FibError;

/// Deepest index [`fib_recursive_memo`] recurses to.
pub const MEMO_DEPTH_LIMIT: u64 = 4096;

/// `F(n) = F(n-1) + F(n-2)` with no caching: `F(n)` calls in total.
pub fn fib_recursive(n: u64) -> BigUint {
    match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        _ => fib_recursive(n - 1) + fib_recursive(n - 2),
    }
}

/// The same recursion with every `F(k)` cached after its first evaluation.
///
/// Stack depth grows linearly with `n`; indices above [`MEMO_DEPTH_LIMIT`] fail with
/// [`FibError::RecursionLimit`].
pub fn fib_recursive_memo(n: u64) -> Result<BigUint, FibError> {
    if n > MEMO_DEPTH_LIMIT {
        return Err(FibError::RecursionLimit {
            n,
            limit: MEMO_DEPTH_LIMIT,
        });
    }
    let mut memo = vec![None; n as usize + 1];
    Ok(memoised(n, &mut memo))
}

fn memoised(n: u64, memo: &mut [Option<BigUint>]) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }
    if let Some(value) = &memo[n as usize] {
        return value.clone();
    }
    let value = memoised(n - 1, memo) + memoised(n - 2, memo);
    memo[n as usize] = Some(value.clone());
    value
}
