//! Logarithmic-time Fibonacci via the Q-matrix and fast doubling.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::FibError;

type Matrix = [[BigUint; 2]; 2];

fn identity() -> Matrix {
    [
        [BigUint::one(), BigUint::zero()],
        [BigUint::zero(), BigUint::one()],
    ]
}

fn q_matrix() -> Matrix {
    [
        [BigUint::one(), BigUint::one()],
        [BigUint::one(), BigUint::zero()],
    ]
}

fn mat_mul(a: &Matrix, b: &Matrix) -> Matrix {
    [
        [
            &a[0][0] * &b[0][0] + &a[0][1] * &b[1][0],
            &a[0][0] * &b[0][1] + &a[0][1] * &b[1][1],
        ],
        [
            &a[1][0] * &b[0][0] + &a[1][1] * &b[1][0],
            &a[1][0] * &b[0][1] + &a[1][1] * &b[1][1],
        ],
    ]
}

/// Computes `F(n)` as the off-diagonal entry of `[[1, 1], [1, 0]]^n`,
/// using square-and-multiply.
pub fn fib_matrix_fast(n: u64) -> BigUint {
    let mut result = identity();
    let mut base = q_matrix();
    let mut exp = n;
    while exp > 0 {
        if exp.is_odd() {
            result = mat_mul(&result, &base);
        }
        exp >>= 1;
        if exp > 0 {
            base = mat_mul(&base, &base);
        }
    }
    // Q^n = [[F(n+1), F(n)], [F(n), F(n-1)]]
    let [[_, fib_n], _] = result;
    fib_n
}

/// `F(n) mod modulus` by square-and-multiply on the Q-matrix with every entry
/// reduced, so arbitrarily large `n` runs in fixed-width arithmetic.
pub fn fib_matrix_modulo(n: u64, modulus: u64) -> Result<u64, FibError> {
    if modulus == 0 {
        return Err(FibError::ZeroModulus);
    }
    let m = u128::from(modulus);
    // entries stay below m < 2^64, so each product fits in u128 before reduction
    let mul = |a: &[[u128; 2]; 2], b: &[[u128; 2]; 2]| {
        let dot = |i: usize, j: usize| (a[i][0] * b[0][j] % m + a[i][1] * b[1][j] % m) % m;
        [[dot(0, 0), dot(0, 1)], [dot(1, 0), dot(1, 1)]]
    };

    let mut result = [[1 % m, 0], [0, 1 % m]];
    let mut base = [[1 % m, 1 % m], [1 % m, 0]];
    let mut exp = n;
    while exp > 0 {
        if exp.is_odd() {
            result = mul(&result, &base);
        }
        exp >>= 1;
        if exp > 0 {
            base = mul(&base, &base);
        }
    }
    Ok(result[0][1] as u64)
}

/// Fast doubling, walking the bits of `n` from the most significant one:
///
/// `F(2k) = F(k) * (2 F(k+1) - F(k))` and `F(2k+1) = F(k)^2 + F(k+1)^2`.
pub fn fib_doubling(n: u64) -> BigUint {
    let mut a = BigUint::zero(); // F(k)
    let mut b = BigUint::one(); // F(k+1)
    let bits = u64::BITS - n.leading_zeros();
    for i in (0..bits).rev() {
        let c = &a * ((&b + &b) - &a);
        let d = &a * &a + &b * &b;
        if (n >> i).is_even() {
            a = c;
            b = d;
        } else {
            b = &c + &d;
            a = d;
        }
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterative::fib_iterative;

    #[test]
    fn test_matrix_matches_iterative() {
        for n in 0..=200 {
            assert_eq!(fib_matrix_fast(n), fib_iterative(n), "matrix failed at n={n}");
        }
    }

    #[test]
    fn test_doubling_matches_iterative() {
        for n in 0..=200 {
            assert_eq!(fib_doubling(n), fib_iterative(n), "doubling failed at n={n}");
        }
    }

    #[test]
    fn test_modulo_matches_exact_residue() {
        let modulus = 1_000_000_007u64;
        for n in [0, 1, 2, 10, 93, 100, 1000] {
            let expected = fib_iterative(n) % BigUint::from(modulus);
            assert_eq!(
                BigUint::from(fib_matrix_modulo(n, modulus).unwrap()),
                expected,
                "modulo failed at n={n}"
            );
        }
    }

    #[test]
    fn test_modulo_edge_cases() {
        assert!(matches!(fib_matrix_modulo(10, 0), Err(FibError::ZeroModulus)));
        assert_eq!(fib_matrix_modulo(10, 1).unwrap(), 0);
        // Pisano period of 10 is 60
        assert_eq!(fib_matrix_modulo(60 * 1_000_000_000 + 7, 10).unwrap(), 3);
        let big = u64::MAX - 58;
        let expected = fib_iterative(300) % BigUint::from(big);
        assert_eq!(BigUint::from(fib_matrix_modulo(300, big).unwrap()), expected);
    }

    #[test]
    fn test_large_index_agreement() {
        let expected = fib_iterative(5000);
        assert_eq!(fib_matrix_fast(5000), expected);
        assert_eq!(fib_doubling(5000), expected);
    }
}
