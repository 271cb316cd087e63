use num_bigint::BigUint;
use strum::{Display, EnumIter, EnumString};

use crate::{
    closed_form::fib_binet_rounded,
    error::FibError,
    iterative::{fib_iterative, fib_iterative_branchless},
    matrix::{fib_doubling, fib_matrix_fast},
    recursive::{fib_recursive, fib_recursive_memo},
};

/// Algorithms available for computing a single Fibonacci number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FibMethod {
    /// Naive recursion, O(2^n) calls
    Recursive,
    /// Recursion with a cache of computed terms
    #[strum(to_string = "recursive_memo", serialize = "memo")]
    RecursiveMemo,
    /// Pairwise accumulation, O(n) additions
    Iterative,
    /// Pairwise accumulation without small-n special cases
    #[strum(to_string = "iterative_branchless", serialize = "branchless")]
    IterativeBranchless,
    /// Q-matrix exponentiation, O(log n) multiplications
    Matrix,
    /// Fast doubling, O(log n) multiplications
    #[strum(to_string = "fast_doubling", serialize = "doubling")]
    FastDoubling,
    /// Rounded closed form, exact for small n only
    #[strum(to_string = "binet", serialize = "closed_form")]
    Binet,
}

impl FibMethod {
    pub fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        match self {
            FibMethod::Recursive => Ok(fib_recursive(n)),
            FibMethod::RecursiveMemo => fib_recursive_memo(n),
            FibMethod::Iterative => Ok(fib_iterative(n)),
            FibMethod::IterativeBranchless => Ok(fib_iterative_branchless(n)),
            FibMethod::Matrix => Ok(fib_matrix_fast(n)),
            FibMethod::FastDoubling => Ok(fib_doubling(n)),
            FibMethod::Binet => fib_binet_rounded(n).ok_or(FibError::BinetOverflow { n }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FibMethod::Recursive => "recursive",
            FibMethod::RecursiveMemo => "recursive_memo",
            FibMethod::Iterative => "iterative",
            FibMethod::IterativeBranchless => "iterative_branchless",
            FibMethod::Matrix => "matrix",
            FibMethod::FastDoubling => "fast_doubling",
            FibMethod::Binet => "binet",
        }
    }

    pub fn time_complexity(&self) -> &'static str {
        match self {
            FibMethod::Recursive => "O(2^n)",
            FibMethod::RecursiveMemo | FibMethod::Iterative | FibMethod::IterativeBranchless => {
                "O(n)"
            }
            FibMethod::Matrix | FibMethod::FastDoubling => "O(log n)",
            FibMethod::Binet => "O(1)",
        }
    }

    pub fn space_complexity(&self) -> &'static str {
        match self {
            FibMethod::Recursive | FibMethod::RecursiveMemo => "O(n)",
            _ => "O(1)",
        }
    }

    /// Whether the running time grows exponentially, making large `n` impractical.
    pub fn is_exponential(&self) -> bool {
        matches!(self, FibMethod::Recursive)
    }

    /// Whether results are exact for every index.
    pub fn is_exact(&self) -> bool {
        !matches!(self, FibMethod::Binet)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test_case("recursive", FibMethod::Recursive)]
    #[test_case("recursive_memo", FibMethod::RecursiveMemo)]
    #[test_case("memo", FibMethod::RecursiveMemo)]
    #[test_case("iterative", FibMethod::Iterative)]
    #[test_case("Branchless", FibMethod::IterativeBranchless)]
    #[test_case("Matrix", FibMethod::Matrix)]
    #[test_case("fast_doubling", FibMethod::FastDoubling)]
    #[test_case("doubling", FibMethod::FastDoubling)]
    #[test_case("BINET", FibMethod::Binet)]
    #[test_case("closed_form", FibMethod::Binet)]
    fn test_parse_method(s: &str, expected: FibMethod) {
        assert_eq!(s.parse::<FibMethod>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!("bogosort".parse::<FibMethod>().is_err());
        assert!("".parse::<FibMethod>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        for method in FibMethod::iter() {
            assert_eq!(method.to_string(), method.name());
            assert_eq!(method.name().parse::<FibMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_all_methods_agree() {
        for method in FibMethod::iter() {
            assert_eq!(method.calculate(10).unwrap(), BigUint::from(55u32));
            assert_eq!(method.calculate(20).unwrap(), fib_iterative(20));
        }
        assert_eq!(FibMethod::Iterative.time_complexity(), "O(n)");
        assert_eq!(FibMethod::Recursive.time_complexity(), "O(2^n)");
        assert_eq!(FibMethod::RecursiveMemo.space_complexity(), "O(n)");
        assert_eq!(FibMethod::iter().filter(FibMethod::is_exponential).count(), 1);
    }

    #[test]
    fn test_binet_overflow() {
        assert!(FibMethod::Binet.calculate(5000).is_err());
        assert!(FibMethod::Matrix.calculate(5000).is_ok());
        assert!(matches!(
            FibMethod::RecursiveMemo.calculate(5000),
            Err(FibError::RecursionLimit { .. })
        ));
    }
}
