//! # fibbench-core
//!
//! Exact Fibonacci computation over [`num_bigint::BigUint`], plus the timing harness
//! and dataset generators used by the report.
//!
//! | Algorithm | Time Complexity | Exact |
//! |-----------|-----------------|-------|
//! | Recursive | O(2^n) | yes |
//! | Recursive memo | O(n) | yes, n <= 4096 |
//! | Iterative | O(n) | yes |
//! | Iterative branchless | O(n) | yes |
//! | Matrix | O(log n) | yes |
//! | Fast doubling | O(log n) | yes |
//! | Binet | O(1) | small n only |
//!
//! ```rust
//! use fibbench_core::{fib_iterative, fib_iterative_batch};
//!
//! assert_eq!(fib_iterative(20).to_string(), "6765");
//! let batch = fib_iterative_batch(&[0, 1, 2, 5, 10]);
//! assert_eq!(batch.iter().map(|v| v.to_string()).collect::<Vec<_>>(), ["0", "1", "1", "5", "55"]);
//! ```

pub mod bench;
pub mod closed_form;
pub mod dataset;
pub mod error;
pub mod input;
pub mod iterative;
pub mod matrix;
pub mod memory;
pub mod method;
pub mod recursive;

pub use bench::{compare_variants, speedup_ratio, BatchVariant, BenchmarkSample, DEFAULT_ITERATIONS};
pub use error::{FibError, InputError};
pub use input::{parse_index, parse_indices};
pub use iterative::{fib_iterative, fib_iterative_batch, fib_iterative_branchless};
pub use matrix::{fib_doubling, fib_matrix_fast, fib_matrix_modulo};
pub use memory::{MemoryStats, TrackingAllocator};
pub use method::FibMethod;
pub use recursive::{fib_recursive, fib_recursive_memo};
pub use num_bigint::BigUint;
