use std::time::{Duration, Instant};

use clap::Parser;
use eyre::Result;
use fibbench_core::{closed_form::find_binet_accuracy_limit, FibMethod, MemoryStats};
use fibbench_viz::demo::display_value;
use strum::IntoEnumIterator;

use crate::{config::FibBenchConfig, ALLOCATOR};

pub const DEFAULT_MAX_RECURSIVE: u64 = 30;

#[derive(Parser)]
#[command(name = "compare", about = "Run every algorithm once for the same n")]
pub struct CompareCmd {
    #[arg(short, long, help = "Fibonacci index")]
    n: u64,

    #[arg(
        long,
        default_value_t = DEFAULT_MAX_RECURSIVE,
        help = "Largest n for naive recursion; it is skipped above this"
    )]
    max_recursive: u64,
}

impl CompareCmd {
    pub fn run(&self, config: &FibBenchConfig) -> Result<()> {
        println!("Algorithm comparison for n = {}", self.n);
        println!();
        println!("| algorithm | complexity | result | time | allocations |");
        println!("| -- | -- | -- | --: | --: |");

        for (method, outcome) in compare_methods(self.n, self.max_recursive) {
            let (result, elapsed, memory) = match outcome {
                Outcome::Computed {
                    value,
                    elapsed,
                    memory,
                } => (
                    display_value(&value, config.display.truncate_digits),
                    format!("{:?}", elapsed),
                    format!("{} ({} B)", memory.allocations, memory.allocated_bytes),
                ),
                Outcome::Skipped(reason) | Outcome::Failed(reason) => {
                    (reason, "N/A".to_string(), "N/A".to_string())
                }
            };
            println!(
                "| {} | {} | {} | {} | {} |",
                method.name(),
                method.time_complexity(),
                result,
                elapsed,
                memory
            );
        }

        let limit = find_binet_accuracy_limit();
        if self.n > limit {
            println!();
            println!("Note: Binet formula loses precision for n > {limit}");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Computed {
        value: String,
        elapsed: Duration,
        memory: MemoryStats,
    },
    Skipped(String),
    Failed(String),
}

/// Computes `F(n)` with every method, timing each call and counting its
/// allocations. Exponential methods are skipped when `n > max_recursive`.
fn compare_methods(n: u64, max_recursive: u64) -> Vec<(FibMethod, Outcome)> {
    FibMethod::iter()
        .map(|method| {
            if method.is_exponential() && n > max_recursive {
                return (method, Outcome::Skipped(format!("skipped (n > {max_recursive})")));
            }
            let ((result, elapsed), memory) = ALLOCATOR.measure(|| {
                let start = Instant::now();
                let result = method.calculate(n);
                (result, start.elapsed())
            });
            let outcome = match result {
                Ok(value) => Outcome::Computed {
                    value: value.to_string(),
                    elapsed,
                    memory,
                },
                Err(e) => Outcome::Failed(e.to_string()),
            };
            (method, outcome)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(results: &[(FibMethod, Outcome)]) -> Vec<(FibMethod, String)> {
        results
            .iter()
            .filter_map(|(method, outcome)| match outcome {
                Outcome::Computed { value, .. } => Some((*method, value.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_exact_methods_agree() {
        let results = compare_methods(500, DEFAULT_MAX_RECURSIVE);
        let exact: Vec<_> = values(&results)
            .into_iter()
            .filter(|(method, _)| method.is_exact())
            .map(|(_, value)| value)
            .collect();
        assert_eq!(exact.len(), 5);
        assert!(exact.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_naive_recursion_skipped_above_limit() {
        let results = compare_methods(31, 30);
        assert_eq!(
            results[0],
            (
                FibMethod::Recursive,
                Outcome::Skipped("skipped (n > 30)".to_string())
            )
        );

        let results = compare_methods(20, 30);
        let computed = values(&results);
        assert_eq!(computed[0], (FibMethod::Recursive, "6765".to_string()));
        assert!(computed.iter().all(|(_, value)| value == "6765"));
    }

    #[test]
    fn test_allocations_are_counted() {
        let results = compare_methods(1000, 0);
        let (_, iterative) = results
            .iter()
            .find(|(method, _)| *method == FibMethod::Iterative)
            .unwrap();
        match iterative {
            Outcome::Computed { memory, .. } => {
                assert!(memory.allocations > 0);
                assert!(memory.allocated_bytes > 0);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_binet_overflow_is_reported() {
        let results = compare_methods(2000, DEFAULT_MAX_RECURSIVE);
        let (_, binet) = results
            .iter()
            .find(|(method, _)| *method == FibMethod::Binet)
            .unwrap();
        assert!(matches!(binet, Outcome::Failed(_)));
    }
}
