use std::time::{Duration, Instant};

use clap::Parser;
use eyre::Result;
use fibbench_core::{fib_matrix_modulo, FibMethod};

use crate::util::{write_status, GREEN, YELLOW};

/// Naive recursion above this index takes seconds or more.
const SLOW_RECURSION_N: u64 = 35;

#[derive(Parser)]
#[command(name = "calc", about = "Calculate F(n) with a chosen algorithm")]
pub struct CalcCmd {
    #[arg(short, long, help = "Fibonacci index")]
    n: u64,

    #[arg(
        short,
        long,
        default_value = "iterative",
        help = "Algorithm: recursive, recursive_memo, iterative, iterative_branchless, matrix, fast_doubling or binet"
    )]
    method: FibMethod,

    #[arg(
        long,
        conflicts_with = "method",
        help = "Print F(n) mod this value, computed by modular matrix exponentiation"
    )]
    modulo: Option<u64>,

    #[arg(short, long, help = "Print the elapsed time")]
    time: bool,
}

impl CalcCmd {
    pub fn run(&self) -> Result<()> {
        if let Some(modulus) = self.modulo {
            let start = Instant::now();
            let value = fib_matrix_modulo(self.n, modulus)?;
            let elapsed = start.elapsed();
            println!("F({}) mod {} = {}", self.n, modulus, value);
            self.report_time("matrix_modulo", elapsed);
            return Ok(());
        }

        if self.method.is_exponential() && self.n > SLOW_RECURSION_N {
            write_status(
                &YELLOW,
                "Warning",
                &format!(
                    "{} is extremely slow for n > {SLOW_RECURSION_N}",
                    self.method.name()
                ),
            );
        }

        let start = Instant::now();
        let value = self.method.calculate(self.n)?;
        let elapsed = start.elapsed();

        println!("F({}) = {}", self.n, value);
        self.report_time(self.method.name(), elapsed);
        Ok(())
    }

    fn report_time(&self, name: &str, elapsed: Duration) {
        if self.time {
            write_status(&GREEN, "Computed", &format!("with {name} in {elapsed:?}"));
        }
    }
}
