use std::mem;

use clap::Parser;
use eyre::Result;
use fibbench_core::{
    closed_form::{ratio_of, PHI},
    fib_iterative, BigUint,
};

#[derive(Parser)]
#[command(name = "sequence", about = "Print consecutive Fibonacci numbers")]
pub struct SequenceCmd {
    #[arg(short, long, default_value_t = 20, help = "How many numbers to print")]
    count: u64,

    #[arg(short, long, default_value_t = 0, help = "First index")]
    start: u64,
}

impl SequenceCmd {
    pub fn run(&self) -> Result<()> {
        if self.count == 0 {
            return Ok(());
        }
        let last = self.start.saturating_add(self.count - 1);
        println!("Fibonacci sequence F({}) to F({})", self.start, last);
        println!();

        let width = fib_iterative(last).to_string().len();
        for (n, value, prev) in sequence(self.start, last) {
            let ratio = match prev {
                Some(prev) if n > self.start => format!("{:.10}", ratio_of(&value, &prev)),
                _ => "-".to_string(),
            };
            println!("  F({n:4}) = {:>width$}    φ ≈ {ratio}", value.to_string());
        }

        println!();
        println!("φ (golden ratio) = {PHI}");
        Ok(())
    }
}

/// `(n, F(n), F(n-1))` for `n` in `start..=last`, walking the recurrence once.
fn sequence(start: u64, last: u64) -> impl Iterator<Item = (u64, BigUint, Option<BigUint>)> {
    let mut prev = (start > 0).then(|| fib_iterative(start - 1));
    let mut current = fib_iterative(start);
    (start..=last).map(move |n| {
        let item = (n, current.clone(), prev.clone());
        let next = match &prev {
            Some(p) => p + &current,
            None => BigUint::from(1u32),
        };
        prev = Some(mem::replace(&mut current, next));
        item
    })
}
