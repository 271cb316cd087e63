use clap::Parser;
use eyre::Result;
use fibbench_core::{
    closed_form::{binet_error_analysis, fib_binet_f64, find_binet_accuracy_limit},
    fib_iterative, FibError,
};

const ROW_STEP: usize = 10;

#[derive(Parser)]
#[command(name = "binet-analysis", about = "Measure how far Binet's formula drifts from F(n)")]
pub struct BinetAnalysisCmd {
    #[arg(short, long, default_value_t = 100, help = "Largest index to analyse")]
    max_n: u64,
}

impl BinetAnalysisCmd {
    pub fn run(&self) -> Result<()> {
        println!("Binet formula accuracy, F(n) = (φ^n - ψ^n) / √5");
        println!();
        println!("| n | exact F(n) | Binet F(n) | abs error | rel error | exact |");
        println!("| --: | --: | --: | --: | --: | -- |");

        let mut first_error = None;
        for n in (0..=self.max_n).step_by(ROW_STEP) {
            let exact = fib_iterative(n);
            let binet = fib_binet_f64(n);
            match binet_error_analysis(n) {
                Ok((abs_error, rel_error)) => {
                    let marker = if abs_error == 0.0 {
                        "✓"
                    } else {
                        first_error.get_or_insert(n);
                        "✗"
                    };
                    println!(
                        "| {n} | {exact} | {binet:.2} | {abs_error:.2e} | {rel_error:.2e} | {marker} |"
                    );
                }
                Err(FibError::BinetOverflow { .. }) => {
                    first_error.get_or_insert(n);
                    println!("| {n} | {exact} | overflow | - | - | ✗ |");
                }
                Err(e) => return Err(e.into()),
            }
        }

        println!();
        println!("Binet formula is exact for n ≤ {}", find_binet_accuracy_limit());
        if let Some(n) = first_error {
            println!("First error observed at n = {n}");
        }
        Ok(())
    }
}
