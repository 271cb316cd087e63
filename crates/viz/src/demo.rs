//! State of the interactive demo: a results table and a benchmark section.

use std::fmt::Write;

use fibbench_core::{
    compare_variants, fib_iterative_batch, parse_indices, BenchmarkSample, BigUint, FibError,
    DEFAULT_ITERATIONS,
};
use tracing::debug;

/// Values with more digits than this are shown abbreviated.
pub const DEFAULT_TRUNCATE_DIGITS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoAction {
    /// Compute and show the values of a comma-separated index list.
    Calculate(String),
    /// Time the SIMD and scalar batch paths over a comma-separated index list.
    Benchmark(String),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub n: u64,
    pub value: BigUint,
}

#[derive(Debug, Clone)]
pub struct DemoView {
    /// `None` while the results section is hidden.
    pub results: Option<Vec<ResultRow>>,
    /// `None` while the benchmark section is hidden.
    pub benchmark: Option<BenchmarkSample>,
    pub iterations: u32,
    pub truncate_digits: usize,
}

impl Default for DemoView {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS, DEFAULT_TRUNCATE_DIGITS)
    }
}

impl DemoView {
    pub fn new(iterations: u32, truncate_digits: usize) -> Self {
        Self {
            results: None,
            benchmark: None,
            iterations,
            truncate_digits,
        }
    }

    /// Applies one user action. On invalid input the view is left unchanged.
    pub fn apply(&mut self, action: DemoAction) -> Result<(), FibError> {
        match action {
            DemoAction::Calculate(input) => {
                let indices = parse_indices(&input)?;
                let values = fib_iterative_batch(&indices);
                debug!(count = indices.len(), "calculated batch");
                self.results = Some(
                    indices
                        .into_iter()
                        .zip(values)
                        .map(|(n, value)| ResultRow { n, value })
                        .collect(),
                );
            }
            DemoAction::Benchmark(input) => {
                let indices = parse_indices(&input)?;
                self.benchmark = Some(compare_variants(&indices, self.iterations)?);
            }
            DemoAction::Clear => self.clear(),
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.results = None;
        self.benchmark = None;
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_none() && self.benchmark.is_none()
    }

    /// Markdown rendering of the visible sections.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(rows) = &self.results {
            out.push_str("| Index (n) | F(n) |\n| --: | -- |\n");
            for row in rows {
                let _ = writeln!(
                    out,
                    "| {} | {} |",
                    row.n,
                    display_value(&row.value.to_string(), self.truncate_digits)
                );
            }
        }
        if let Some(sample) = &self.benchmark {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(out, "SIMD time:   {}", format_ms(sample.variant_a_ms));
            let _ = writeln!(out, "Scalar time: {}", format_ms(sample.variant_b_ms));
            let _ = writeln!(out, "Speedup:     {}", format_speedup(sample.speedup_ratio()));
        }
        out
    }
}

/// Keeps the first and last `max_digits / 2` digits of a long value.
pub fn display_value(value: &str, max_digits: usize) -> String {
    if value.len() <= max_digits {
        return value.to_string();
    }
    let half = max_digits / 2;
    format!("{}...{}", &value[..half], &value[value.len() - half..])
}

pub fn format_ms(ms: f64) -> String {
    format!("{:.3} ms", ms)
}

pub fn format_speedup(ratio: f64) -> String {
    format!("{:.2}x", ratio)
}
