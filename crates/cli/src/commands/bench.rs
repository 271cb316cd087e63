use std::path::PathBuf;

use clap::Parser;
use eyre::{eyre, Result};
use fibbench_core::FibError;
use fibbench_viz::{speedup_bar_chart, DemoAction, DemoView};
use tracing::debug;

use crate::{
    config::FibBenchConfig,
    util::{write_output, write_status, GREEN},
};

pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid Fibonacci indices";

const CHART_WIDTH: u32 = 400;

#[derive(Clone, Parser)]
#[command(name = "bench", about = "Time the SIMD and scalar batch paths")]
pub struct BenchCmd {
    #[arg(long, help = "Comma-separated Fibonacci indices, e.g. \"10, 50, 100\"")]
    indices: String,

    #[arg(long, help = "Timed runs per variant [default: 100]")]
    iterations: Option<u32>,

    #[arg(long, help = "Write the speedup bar chart as SVG to this file")]
    chart: Option<PathBuf>,
}

impl BenchCmd {
    pub fn run(&self, config: &FibBenchConfig) -> Result<()> {
        let iterations = self.iterations.unwrap_or(config.bench.iterations);
        let mut view = DemoView::new(iterations, config.display.truncate_digits);
        apply(&mut view, DemoAction::Benchmark(self.indices.clone()))?;
        print!("{}", view.render_text());

        if let (Some(path), Some(sample)) = (&self.chart, &view.benchmark) {
            write_output(path, speedup_bar_chart(sample, CHART_WIDTH))?;
            write_status(&GREEN, "Wrote", &path.display().to_string());
        }
        Ok(())
    }
}

/// Applies `action`, replacing an input error with the message shown to users.
pub(crate) fn apply(view: &mut DemoView, action: DemoAction) -> Result<()> {
    match view.apply(action) {
        Ok(()) => Ok(()),
        Err(FibError::InvalidInput(e)) => {
            debug!("rejected input: {e}");
            Err(eyre!(INVALID_INPUT_MESSAGE))
        }
        Err(e) => Err(e.into()),
    }
}
