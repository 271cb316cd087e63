use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use fibbench_core::dataset::generate_all;

use crate::{
    config::FibBenchConfig,
    util::{write_status, GREEN},
};

#[derive(Parser)]
#[command(name = "generate", about = "Write the CSV datasets read by `report`")]
pub struct GenerateCmd {
    #[arg(long, help = "Directory for the CSV files [default: ./data]")]
    output_dir: Option<PathBuf>,
}

impl GenerateCmd {
    pub fn run(&self, config: &FibBenchConfig) -> Result<()> {
        let output_dir = self
            .output_dir
            .as_ref()
            .unwrap_or(&config.generate.output_dir);
        let written = generate_all(output_dir, &config.generate.params)?;
        for path in written {
            write_status(&GREEN, "Wrote", &path.display().to_string());
        }
        Ok(())
    }
}
