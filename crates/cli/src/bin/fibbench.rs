use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use fibbench_cli::{
    commands::*,
    config::DEFAULT_CONFIG_PATH,
    util::{read_config_toml_or_default, setup_tracing_with_log_level},
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "fibbench", author, version, about = "Fibonacci benchmarks, reports and demo", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH, help = "Path to the fibbench.toml config file")]
    config: PathBuf,

    #[arg(long, global = true, default_value = "warn", help = "Default log level, overridden by RUST_LOG")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Calc(CalcCmd),
    Sequence(SequenceCmd),
    Compare(CompareCmd),
    BinetAnalysis(BinetAnalysisCmd),
    Info(InfoCmd),
    Generate(GenerateCmd),
    Report(ReportCmd),
    Bench(BenchCmd),
    Demo(DemoCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing_with_log_level(cli.log_level);
    let config = read_config_toml_or_default(&cli.config)?;
    match cli.command {
        Commands::Calc(cmd) => cmd.run(),
        Commands::Sequence(cmd) => cmd.run(),
        Commands::Compare(cmd) => cmd.run(&config),
        Commands::BinetAnalysis(cmd) => cmd.run(),
        Commands::Info(cmd) => cmd.run(),
        Commands::Generate(cmd) => tokio::task::spawn_blocking(move || cmd.run(&config)).await?,
        Commands::Report(cmd) => cmd.run(&config).await,
        Commands::Bench(cmd) => tokio::task::spawn_blocking(move || cmd.run(&config)).await?,
        Commands::Demo(cmd) => tokio::task::spawn_blocking(move || cmd.run(&config)).await?,
    }
}
