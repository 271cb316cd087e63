use std::path::PathBuf;

use fibbench_core::{dataset::GenerateParams, DEFAULT_ITERATIONS};
use fibbench_viz::demo::DEFAULT_TRUNCATE_DIGITS;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./fibbench.toml";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_REPORT_PATH: &str = "./report.html";

/// Contents of `fibbench.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FibBenchConfig {
    pub bench: BenchConfig,
    pub generate: GenerateConfig,
    pub report: ReportConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub iterations: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub output_dir: PathBuf,
    #[serde(flatten)]
    pub params: GenerateParams,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_DATA_DIR),
            params: GenerateParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub data_dir: PathBuf,
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Values with more digits are abbreviated in tables.
    pub truncate_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            truncate_digits: DEFAULT_TRUNCATE_DIGITS,
        }
    }
}
