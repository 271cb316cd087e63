use std::{
    fmt::Display,
    fs::{create_dir_all, read_to_string, write},
    path::Path,
};

use anstyle::{AnsiColor, Effects, Style};
use eyre::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{info, Level};
use tracing_forest::ForestLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::FibBenchConfig;

pub(crate) const GREEN: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
pub(crate) const YELLOW: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

pub(crate) fn write_status(style: &dyn Display, status: &str, msg: &str) {
    println!("{style}{status:>12}{style:#} {msg}");
}

pub(crate) fn read_to_struct_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let toml = read_to_string(path)?;
    let ret = toml::from_str(&toml).with_context(|| format!("invalid config {:?}", path))?;
    Ok(ret)
}

pub fn read_config_toml_or_default(config: &Path) -> Result<FibBenchConfig> {
    if config.exists() {
        read_to_struct_toml(config)
    } else {
        info!("{:?} not found, using default configuration", config);
        Ok(FibBenchConfig::default())
    }
}

/// Writes `contents` to `path`, creating missing parent directories.
pub(crate) fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    write(path, contents).with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}

pub fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .try_init();
}
