//! # TapCounter Main Entry Point

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tapcounter::cmd_args::CommandLineArgs;
use tapcounter::config::AppConfig;
use tapcounter::AppController;
use tracing_subscriber::fmt::{time::ChronoLocal, writer::BoxMakeWriter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    let config = AppConfig::from_args(&cmd_args);

    init_tracing_subscriber(&config)?;
    tracing::debug!("configuration: {:?}", config);

    let mut app = AppController::new(&config)?;
    app.run()
}

/// Logs go to a file when one is configured; the UI owns the terminal
fn log_writer(config: &AppConfig) -> Result<BoxMakeWriter> {
    Ok(match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::sink),
    })
}

fn init_tracing_subscriber(config: &AppConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(log_writer(config)?)
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
