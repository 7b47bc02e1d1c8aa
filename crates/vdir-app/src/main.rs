use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vdir_core::config::load_config;
use vdir_rfc::rfc::vdir::EncoderOptions;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping warn");
    }

    let input = cli.command.read_input()?;
    let output = cli
        .command
        .convert(&input, EncoderOptions::from(&config.codec))
        .context("Conversion failed")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    if !output.ends_with('\n') {
        writeln!(stdout).context("Failed to write output")?;
    }
    Ok(())
}
