use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use isochron_app::cli::Args;
use isochron_app::render::Renderer;
use isochron_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let args = Args::parse();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping warn");
    }

    let renderer = Renderer::new(args.precision_or(config.output.precision), args.json);
    tracing::debug!(precision = %renderer.precision(), json = args.json, "Rendering values");

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let failures = if args.values.is_empty() {
        renderer.render_all(io::stdin().lock().lines(), &mut out, &mut err)?
    } else {
        renderer.render_all(args.values.into_iter().map(Ok), &mut out, &mut err)?
    };

    if failures > 0 {
        tracing::info!(failures, "Some values could not be re-rendered");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
