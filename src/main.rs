use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};

use renko_lab::config::Config;
use renko_lab::data::load_candles_from_csv;
use renko_lab::output::write_json_lines;
use renko_lab::renko::{calculate_precursors_with, BrickSummary, RenkoChart};

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::from_env()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::try_new(&config.logging.level)
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            }),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        csv_path = %config.data.csv_path.display(),
        brick_size = config.renko.brick_size,
        window = config.precursor.window,
        squeeze_window = config.precursor.squeeze_window,
        "Starting renko-lab"
    );

    let candles = load_candles_from_csv(&config.data.csv_path)?;
    let mut chart = RenkoChart::new(config.renko.brick_size)?;
    let bricks = chart
        .process_data(&candles)
        .with_context(|| format!("failed to build bricks from {}", config.data.csv_path.display()))?;
    let annotated = calculate_precursors_with(bricks, &config.precursor);

    let written = match &config.data.output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_json_lines(BufWriter::new(file), &annotated)?
        }
        None => write_json_lines(BufWriter::new(io::stdout().lock()), &annotated)?,
    };

    let summary = BrickSummary::from_bricks(
        &annotated,
        config.signal.min_vol_lag,
        config.signal.min_squeeze,
    );
    tracing::info!(
        candles = candles.len(),
        bricks = summary.total,
        up = summary.up,
        down = summary.down,
        flips = summary.flips,
        longest_run = summary.longest_run,
        total_volume = summary.total_volume,
        high_energy = summary.high_energy,
        up_ratio = summary.up_ratio(),
        written,
        "Renko run complete"
    );
    Ok(())
}
