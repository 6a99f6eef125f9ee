// Example: sensitivity_chart.rs
// Sweeps one option input and writes an SVG chart plus a CSV of the samples.
//
// Usage:
//     cargo run --example sensitivity_chart -- [config.toml] [output_stem]
//
// Without a config file the reference session is used (ATM one-year call,
// volatility sweep). Outputs are written to <output_stem>.svg and
// <output_stem>.csv, defaulting to "sensitivity".

use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use option_sensitivity::{
    default_configs, evaluate_session, write_csv, write_svg, ChartStyle, SessionConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => SessionConfig::from_path(path)?,
        None => default_configs::reference(),
    };
    let stem = args.get(2).map(String::as_str).unwrap_or("sensitivity");

    config
        .constraints
        .check(&config.parameters)
        .context("session inputs violate the input constraints")?;

    let view = evaluate_session(&config)?;
    info!(
        parameter = view.result.varied.key(),
        samples = view.result.samples.len(),
        "sweep complete"
    );

    let svg_path = format!("{}.svg", stem);
    write_svg(&svg_path, &view.result, &ChartStyle::default())?;

    let csv_path = format!("{}.csv", stem);
    let file = File::create(&csv_path).with_context(|| format!("failed to create {}", csv_path))?;
    write_csv(&view.result, file)?;

    println!("{}", view.title);
    println!("{}", view.summary);
    println!("Chart saved to {}", svg_path);
    println!("Samples saved to {}", csv_path);
    Ok(())
}
