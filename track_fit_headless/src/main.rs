// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

mod output;

use algorithm::{DEFAULT_PRECISION_LEVEL, TrackOnSphere};
use clap::{Parser, ValueEnum};
use common::track_description::TrackDescription;
use output::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OutputFormat {
    Tcx,
    Csv,
}

/// Fits a recorded activity onto an oval running track.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Track description as JSON.
    #[arg(short, long)]
    track: PathBuf,
    /// Activity to fit, as TCX.
    #[arg(short, long, required_unless_present = "path_only")]
    input: Option<PathBuf>,
    /// Output file, stdout if not given.
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tcx)]
    format: OutputFormat,
    /// Track path resolution, 2^precision samples over both curves.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION_LEVEL)]
    precision: u32,
    /// Write only the sampled track path as CSV.
    #[arg(long)]
    path_only: bool,
}

fn read_file(path: &Path) -> Result<String, ()> {
    std::fs::read_to_string(path)
        .map_err(|e| error!("Failed to read {}. Error: {e}", path.display()))
}

fn load_track(path: &Path) -> Result<TrackOnSphere, ()> {
    let description = TrackDescription::from_json(&read_file(path)?)
        .map_err(|e| error!("Failed to parse track description. Error: {e}"))?;
    let track = TrackOnSphere::new(description)
        .map_err(|e| error!("Failed to build track. Error: {e}"))?;
    info!("Track loaded, lap length {:.2} m", track.lap_length_meters());
    Ok(track)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, ()> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .map_err(|e| error!("Failed to create {}. Error: {e}", path.display()))?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn write_path(cli: &Cli, track: &TrackOnSphere) -> Result<(), ()> {
    let records = path_records(track, cli.precision);
    debug!("Track path has {} points", records.len());
    write_csv(open_output(cli.output.as_deref())?, &records)
        .map_err(|e| error!("Failed to write track path. Error: {e}"))
}

fn fit_input(cli: &Cli, track: &TrackOnSphere, input: &Path) -> Result<(), ()> {
    let data = tcx::parse_tcx(&read_file(input)?)
        .map_err(|e| error!("Failed to parse {}. Error: {e}", input.display()))?;
    let fits = fit_activity(track, &data);
    info!(
        "Fitted {} of {} track points",
        fits.iter().flatten().count(),
        data.track_points.len()
    );

    let mut writer = open_output(cli.output.as_deref())?;
    match cli.format {
        OutputFormat::Tcx => {
            let fitted = fitted_tcx(&data, &fits, track.lap_length_meters());
            let content =
                tcx::write_tcx(&fitted).map_err(|e| error!("Failed to write TCX. Error: {e}"))?;
            writer
                .write_all(content.as_bytes())
                .and_then(|_| writer.flush())
                .map_err(|e| error!("Failed to write output. Error: {e}"))
        }
        OutputFormat::Csv => write_csv(writer, &fitted_records(&data, &fits))
            .map_err(|e| error!("Failed to write CSV. Error: {e}")),
    }
}

fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let track = load_track(&cli.track)?;
    if cli.path_only {
        return write_path(&cli, &track);
    }
    match &cli.input {
        Some(input) => fit_input(&cli, &track, input),
        None => {
            error!("No input activity given. Use --input or --path-only");
            Err(())
        }
    }
}

#[cfg(test)]
mod tests;
