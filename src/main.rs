// src/main.rs
//! NMEA Route - load an NMEA log, summarise it and export the route

use anyhow::Context;
use clap::Parser;
use nmea_route::{
    config::RouteConfig,
    display::TerminalDisplay,
    export::{ExportFormat, RouteExporter},
    load_route,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nmea-route")]
#[command(about = "Extract a route from a log of NMEA sentences", long_about = None)]
struct Args {
    /// Log file of NMEA sentences
    #[arg(value_name = "LOG")]
    log: PathBuf,

    /// Export format: gpx, geojson or csv
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Write the route to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave elevation out of the export
    #[arg(long, default_value_t = false)]
    no_elevation: bool,

    /// Drop sentences that yielded no position
    #[arg(long, default_value_t = false)]
    skip_zero: bool,

    /// Track name written to the export
    #[arg(long)]
    name: Option<String>,

    /// Remember the format and name as defaults
    #[arg(long, default_value_t = false)]
    save_config: bool,

    /// Log every dropped sentence
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut config = RouteConfig::load().unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        RouteConfig::default()
    });
    if let Some(format) = args.format {
        config.update_format(format);
    }
    if let Some(name) = args.name.clone() {
        config.update_track_name(name);
    }
    if args.no_elevation {
        config.include_elevation = false;
    }
    if args.skip_zero {
        config.skip_zero_positions = true;
    }
    if args.save_config {
        config.save().context("Failed to save configuration")?;
    }

    let route = load_route(&args.log)
        .with_context(|| format!("Failed to read NMEA log {}", args.log.display()))?;

    TerminalDisplay::new().render(&mut std::io::stdout(), &args.log.display().to_string(), &route)?;

    if let Some(output) = args.output {
        let positions = if config.skip_zero_positions {
            route.fixes()
        } else {
            route.positions
        };

        RouteExporter::new(config.track_name.clone(), positions)
            .with_elevation(config.include_elevation)
            .export_to_file(&output, config.export_format)
            .with_context(|| format!("Failed to export route to {}", output.display()))?;

        println!(
            "Exported {} to {}",
            config.export_format.display_name(),
            output.display()
        );
    }

    Ok(())
}
