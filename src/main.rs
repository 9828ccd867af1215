use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

mod config;
mod display;
mod domain;
mod error;
mod geojson;
mod geometry;
mod session;

use config::FileConfig;
use domain::Ring;
use geometry::AreaConverter;
use session::{EditorSession, SessionEvent};

/// Report the area of a geographic polygon in multiple units
///
/// Examples:
///   # Report the area of a polygon stored as GeoJSON
///   areal -i field.geojson
///
///   # Inline ring as lat,lon pairs
///   areal -p "51.509,-0.08;51.503,-0.06;51.51,-0.047"
///
///   # Use the initial ring from a config file
///   areal --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "areal")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches areal.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// GeoJSON file containing the polygon (Feature or bare Polygon)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Inline ring as "lat,lon;lat,lon;..." (at least 3 points)
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    points: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let run_config = file_config
        .unwrap_or_default()
        .validate()
        .context("Configuration failed the startup check")?;
    let verbose = args.verbose || run_config.verbose;

    let ring = if let Some(ref input) = args.input {
        geojson::ring_from_path(input)?
    } else if let Some(ref points) = args.points {
        parse_points(points)?
    } else {
        run_config.initial_ring.clone()
    };

    println!("areal - Polygon Area Report");
    println!("===========================");
    println!();

    if verbose {
        println!("Ring:");
        println!("  Points: {}", ring.len());
        println!("  Distinct points: {}", ring.distinct_len());
        println!(
            "  Closed on input: {}",
            if ring.is_closed() { "yes" } else { "no" }
        );
        println!();
    }

    let mut session = EditorSession::new(ring, AreaConverter::new());
    match session.refresh() {
        SessionEvent::Report(report) => {
            println!(
                "{}",
                display::format_report_with_precision(&report, run_config.precision)
            );
            Ok(())
        }
        SessionEvent::Degraded { message, .. } => bail!("{message}"),
    }
}

/// Parse an inline ring: semicolon-separated "lat,lon" pairs
fn parse_points(input: &str) -> Result<Ring> {
    let mut points = Vec::new();

    for (i, pair) in input.split(';').enumerate() {
        let mut parts = pair.splitn(2, ',');
        let (lat_str, lon_str) = match (parts.next(), parts.next()) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => bail!("Point {} is not a lat,lon pair: {:?}", i, pair),
        };

        let lat: f64 = lat_str
            .trim()
            .parse()
            .context(format!("Invalid latitude in point {}: {:?}", i, lat_str))?;
        let lon: f64 = lon_str
            .trim()
            .parse()
            .context(format!("Invalid longitude in point {}: {:?}", i, lon_str))?;

        if !domain::GeoPoint::new(lat, lon).is_valid() {
            bail!(
                "Point {} is out of range: latitude {}, longitude {}",
                i,
                lat,
                lon
            );
        }

        points.push((lat, lon));
    }

    Ok(Ring::from_latlon(&points))
}
