use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{GeoPoint, Ring};
use crate::error::ConfigError;

fn default_initial_ring() -> Vec<[f64; 2]> {
    // Triangle over central London
    vec![[51.509, -0.08], [51.503, -0.06], [51.51, -0.047]]
}

fn default_verbose() -> bool {
    false
}

/// Optional TOML configuration
///
/// Raw, as read from disk; [`FileConfig::validate`] turns it into a
/// checked [`RunConfig`] at startup.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Initial polygon as [lat, lon] pairs
    #[serde(default = "default_initial_ring")]
    pub initial_ring: Vec<[f64; 2]>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Decimal places for the report display (overrides the per-unit defaults)
    #[serde(default)]
    pub precision: Option<u8>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            initial_ring: default_initial_ring(),
            verbose: default_verbose(),
            precision: None,
        }
    }
}

/// Configuration after the startup check has passed
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub initial_ring: Ring,
    pub verbose: bool,
    pub precision: Option<u8>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Startup check: reject out-of-range coordinates and degenerate rings
    pub fn validate(&self) -> Result<RunConfig, ConfigError> {
        let points: Vec<GeoPoint> = self
            .initial_ring
            .iter()
            .map(|&[lat, lon]| GeoPoint::new(lat, lon))
            .collect();

        for (index, point) in points.iter().enumerate() {
            if !point.is_valid() {
                return Err(ConfigError::PointOutOfRange {
                    index,
                    lat: point.lat,
                    lon: point.lon,
                });
            }
        }

        let ring = Ring::new(points);
        let distinct = ring.distinct_len();
        if distinct < 3 {
            return Err(ConfigError::DegenerateInitialRing { distinct });
        }

        Ok(RunConfig {
            initial_ring: ring,
            verbose: self.verbose,
            precision: self.precision,
        })
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("areal.toml"));
    paths.push(PathBuf::from(".areal.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("areal").join("config.toml"));
        paths.push(config_dir.join("areal.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".areal.toml"));
        paths.push(home.join(".config").join("areal").join("config.toml"));
    }

    paths
}
