//! Minimal GeoJSON polygon input
//!
//! Reads the exterior ring of a Polygon geometry, either bare or wrapped
//! in a Feature. Holes and other geometry types are out of scope.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use crate::domain::{GeoPoint, Ring};

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeoJsonDocument {
    Feature { geometry: Geometry },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// Parse a ring from a GeoJSON string
///
/// Coordinates follow the GeoJSON convention: [longitude, latitude], with
/// the exterior ring usually pre-closed (first point repeated as last).
/// The closing duplicate is dropped here; [`Ring::closed_coords`] re-closes
/// on demand, so a pre-closed input never gains a second duplicate.
pub fn ring_from_str(input: &str) -> Result<Ring> {
    let document: GeoJsonDocument =
        serde_json::from_str(input).context("Failed to parse GeoJSON document")?;

    let coordinates = match document {
        GeoJsonDocument::Feature {
            geometry: Geometry::Polygon { coordinates },
        } => coordinates,
        GeoJsonDocument::Polygon { coordinates } => coordinates,
    };

    let exterior = match coordinates.first() {
        Some(ring) if !ring.is_empty() => ring,
        _ => bail!("GeoJSON polygon has no exterior ring"),
    };

    let mut points: Vec<GeoPoint> = exterior
        .iter()
        .map(|&[lon, lat]| GeoPoint::new(lat, lon))
        .collect();

    // Drop the closing duplicate if present
    if points.len() >= 2
        && let (Some(first), Some(last)) = (points.first().copied(), points.last().copied())
        && first.coincides_with(&last)
    {
        points.pop();
    }

    for (i, point) in points.iter().enumerate() {
        if !point.is_valid() {
            bail!(
                "Point {} is out of range: latitude {}, longitude {}",
                i,
                point.lat,
                point.lon
            );
        }
    }

    Ok(Ring::new(points))
}

/// Read a ring from a GeoJSON file
pub fn ring_from_path(path: &Path) -> Result<Ring> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    ring_from_str(&contents)
}
