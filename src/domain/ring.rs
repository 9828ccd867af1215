use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// An ordered polygon boundary in WGS84 coordinates
///
/// Points are stored exactly as supplied by the editor; closing for the
/// geometry engine happens on demand in [`Ring::closed_coords`]. A ring
/// needs at least 3 distinct points to describe a polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<GeoPoint>,
}

impl Ring {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Build a ring from (lat, lon) pairs
    pub fn from_latlon(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&p| GeoPoint::from(p)).collect())
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first and last stored points already coincide
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => first.coincides_with(last),
            _ => false,
        }
    }

    /// Number of distinct points, ignoring an explicit closing duplicate
    ///
    /// Editors disagree on whether the boundary they hand over repeats the
    /// first point at the end, so validity is judged on distinct points only.
    pub fn distinct_len(&self) -> usize {
        let mut distinct: Vec<&GeoPoint> = Vec::with_capacity(self.points.len());
        for point in &self.points {
            if !distinct.iter().any(|seen| seen.coincides_with(point)) {
                distinct.push(point);
            }
        }
        distinct.len()
    }

    /// GeoJSON-style exterior ring: [lon, lat] pairs, first = last
    ///
    /// Appends the first point only when the ring is not already closed,
    /// so a pre-closed ring is never double-closed.
    pub fn closed_coords(&self) -> Vec<[f64; 2]> {
        let mut coords: Vec<[f64; 2]> = self.points.iter().map(|p| [p.lon, p.lat]).collect();
        if !self.is_closed()
            && let Some(&first) = coords.first()
        {
            coords.push(first);
        }
        coords
    }
}
