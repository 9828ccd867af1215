use geo::algorithm::geodesic_area::GeodesicArea;
use geo::{Coord, LineString, Polygon};

use crate::error::AreaError;

/// Boundary to the external geometry library
///
/// Implementations take a closed GeoJSON-style exterior ring ([lon, lat]
/// pairs, first = last) and return the enclosed area in square meters.
/// Calls are synchronous and deterministic; a failed or non-finite result
/// is the caller's problem to surface, never retried here.
pub trait GeometryEngine {
    fn ring_area_m2(&self, closed: &[[f64; 2]]) -> Result<f64, AreaError>;
}

/// Geodesic area on the WGS84 ellipsoid via the `geo` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicEngine;

impl GeometryEngine for GeodesicEngine {
    fn ring_area_m2(&self, closed: &[[f64; 2]]) -> Result<f64, AreaError> {
        let coords: Vec<Coord<f64>> = closed
            .iter()
            .map(|&[lon, lat]| Coord { x: lon, y: lat })
            .collect();

        let polygon = Polygon::new(LineString::from(coords), vec![]);
        Ok(polygon.geodesic_area_unsigned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geodesic_area_london_triangle() {
        // Triangle over central London, roughly 2.3km x 0.8km
        let closed = [
            [-0.08, 51.509],
            [-0.06, 51.503],
            [-0.047, 51.51],
            [-0.08, 51.509],
        ];

        let area = GeodesicEngine.ring_area_m2(&closed).unwrap();
        assert!(
            area > 700_000.0 && area < 1_000_000.0,
            "unexpected area: {area}"
        );
    }

    #[test]
    fn test_geodesic_area_winding_independent() {
        let cw = [
            [-0.08, 51.509],
            [-0.047, 51.51],
            [-0.06, 51.503],
            [-0.08, 51.509],
        ];
        let ccw = [
            [-0.08, 51.509],
            [-0.06, 51.503],
            [-0.047, 51.51],
            [-0.08, 51.509],
        ];

        let a = GeodesicEngine.ring_area_m2(&cw).unwrap();
        let b = GeodesicEngine.ring_area_m2(&ccw).unwrap();
        assert!((a - b).abs() < 1e-3);
        assert!(a > 0.0);
    }
}
