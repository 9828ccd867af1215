use serde::Serialize;

use super::engine::{GeodesicEngine, GeometryEngine};
use crate::domain::Ring;
use crate::error::AreaError;

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;
pub const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1_000_000.0;
/// Rounded from the international acre (4046.8564224 m²)
pub const SQUARE_METERS_PER_ACRE: f64 = 4046.86;

/// Multi-unit area report derived from a single raw magnitude
///
/// All fields are pure arithmetic over `square_meters`; there is no
/// rounding here, display precision belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaReport {
    pub square_meters: f64,
    pub hectares: f64,
    pub square_kilometers: f64,
    pub acres: f64,
}

impl AreaReport {
    fn from_square_meters(square_meters: f64) -> Self {
        Self {
            square_meters,
            hectares: square_meters / SQUARE_METERS_PER_HECTARE,
            square_kilometers: square_meters / SQUARE_METERS_PER_SQUARE_KILOMETER,
            acres: square_meters / SQUARE_METERS_PER_ACRE,
        }
    }
}

/// Validates a ring and converts its area into a multi-unit report
///
/// Owns the geometry engine it queries. The converter itself is stateless
/// and reentrant: every call is a total function of its inputs.
pub struct AreaConverter {
    engine: Box<dyn GeometryEngine>,
}

impl AreaConverter {
    /// Converter backed by the geodesic engine
    pub fn new() -> Self {
        Self::with_engine(Box::new(GeodesicEngine))
    }

    pub fn with_engine(engine: Box<dyn GeometryEngine>) -> Self {
        Self { engine }
    }

    /// Validate the ring, query the engine, and derive all unit fields
    ///
    /// Fails with [`AreaError::InvalidGeometry`] when the ring has fewer
    /// than 3 distinct points, and with [`AreaError::Computation`] when the
    /// engine errors or returns a non-finite or negative magnitude. No
    /// retries: a failure is surfaced immediately, never defaulted.
    pub fn compute_report(&self, ring: &Ring) -> Result<AreaReport, AreaError> {
        validate_ring(ring)?;
        let raw = self.engine.ring_area_m2(&ring.closed_coords())?;
        report_from_raw(ring, raw)
    }
}

impl Default for AreaConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation and unit conversion for an externally supplied raw area
pub fn report_from_raw(ring: &Ring, raw_m2: f64) -> Result<AreaReport, AreaError> {
    validate_ring(ring)?;

    if !raw_m2.is_finite() || raw_m2 < 0.0 {
        return Err(AreaError::Computation(format!(
            "geometry engine returned an unusable area: {raw_m2}"
        )));
    }

    Ok(AreaReport::from_square_meters(raw_m2))
}

fn validate_ring(ring: &Ring) -> Result<(), AreaError> {
    let distinct = ring.distinct_len();
    if distinct < 3 {
        return Err(AreaError::InvalidGeometry { distinct });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london_triangle() -> Ring {
        Ring::from_latlon(&[(51.509, -0.08), (51.503, -0.06), (51.51, -0.047)])
    }

    /// Engine stub with a fixed answer, for exercising the converter alone
    struct FixedEngine(Result<f64, AreaError>);

    impl GeometryEngine for FixedEngine {
        fn ring_area_m2(&self, _closed: &[[f64; 2]]) -> Result<f64, AreaError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_report_unit_conversions() {
        let report = report_from_raw(&london_triangle(), 2_000_000.0).unwrap();

        assert_eq!(report.square_meters, 2_000_000.0);
        assert_eq!(report.hectares, 200.0);
        assert_eq!(report.square_kilometers, 2.0);
        assert_eq!(report.acres, 2_000_000.0 / SQUARE_METERS_PER_ACRE);
        assert!((report.acres - 494.2103).abs() < 1e-4);
    }

    #[test]
    fn test_report_zero_area() {
        let report = report_from_raw(&london_triangle(), 0.0).unwrap();
        assert_eq!(report.square_meters, 0.0);
        assert_eq!(report.hectares, 0.0);
        assert_eq!(report.acres, 0.0);
    }

    #[test]
    fn test_two_point_ring_is_invalid() {
        let ring = Ring::from_latlon(&[(0.0, 0.0), (0.0, 1.0)]);
        let err = report_from_raw(&ring, 2_000_000.0).unwrap_err();
        assert_eq!(err, AreaError::InvalidGeometry { distinct: 2 });
    }

    #[test]
    fn test_closing_duplicate_does_not_validate_degenerate_ring() {
        // 2 distinct points plus an explicit closing duplicate
        let ring = Ring::from_latlon(&[(0.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
        assert!(matches!(
            report_from_raw(&ring, 1.0),
            Err(AreaError::InvalidGeometry { distinct: 2 })
        ));
    }

    #[test]
    fn test_nan_raw_area_is_computation_error() {
        let err = report_from_raw(&london_triangle(), f64::NAN).unwrap_err();
        assert!(matches!(err, AreaError::Computation(_)));
    }

    #[test]
    fn test_infinite_and_negative_raw_area() {
        assert!(matches!(
            report_from_raw(&london_triangle(), f64::INFINITY),
            Err(AreaError::Computation(_))
        ));
        assert!(matches!(
            report_from_raw(&london_triangle(), -1.0),
            Err(AreaError::Computation(_))
        ));
    }

    #[test]
    fn test_idempotent_reports() {
        let ring = london_triangle();
        let a = report_from_raw(&ring, 123_456.789).unwrap();
        let b = report_from_raw(&ring, 123_456.789).unwrap();

        assert_eq!(a.square_meters.to_bits(), b.square_meters.to_bits());
        assert_eq!(a.hectares.to_bits(), b.hectares.to_bits());
        assert_eq!(a.square_kilometers.to_bits(), b.square_kilometers.to_bits());
        assert_eq!(a.acres.to_bits(), b.acres.to_bits());
    }

    #[test]
    fn test_converter_surfaces_engine_failure() {
        let converter = AreaConverter::with_engine(Box::new(FixedEngine(Err(
            AreaError::Computation("engine unavailable".to_string()),
        ))));
        let err = converter.compute_report(&london_triangle()).unwrap_err();
        assert!(matches!(err, AreaError::Computation(_)));
    }

    #[test]
    fn test_converter_rejects_nan_from_engine() {
        let converter = AreaConverter::with_engine(Box::new(FixedEngine(Ok(f64::NAN))));
        let err = converter.compute_report(&london_triangle()).unwrap_err();
        assert!(matches!(err, AreaError::Computation(_)));
    }

    #[test]
    fn test_converter_validates_before_engine_call() {
        // An engine that would succeed must never see a degenerate ring
        let converter = AreaConverter::with_engine(Box::new(FixedEngine(Ok(1.0))));
        let ring = Ring::from_latlon(&[(0.0, 0.0), (0.0, 1.0)]);
        assert!(matches!(
            converter.compute_report(&ring),
            Err(AreaError::InvalidGeometry { distinct: 2 })
        ));
    }

    #[test]
    fn test_converter_with_geodesic_engine() {
        let converter = AreaConverter::new();
        let report = converter.compute_report(&london_triangle()).unwrap();

        assert!(report.square_meters > 0.0);
        assert!((report.hectares - report.square_meters / 10_000.0).abs() < 1e-9);
    }
}
