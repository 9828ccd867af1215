use thiserror::Error;

/// Errors produced while turning a ring into an area report
///
/// Both kinds are non-fatal: a caller keeps its previous report (or a
/// placeholder) and surfaces the message to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    /// The ring does not describe a polygon
    #[error("invalid geometry: ring has {distinct} distinct points, need at least 3")]
    InvalidGeometry { distinct: usize },

    /// The geometry engine failed or returned an unusable value
    #[error("area computation failed: {0}")]
    Computation(String),
}

/// Errors found by the startup configuration check
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial ring point {index} is out of range: ({lat}, {lon})")]
    PointOutOfRange { index: usize, lat: f64, lon: f64 },

    #[error("initial ring has {distinct} distinct points, need at least 3")]
    DegenerateInitialRing { distinct: usize },
}
