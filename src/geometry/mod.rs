pub mod area;
pub mod engine;

pub use area::{AreaConverter, AreaReport, report_from_raw};
pub use engine::{GeodesicEngine, GeometryEngine};
