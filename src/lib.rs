//! areal - Report the area of a geographic polygon in multiple units

pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod session;
