pub mod point;
pub mod ring;

pub use point::GeoPoint;
pub use ring::Ring;
