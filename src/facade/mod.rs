pub mod helper;

pub use helper::GeoJsonHelper;
