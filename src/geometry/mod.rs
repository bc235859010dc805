//! GeoJSON geometry to Well-Known-Text
//!
//! The WKT produced here is bound together with the SRID as the two
//! arguments of `ST_GeomFromText(?, ?)`.

mod writer;

pub use writer::WktText;

use crate::core::{GeoSqlError, Result};
use geojson::GeoJson;

/// Translate a serialized GeoJSON geometry into WKT.
///
/// Anything that does not yield a geometry (malformed text, `{}`, a Feature
/// instead of a geometry, an unconvertible geometry) is an
/// [`GeoSqlError::InvalidGeometry`].
pub fn to_wkt(geometry_json: &str) -> Result<String> {
    let geojson: GeoJson = geometry_json
        .parse()
        .map_err(|e: geojson::Error| GeoSqlError::InvalidGeometry(e.to_string()))?;

    let geometry = match geojson {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(_) | GeoJson::FeatureCollection(_) => {
            return Err(GeoSqlError::InvalidGeometry(
                "expected a geometry object".to_string(),
            ));
        }
    };

    let geometry: geo_types::Geometry<f64> = geometry
        .try_into()
        .map_err(|e: geojson::Error| GeoSqlError::InvalidGeometry(e.to_string()))?;

    Ok(WktText(&geometry).to_string())
}
