//! GeoJSON feature documents
//!
//! Only the `properties` and `geometry` members are read. Property order is
//! the document order (`serde_json` is built with `preserve_order`), which is
//! the order columns and parameters are emitted in.

use crate::core::{GeoSqlError, Result};
use serde_json::{Map, Value as JsonValue};
use std::str::FromStr;

const GEOJSON_PROPS: &str = "properties";
const GEOJSON_GEOM: &str = "geometry";

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    properties: Map<String, JsonValue>,
    geometry: JsonValue,
}

impl Feature {
    pub fn new(properties: Map<String, JsonValue>, geometry: JsonValue) -> Self {
        Self {
            properties,
            geometry,
        }
    }

    /// Read a feature out of a parsed GeoJSON document
    pub fn from_value(document: &JsonValue) -> Result<Self> {
        let obj = document.as_object().ok_or_else(|| {
            GeoSqlError::InvalidFeature("Expected a GeoJSON object".to_string())
        })?;

        let properties = match obj.get(GEOJSON_PROPS) {
            Some(JsonValue::Object(props)) => props.clone(),
            Some(_) => {
                return Err(GeoSqlError::InvalidFeature(
                    "'properties' must be an object".to_string(),
                ));
            }
            None => {
                return Err(GeoSqlError::InvalidFeature(
                    "Missing 'properties' member".to_string(),
                ));
            }
        };

        let geometry = obj.get(GEOJSON_GEOM).cloned().unwrap_or(JsonValue::Null);

        Ok(Self {
            properties,
            geometry,
        })
    }

    /// Accepts either a single Feature or a FeatureCollection, returning the
    /// features in document order
    pub fn collection_from_value(document: &JsonValue) -> Result<Vec<Self>> {
        let is_collection = document
            .get("type")
            .and_then(JsonValue::as_str)
            .is_some_and(|t| t == "FeatureCollection");

        if !is_collection {
            return Ok(vec![Self::from_value(document)?]);
        }

        document
            .get("features")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| {
                GeoSqlError::InvalidFeature(
                    "FeatureCollection without a 'features' array".to_string(),
                )
            })?
            .iter()
            .map(Self::from_value)
            .collect()
    }

    pub fn properties(&self) -> &Map<String, JsonValue> {
        &self.properties
    }

    pub fn geometry(&self) -> &JsonValue {
        &self.geometry
    }

    /// Serialized geometry handed to the translator. A geometry stored as a
    /// JSON string is taken to already be GeoJSON text.
    pub fn geometry_text(&self) -> String {
        match &self.geometry {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Value of the id property. An explicit JSON `null` counts as absent.
    pub fn id(&self, id_column: &str) -> Option<&JsonValue> {
        self.properties.get(id_column).filter(|v| !v.is_null())
    }
}

impl FromStr for Feature {
    type Err = GeoSqlError;

    fn from_str(s: &str) -> Result<Self> {
        let document: JsonValue = serde_json::from_str(s)?;
        Self::from_value(&document)
    }
}
