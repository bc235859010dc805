use crate::core::{Result, Value};
use crate::geometry::to_wkt;
use crate::json::DateCoercer;
use serde_json::{Map, Value as JsonValue};

/// Produces the positional parameters of an INSERT/UPDATE, in the order the
/// statement shape laid out its placeholders.
pub struct ParameterBinder<'a> {
    coercer: &'a DateCoercer,
}

impl<'a> ParameterBinder<'a> {
    pub fn new(coercer: &'a DateCoercer) -> Self {
        Self { coercer }
    }

    /// Property values (coerced), then WKT, then SRID, then the optional
    /// trailing value (the id of an UPDATE's WHERE clause).
    ///
    /// The geometry is translated before anything is returned, so an invalid
    /// geometry never reaches the connection.
    pub fn bind(
        &self,
        properties: &Map<String, JsonValue>,
        geometry_json: &str,
        srid: i32,
        trailing: Option<Value>,
    ) -> Result<Vec<Value>> {
        let mut params = Vec::with_capacity(properties.len() + 3);

        for value in properties.values() {
            params.push(self.coercer.coerce(value));
        }

        let wkt = to_wkt(geometry_json)?;
        params.push(Value::Text(wkt));
        params.push(Value::Integer(i64::from(srid)));

        if let Some(value) = trailing {
            params.push(value);
        }

        Ok(params)
    }
}
