use crate::core::Result;
use crate::json::validate_identifier;
use serde_json::{Map, Value as JsonValue};

pub const PLACEHOLDER: &str = "?";

/// Takes the WKT text and the SRID, in that order
pub const GEOMETRY_PLACEHOLDER: &str = "ST_GeomFromText(?, ?)";

/// Column list and matching placeholder list of one INSERT/UPDATE.
/// Built fresh for every statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementShape {
    columns: Vec<String>,
    placeholders: Vec<String>,
}

impl StatementShape {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn column_list(&self) -> String {
        self.columns.join(", ")
    }

    pub fn placeholder_list(&self) -> String {
        self.placeholders.join(", ")
    }
}

/// One column and `?` per property in iteration order, then the geometry
/// column and its constructor call. The binder must walk `properties` in the
/// same order.
pub fn build_shape(
    properties: &Map<String, JsonValue>,
    geometry_column: &str,
) -> Result<StatementShape> {
    let mut columns = Vec::with_capacity(properties.len() + 1);
    let mut placeholders = Vec::with_capacity(properties.len() + 1);

    for key in properties.keys() {
        validate_identifier(key)?;
        columns.push(key.clone());
        placeholders.push(PLACEHOLDER.to_string());
    }

    columns.push(geometry_column.to_string());
    placeholders.push(GEOMETRY_PLACEHOLDER.to_string());

    Ok(StatementShape {
        columns,
        placeholders,
    })
}
