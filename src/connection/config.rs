use crate::core::{GeoSqlError, Result};
use crate::json::{DEFAULT_DATE_FORMATS, DateCoercer, validate_identifier, validate_table_name};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Table a helper writes to
///
/// Fixed for the lifetime of a helper: one table, one single-column primary
/// key, one geometry column, one SRID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMapping {
    table: String,
    id_column: String,
    geometry_column: String,
    srid: i32,
}

impl TableMapping {
    /// Create a mapping, validating all three names as SQL identifiers
    pub fn new(
        table: impl Into<String>,
        id_column: impl Into<String>,
        geometry_column: impl Into<String>,
        srid: i32,
    ) -> Result<Self> {
        let mapping = Self {
            table: table.into(),
            id_column: id_column.into(),
            geometry_column: geometry_column.into(),
            srid,
        };
        mapping.validate()?;
        Ok(mapping)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn geometry_column(&self) -> &str {
        &self.geometry_column
    }

    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Deserialized mappings skip [`TableMapping::new`], so they are checked here
    pub fn validate(&self) -> Result<()> {
        validate_table_name(&self.table)?;
        validate_identifier(&self.id_column)?;
        validate_identifier(&self.geometry_column)?;
        Ok(())
    }
}

/// Date formats tried on every property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionConfig {
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl CoercionConfig {
    pub fn coercer(&self) -> DateCoercer {
        DateCoercer::new(self.date_formats.iter().cloned())
    }
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            date_formats: default_date_formats(),
        }
    }
}

/// Everything a helper needs apart from the connection
///
/// ```ignore
/// let config = HelperConfig::new(TableMapping::new("points", "gid", "geom", 4326)?)
///     .date_formats(["%Y-%m-%dT%H:%M:%S%.f%:z"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperConfig {
    pub mapping: TableMapping,

    #[serde(default)]
    pub coercion: CoercionConfig,
}

impl HelperConfig {
    pub fn new(mapping: TableMapping) -> Self {
        Self {
            mapping,
            coercion: CoercionConfig::default(),
        }
    }

    /// Replace the date formats, in priority order
    pub fn date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coercion.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Parse from JSON
    ///
    /// Format:
    /// `{"mapping": {"table": "points", "id_column": "gid", "geometry_column": "geom", "srid": 4326},
    ///   "coercion": {"date_formats": ["%Y-%m-%d%:z"]}}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GeoSqlError::Config(format!("Invalid helper config: {}", e)))?;
        config.mapping.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            GeoSqlError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }
}
