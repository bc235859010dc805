// ============================================================================
// geojson_sql Library
// ============================================================================

pub mod core;
pub mod json;
pub mod geometry;
pub mod statement;
pub mod connection;
pub mod facade;

// Re-export main types for convenience
pub use crate::core::{GeoSqlError, Result, SqlError, Value};
pub use json::{DateCoercer, Feature};
pub use geometry::to_wkt;
pub use statement::{BoundStatement, StatementBuilder, StatementShape, build_shape};
pub use facade::GeoJsonHelper;

// Re-export connection API
pub use connection::{
    Executor,
    config::{CoercionConfig, HelperConfig, TableMapping},
};

#[cfg(feature = "sqlite")]
pub use connection::sqlite::register_geometry_functions;
