use crate::connection::Executor;
use crate::connection::config::{HelperConfig, TableMapping};
use crate::core::{GeoSqlError, Result};
use crate::json::Feature;
use crate::statement::{BoundStatement, StatementBuilder};
use tracing::debug;

/// Inserts, updates and deletes rows of one geometry table from GeoJSON
/// features.
///
/// The table mapping is fixed at construction. The connection can be given
/// up front or bound later with [`GeoJsonHelper::set_connection`], so one
/// configured helper can be handed a different pooled connection for each
/// unit of work. Opening, pooling and closing connections stays with the
/// caller.
///
/// # Examples
///
/// ```ignore
/// let config = HelperConfig::new(TableMapping::new("points", "gid", "geom", 4326)?);
/// let mut helper = GeoJsonHelper::with_connection(config, &mut conn);
///
/// let feature: Feature = r#"{
///     "type": "Feature",
///     "properties": {"gid": 1, "name": "Foo"},
///     "geometry": {"type": "Point", "coordinates": [10, 10]}
/// }"#.parse()?;
///
/// helper.insert(&feature)?;
/// ```
pub struct GeoJsonHelper<C> {
    statements: StatementBuilder,
    connection: Option<C>,
}

impl<C> GeoJsonHelper<C> {
    /// Create a helper with no connection bound yet
    pub fn new(config: HelperConfig) -> Self {
        Self {
            statements: StatementBuilder::from_config(&config),
            connection: None,
        }
    }

    pub fn with_connection(config: HelperConfig, connection: C) -> Self {
        let mut helper = Self::new(config);
        helper.connection = Some(connection);
        helper
    }

    /// Bind the connection used by later operations, returning the one
    /// previously bound
    pub fn set_connection(&mut self, connection: C) -> Option<C> {
        self.connection.replace(connection)
    }

    /// Unbind and return the current connection
    pub fn take_connection(&mut self) -> Option<C> {
        self.connection.take()
    }

    pub fn connection(&self) -> Option<&C> {
        self.connection.as_ref()
    }

    pub fn has_connection(&self) -> bool {
        self.connection.is_some()
    }

    pub fn mapping(&self) -> &TableMapping {
        self.statements.mapping()
    }

    /// Build the INSERT for `feature` without executing it
    pub fn prepare_insert(&self, feature: &Feature) -> Result<BoundStatement> {
        self.statements.insert(feature)
    }

    /// Build the UPDATE for `feature` without executing it
    pub fn prepare_update(&self, feature: &Feature) -> Result<BoundStatement> {
        self.statements.update(feature)
    }

    /// Build the DELETE for `feature` without executing it
    pub fn prepare_delete(&self, feature: &Feature) -> Result<BoundStatement> {
        self.statements.delete(feature)
    }
}

impl<C: Executor> GeoJsonHelper<C> {
    /// Insert `feature` as a new row. Returns the affected row count.
    ///
    /// # Errors
    /// `Precondition` without a bound connection, `InvalidGeometry` if the
    /// geometry cannot be translated to WKT, `Sql` if execution fails.
    pub fn insert(&mut self, feature: &Feature) -> Result<u64> {
        let connection = bound(&mut self.connection)?;
        let statement = self.statements.insert(feature)?;
        dispatch("insert", self.statements.mapping(), statement, connection)
    }

    /// Update the row whose id column equals the feature's id property
    ///
    /// # Errors
    /// As [`GeoJsonHelper::insert`], plus `MissingId` when the feature has no
    /// id property.
    pub fn update(&mut self, feature: &Feature) -> Result<u64> {
        let connection = bound(&mut self.connection)?;
        let statement = self.statements.update(feature)?;
        dispatch("update", self.statements.mapping(), statement, connection)
    }

    /// Delete the row whose id column equals the feature's id property. Only
    /// the id property is read.
    pub fn delete(&mut self, feature: &Feature) -> Result<u64> {
        let connection = bound(&mut self.connection)?;
        let statement = self.statements.delete(feature)?;
        dispatch("delete", self.statements.mapping(), statement, connection)
    }
}

fn bound<C>(connection: &mut Option<C>) -> Result<&mut C> {
    connection
        .as_mut()
        .ok_or_else(|| GeoSqlError::Precondition("no connection configured".to_string()))
}

fn dispatch<C: Executor>(
    operation: &str,
    mapping: &TableMapping,
    statement: BoundStatement,
    connection: &mut C,
) -> Result<u64> {
    debug!(
        operation,
        table = mapping.table(),
        params = statement.params().len(),
        "dispatching feature statement"
    );
    statement.execute(connection)
}
