//! SQL assembly for the three statement kinds
//!
//! Holds the table mapping and the coercer, and turns a feature into a
//! [`BoundStatement`]. Nothing here touches a connection.

use super::binder::ParameterBinder;
use super::bound::BoundStatement;
use super::shape::{StatementShape, build_shape};
use crate::connection::config::{HelperConfig, TableMapping};
use crate::core::{GeoSqlError, Result, Value};
use crate::json::{DateCoercer, Feature};

#[derive(Debug, Clone)]
pub struct StatementBuilder {
    mapping: TableMapping,
    coercer: DateCoercer,
}

impl StatementBuilder {
    pub fn new(mapping: TableMapping, coercer: DateCoercer) -> Self {
        Self { mapping, coercer }
    }

    pub fn from_config(config: &HelperConfig) -> Self {
        Self::new(config.mapping.clone(), config.coercion.coercer())
    }

    pub fn mapping(&self) -> &TableMapping {
        &self.mapping
    }

    pub fn coercer(&self) -> &DateCoercer {
        &self.coercer
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
    pub fn insert(&self, feature: &Feature) -> Result<BoundStatement> {
        let shape = self.shape(feature)?;
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.mapping.table(),
            shape.column_list(),
            shape.placeholder_list()
        );

        let params = self.binder().bind(
            feature.properties(),
            &feature.geometry_text(),
            self.mapping.srid(),
            None,
        )?;

        Ok(BoundStatement::new(sql, params))
    }

    /// `UPDATE <table> SET (<columns>) = (<placeholders>) WHERE <id> = ?`
    pub fn update(&self, feature: &Feature) -> Result<BoundStatement> {
        let id = self.id_value(feature)?;
        let shape = self.shape(feature)?;
        let sql = format!(
            "UPDATE {} SET ({}) = ({}) WHERE {} = ?",
            self.mapping.table(),
            shape.column_list(),
            shape.placeholder_list(),
            self.mapping.id_column()
        );

        let params = self.binder().bind(
            feature.properties(),
            &feature.geometry_text(),
            self.mapping.srid(),
            Some(id),
        )?;

        Ok(BoundStatement::new(sql, params))
    }

    /// `DELETE FROM <table> WHERE <id> = ?`, binding only the id
    pub fn delete(&self, feature: &Feature) -> Result<BoundStatement> {
        let id = self.id_value(feature)?;
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?",
            self.mapping.table(),
            self.mapping.id_column()
        );

        Ok(BoundStatement::new(sql, vec![id]))
    }

    fn shape(&self, feature: &Feature) -> Result<StatementShape> {
        build_shape(feature.properties(), self.mapping.geometry_column())
    }

    fn binder(&self) -> ParameterBinder<'_> {
        ParameterBinder::new(&self.coercer)
    }

    // Not coerced: the id is matched as stored
    fn id_value(&self, feature: &Feature) -> Result<Value> {
        feature
            .id(self.mapping.id_column())
            .map(Value::from_json)
            .ok_or_else(|| GeoSqlError::MissingId(self.mapping.id_column().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> StatementBuilder {
        let mapping = TableMapping::new("points", "gid", "geom", 4326).unwrap();
        StatementBuilder::new(mapping, DateCoercer::default())
    }

    fn feature(properties: serde_json::Value) -> Feature {
        Feature::from_value(&json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {"type": "Point", "coordinates": [10, 10]}
        }))
        .unwrap()
    }

    #[test]
    fn test_insert_sql() {
        let statement = builder().insert(&feature(json!({"gid": 1, "name": "Foo"}))).unwrap();

        assert_eq!(
            statement.sql(),
            "INSERT INTO points (gid, name, geom) VALUES (?, ?, ST_GeomFromText(?, ?))"
        );
        assert_eq!(statement.params().len(), 4);
        assert_eq!(statement.param(1), Some(&Value::Integer(1)));
        assert_eq!(statement.param(2), Some(&Value::Text("Foo".into())));
        assert_eq!(statement.param(4), Some(&Value::Integer(4326)));
    }

    #[test]
    fn test_update_sql() {
        let statement = builder().update(&feature(json!({"gid": 1, "name": "Foo"}))).unwrap();

        assert_eq!(
            statement.sql(),
            "UPDATE points SET (gid, name, geom) = (?, ?, ST_GeomFromText(?, ?)) WHERE gid = ?"
        );
        assert_eq!(statement.params().len(), 5);
        assert_eq!(statement.param(5), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_update_id_is_not_coerced() {
        let mapping = TableMapping::new("events", "day", "geom", 4326).unwrap();
        let builder = StatementBuilder::new(mapping, DateCoercer::default());
        let statement = builder
            .update(&feature(json!({"day": "2024-03-01+00:00"})))
            .unwrap();

        assert_eq!(statement.param(1).unwrap().type_name(), "TIMESTAMP");
        assert_eq!(statement.param(4), Some(&Value::Text("2024-03-01+00:00".into())));
    }

    #[test]
    fn test_delete_sql() {
        let statement = builder().delete(&feature(json!({"gid": 1, "f1": "name"}))).unwrap();

        assert_eq!(statement.sql(), "DELETE FROM points WHERE gid = ?");
        assert_eq!(statement.params(), &[Value::Integer(1)]);
    }

    #[test]
    fn test_missing_id() {
        let without_id = feature(json!({"f1": "name", "f2": 42}));

        assert!(builder().update(&without_id).unwrap_err().is_missing_id());
        assert!(builder().delete(&without_id).unwrap_err().is_missing_id());
        assert!(builder().insert(&without_id).is_ok());
    }
}
