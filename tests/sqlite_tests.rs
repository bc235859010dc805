//! SQLite integration tests
//!
//! End-to-end insert/update/delete through rusqlite with the EWKT stand-in for
//! ST_GeomFromText.
//! Run with: cargo test --test sqlite_tests
#![cfg(feature = "sqlite")]

mod executor_utils;

use chrono::{DateTime, TimeZone, Utc};
use executor_utils::{feature, point};
use geojson_sql::{
    Feature, GeoJsonHelper, GeoSqlError, HelperConfig, TableMapping, register_geometry_functions,
};
use rusqlite::Connection;
use serde_json::json;
use std::io::Write;

fn connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    register_geometry_functions(&conn).unwrap();
    conn.execute_batch(
        "CREATE TABLE points (
            gid INTEGER PRIMARY KEY,
            name TEXT,
            observed TEXT,
            geom TEXT
        )",
    )
    .unwrap();
    conn
}

fn config() -> HelperConfig {
    HelperConfig::new(TableMapping::new("points", "gid", "geom", 4326).unwrap())
}

fn row(conn: &Connection, gid: i64) -> Option<(String, String)> {
    conn.query_row(
        "SELECT name, geom FROM points WHERE gid = ?1",
        [gid],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .ok()
}

fn count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM points", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_insert_update_delete_roundtrip() {
    let mut helper = GeoJsonHelper::with_connection(config(), connection());

    let affected = helper
        .insert(&feature(json!({"gid": 1, "name": "Foo"}), point(10.0, 10.0)))
        .unwrap();
    assert_eq!(affected, 1);

    {
        let conn = helper.connection().unwrap();
        let (name, geom) = row(conn, 1).unwrap();
        assert_eq!(name, "Foo");
        assert_eq!(geom, "SRID=4326;POINT (10 10)");
    }

    let affected = helper
        .update(&feature(json!({"gid": 1, "name": "Bar"}), point(20.0, 5.0)))
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(row(helper.connection().unwrap(), 1).unwrap().0, "Bar");

    let affected = helper
        .delete(&feature(json!({"gid": 1}), json!(null)))
        .unwrap();
    assert_eq!(affected, 1);
    assert!(row(helper.connection().unwrap(), 1).is_none());
}

#[test]
fn test_update_of_unknown_id_affects_nothing() {
    let mut helper = GeoJsonHelper::with_connection(config(), connection());
    let affected = helper
        .update(&feature(json!({"gid": 99, "name": "Ghost"}), point(1.0, 1.0)))
        .unwrap();
    assert_eq!(affected, 0);
}

#[test]
fn test_constraint_violation_is_sql_error() {
    let mut helper = GeoJsonHelper::with_connection(config(), connection());
    let feature = feature(json!({"gid": 1, "name": "Foo"}), point(10.0, 10.0));

    helper.insert(&feature).unwrap();
    match helper.insert(&feature).unwrap_err() {
        GeoSqlError::Sql(err) => {
            assert!(err.downcast_ref::<rusqlite::Error>().is_some());
        }
        other => panic!("expected SQL error, got {other:?}"),
    }
    assert_eq!(count(helper.connection().unwrap()), 1);
}

#[test]
fn test_unknown_column_is_sql_error() {
    let mut helper = GeoJsonHelper::with_connection(config(), connection());
    let err = helper
        .insert(&feature(json!({"gid": 1, "colour": "red"}), point(0.0, 0.0)))
        .unwrap_err();
    assert!(err.is_sql());
}

#[test]
fn test_date_property_is_stored_as_timestamp() {
    let mut helper = GeoJsonHelper::with_connection(config(), connection());
    helper
        .insert(&feature(
            json!({"gid": 1, "observed": "2024-05-06T07:08:09+02:00"}),
            point(0.0, 0.0),
        ))
        .unwrap();

    let observed: DateTime<Utc> = helper
        .connection()
        .unwrap()
        .query_row("SELECT observed FROM points WHERE gid = 1", [], |row| row.get(0))
        .unwrap();
    assert_eq!(observed, Utc.with_ymd_and_hms(2024, 5, 6, 5, 8, 9).unwrap());
}

#[test]
fn test_one_helper_across_borrowed_connections() {
    let mut first = connection();
    let mut second = connection();
    let mut helper = GeoJsonHelper::new(config());

    helper.set_connection(&mut first);
    helper
        .insert(&feature(json!({"gid": 1, "name": "A"}), point(0.0, 0.0)))
        .unwrap();

    helper.set_connection(&mut second);
    helper
        .insert(&feature(json!({"gid": 2, "name": "B"}), point(0.0, 0.0)))
        .unwrap();
    drop(helper);

    assert!(row(&first, 1).is_some());
    assert!(row(&first, 2).is_none());
    assert!(row(&second, 2).is_some());
}

#[test]
fn test_feature_collection_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"mapping": {{"table": "points", "id_column": "gid", "geometry_column": "geom", "srid": 3857}}}}"#
    )
    .unwrap();

    let config = HelperConfig::from_file(file.path()).unwrap();
    let mut helper = GeoJsonHelper::with_connection(config, connection());

    let features = Feature::collection_from_value(&json!({
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"gid": 1, "name": "A"}, "geometry": point(1.0, 1.0)},
            {"type": "Feature", "properties": {"gid": 2, "name": "B"}, "geometry": point(2.0, 2.0)}
        ]
    }))
    .unwrap();

    for feature in &features {
        helper.insert(feature).unwrap();
    }

    let conn = helper.connection().unwrap();
    assert_eq!(count(conn), 2);
    assert!(row(conn, 2).unwrap().1.starts_with("SRID=3857;"));
}
