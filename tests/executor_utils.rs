#![allow(dead_code)]

use geojson_sql::{Executor, Feature, SqlError, Value};
use serde_json::{Value as JsonValue, json};
use std::fmt;

/// One `execute` call as seen by the connection
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Executor that records statements instead of running them, optionally
/// failing every call
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub executions: Vec<Execution>,
    pub fail_with: Option<String>,
    pub affected_rows: u64,
}

#[derive(Debug)]
pub struct FakeDriverError(pub String);

impl fmt::Display for FakeDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FakeDriverError {}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self {
            affected_rows: 1,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn last(&self) -> &Execution {
        self.executions.last().expect("no statement executed")
    }
}

impl Executor for RecordingExecutor {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64, SqlError> {
        if let Some(message) = &self.fail_with {
            return Err(SqlError::new(FakeDriverError(message.clone())));
        }
        self.executions.push(Execution {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        Ok(self.affected_rows)
    }
}

pub fn point(x: f64, y: f64) -> JsonValue {
    json!({"type": "Point", "coordinates": [x, y]})
}

pub fn feature(properties: JsonValue, geometry: JsonValue) -> Feature {
    Feature::from_value(&json!({
        "type": "Feature",
        "properties": properties,
        "geometry": geometry
    }))
    .unwrap()
}
