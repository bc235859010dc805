//! SQLite backend
//!
//! `rusqlite::Connection` as an [`Executor`]: prepare, bind each parameter by
//! position, execute. With SpatiaLite loaded `ST_GeomFromText` is the real
//! geometry constructor; on plain SQLite [`register_geometry_functions`]
//! installs a stand-in storing EWKT text.

use super::Executor;
use crate::core::{SqlError, Value};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{Null, ToSql, ToSqlOutput};

impl From<rusqlite::Error> for SqlError {
    fn from(err: rusqlite::Error) -> Self {
        SqlError::new(err)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Value::Null => Ok(ToSqlOutput::from(Null)),
            Value::Integer(i) => i.to_sql(),
            Value::Float(f) => f.to_sql(),
            Value::Boolean(b) => b.to_sql(),
            Value::Text(s) => s.to_sql(),
            Value::Timestamp(t) => t.to_sql(),
            Value::Json(j) => Ok(ToSqlOutput::from(j.to_string())),
        }
    }
}

impl Executor for rusqlite::Connection {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64, SqlError> {
        let mut statement = self.prepare(sql)?;
        for (index, value) in params.iter().enumerate() {
            statement.raw_bind_parameter(index + 1, value)?;
        }
        let affected = statement.raw_execute()?;
        Ok(affected as u64)
    }
}

/// Install `ST_GeomFromText(wkt, srid)` returning `SRID=<srid>;<wkt>`
pub fn register_geometry_functions(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "ST_GeomFromText",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let wkt: String = ctx.get(0)?;
            let srid: i64 = ctx.get(1)?;
            Ok(format!("SRID={};{}", srid, wkt))
        },
    )
}
