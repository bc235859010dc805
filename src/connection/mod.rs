pub mod config;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use crate::core::{SqlError, Value};

/// Database connection as seen by the helper
///
/// The helper never opens, pools or closes connections. Implementations
/// prepare `sql`, bind `params` to the `?` placeholders by 1-based position,
/// execute once and report the affected row count. Driver failures are
/// returned as [`SqlError`] with the driver error as source.
pub trait Executor {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64, SqlError>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64, SqlError> {
        (**self).execute(sql, params)
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64, SqlError> {
        (**self).execute(sql, params)
    }
}
