pub mod error;
pub mod value;

pub use error::{GeoSqlError, Result, SqlError};
pub use value::Value;
