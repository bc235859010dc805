use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoSqlError {
    #[error("Invalid GeoJSON geometry: {0}")]
    InvalidGeometry(String),

    #[error("GeoJSON missing id('{0}') property")]
    MissingId(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error(transparent)]
    Sql(#[from] SqlError),

    #[error("Invalid GeoJSON feature: {0}")]
    InvalidFeature(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GeoSqlError>;

/// Failure reported by the database driver while preparing or executing a
/// statement. The driver's error is kept untouched as the `source()`.
#[derive(Error, Debug)]
#[error("SQL error: {source}")]
pub struct SqlError {
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl SqlError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self { source: err.into() }
    }

    /// Borrow the driver error as its concrete type
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }
}

impl GeoSqlError {
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry(_))
    }

    pub fn is_missing_id(&self) -> bool {
        matches!(self, Self::MissingId(_))
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    pub fn is_sql(&self) -> bool {
        matches!(self, Self::Sql(_))
    }
}

impl From<serde_json::Error> for GeoSqlError {
    fn from(err: serde_json::Error) -> Self {
        GeoSqlError::InvalidFeature(err.to_string())
    }
}
