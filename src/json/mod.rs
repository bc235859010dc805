//! GeoJSON document handling
//!
//! - `feature.rs` - Feature documents (properties + geometry)
//! - `converter.rs` - Property value coercion, including date detection
//! - `validator.rs` - SQL identifier validation

pub mod converter;
pub mod feature;
pub mod validator;

pub use converter::{DEFAULT_DATE_FORMATS, DateCoercer};
pub use feature::Feature;
pub use validator::{validate_identifier, validate_table_name};
