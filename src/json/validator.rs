//! SQL Identifier Validator
//!
//! Table, column and property names are written into the statement text
//! verbatim, so every one of them has to pass these checks first. Values
//! never go through here; they are always bound as parameters.

use crate::core::{GeoSqlError, Result};

/// PostgreSQL truncates identifiers longer than this
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Validates a single unquoted identifier (column or property key)
pub fn validate_identifier(name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(GeoSqlError::InvalidIdentifier(
            "Identifier cannot be empty".to_string(),
        ));
    };

    // Must start with letter or underscore
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(GeoSqlError::InvalidIdentifier(format!(
            "'{}' must start with a letter or underscore",
            name
        )));
    }

    // Can only contain alphanumeric and underscores
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(GeoSqlError::InvalidIdentifier(format!(
            "'{}' can only contain letters, numbers, and underscores",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LEN {
        return Err(GeoSqlError::InvalidIdentifier(format!(
            "'{}' is too long (max {} characters)",
            name, MAX_IDENTIFIER_LEN
        )));
    }

    Ok(())
}

/// Validates a table name, optionally qualified with one schema
/// (`schema.table`)
pub fn validate_table_name(name: &str) -> Result<()> {
    for part in name.splitn(2, '.') {
        validate_identifier(part).map_err(|_| {
            GeoSqlError::InvalidIdentifier(format!(
                "'{}' is not a valid table name (expected table or schema.table)",
                name
            ))
        })?;
    }
    Ok(())
}
