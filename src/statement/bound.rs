use crate::connection::Executor;
use crate::core::{Result, Value};
use tracing::trace;

/// SQL text plus its positional parameters. Built per call, executed once.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    sql: String,
    params: Vec<Value>,
}

impl BoundStatement {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Parameter at a 1-based position, the way drivers number them
    pub fn param(&self, position: usize) -> Option<&Value> {
        position.checked_sub(1).and_then(|i| self.params.get(i))
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// The SQL text with `?` rewritten to `$1`, `$2`, ... for drivers using
    /// PostgreSQL-style parameters. Identifiers are validated and values are
    /// never inlined, so every `?` in the text is a placeholder.
    pub fn numbered_sql(&self) -> String {
        let mut out = String::with_capacity(self.sql.len() + self.params.len() * 2);
        let mut n = 0;
        for c in self.sql.chars() {
            if c == '?' {
                n += 1;
                out.push('$');
                out.push_str(&n.to_string());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Run the statement once on `executor`, returning affected rows
    pub fn execute<E: Executor + ?Sized>(self, executor: &mut E) -> Result<u64> {
        trace!(sql = %self.sql, params = self.params.len(), "executing statement");
        let affected = executor.execute(&self.sql, &self.params)?;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_positions_are_one_based() {
        let statement = BoundStatement::new(
            "DELETE FROM points WHERE gid = ?",
            vec![Value::Integer(5)],
        );

        assert_eq!(statement.param(0), None);
        assert_eq!(statement.param(1), Some(&Value::Integer(5)));
        assert_eq!(statement.param(2), None);
    }

    #[test]
    fn test_numbered_sql() {
        let statement = BoundStatement::new(
            "UPDATE points SET (gid, name, geom) = (?, ?, ST_GeomFromText(?, ?)) WHERE gid = ?",
            Vec::new(),
        );

        assert_eq!(
            statement.numbered_sql(),
            "UPDATE points SET (gid, name, geom) = ($1, $2, ST_GeomFromText($3, $4)) WHERE gid = $5"
        );
    }
}
