//! Row mapping traits and utilities

use crate::error::BoardResult;
use tokio_postgres::Row;

/// Convert a database row into a typed record
pub trait FromRow: Sized {
    /// Convert a database row into Self
    fn from_row(row: &Row) -> BoardResult<Self>;
}

/// Extension trait for Row to provide typed access
pub trait RowExt {
    /// Try to get a column value, returning BoardError::Decode on failure
    fn try_get_column<T>(&self, column: &str) -> BoardResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> BoardResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>,
    {
        self.try_get(column)
            .map_err(|e| crate::error::BoardError::decode(column, e.to_string()))
    }
}
