use rusqlite::types::Type;
use rusqlite::{Connection, ErrorCode, Row, TransactionBehavior};
use thiserror::Error;

pub mod careers_db_operations;
pub mod contact_db_operations;
pub mod content_db_operations;
pub mod newsletter_db_operations;
pub mod stats_db_operations;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
    #[error("R2D2 Pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Blocking task was cancelled")]
    Cancelled,
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation
                    && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}

/// Encodes a string list for a JSON text column.
pub(crate) fn to_json_list(items: &[String]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(items)?)
}

/// Decodes a JSON text column back into a string list inside a row mapper.
pub(crate) fn list_column(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        Some(json) if !json.is_empty() => serde_json::from_str(&json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
        _ => Ok(Vec::new()),
    }
}

/// Inserts `seeds` when `count_sql` reports no visible rows. The count is re-checked
/// inside an immediate transaction so concurrent first reads seed only once.
/// Returns whether anything was written.
pub(crate) fn seed_if_empty<T, R>(
    conn: &mut Connection,
    count_sql: &str,
    seeds: &[T],
    insert: fn(&Connection, &T) -> Result<R, StoreError>,
) -> Result<bool, StoreError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let visible: i64 = tx.query_row(count_sql, [], |row| row.get(0))?;
    if visible > 0 {
        return Ok(false);
    }

    for seed in seeds {
        insert(&tx, seed)?;
    }
    tx.commit()?;
    Ok(true)
}
