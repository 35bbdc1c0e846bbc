//! Cheer-up message side table.
//!
//! A `date -> message` mapping written at most once per date and read through
//! thereafter, so the same day always shows the same message across repeated
//! views and process restarts. Deleting a diary entry purges its memo (the
//! original left the stale mapping behind; this store clears derived state with
//! the entry it derives from).

use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::debug;

use super::entries::date_key;

/// Retrieves the memoized cheer-up message for a date.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no message has been memoized for the date.
pub fn fetch_message(conn: &Connection, date: NaiveDate) -> AppResult<Option<String>> {
    let result = conn.query_row(
        "SELECT message FROM CheerUpMemo WHERE date = ?1",
        params![date_key(date)],
        |row| row.get(0),
    );

    match result {
        Ok(message) => Ok(Some(message)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Memoizes a cheer-up message for a date.
///
/// First write wins: if a message already exists for the date, the existing
/// row is kept untouched.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn save_message(conn: &Connection, date: NaiveDate, message: &str) -> AppResult<()> {
    debug!("Memoizing cheer-up message for {}", date);

    conn.execute(
        "INSERT OR IGNORE INTO CheerUpMemo (date, message) VALUES (?1, ?2)",
        params![date_key(date), message],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Removes the memoized message for a date, if any. Idempotent.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_message(conn: &Connection, date: NaiveDate) -> AppResult<()> {
    conn.execute(
        "DELETE FROM CheerUpMemo WHERE date = ?1",
        params![date_key(date)],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}
