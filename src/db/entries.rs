//! Diary entry CRUD operations.
//!
//! One entry per calendar day, keyed by the canonical `YYYY-MM-DD` string form
//! of the date. Saving an existing date replaces the prior text and mood in
//! place; the store never appends. No validation is applied to text length or
//! mood bounds at this layer.

use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::debug;

/// Sentinel mood value meaning "no mood selected".
pub const MOOD_UNSET: i32 = -1;

/// A diary entry: one calendar day of free text plus a mood score.
///
/// `mood` is `-1` when unset, otherwise an index into the 17-slot mood
/// vocabulary (`0..=16`). Out-of-range scores are stored as given and rejected
/// at summary time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    pub date: NaiveDate,
    pub text: String,
    pub mood: i32,
}

/// A `(date, score)` pair projected from a diary entry for the mood chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSample {
    pub date: NaiveDate,
    pub score: i32,
}

/// Formats a date in the store's canonical key form.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inserts or updates the diary entry for a date.
///
/// Upsert by date: a write with an existing date key replaces prior text and
/// mood, never appends.
///
/// # Errors
///
/// Returns an error if the database operation fails; a failed save leaves no
/// partial effect.
pub fn save_entry(conn: &Connection, date: NaiveDate, text: &str, mood: i32) -> AppResult<()> {
    debug!("Saving entry for {} (mood {})", date, mood);

    conn.execute(
        "INSERT OR REPLACE INTO Diary (date, text, mood) VALUES (?1, ?2, ?3)",
        params![date_key(date), text, mood],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Deletes the diary entry for a date, if present.
///
/// Idempotent: deleting an absent date is not an error. Also purges the date's
/// memoized cheer-up message so a later re-entry on the same date gets a fresh
/// one (see `memos`).
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_entry(conn: &Connection, date: NaiveDate) -> AppResult<()> {
    debug!("Deleting entry for {}", date);

    let key = date_key(date);
    conn.execute("DELETE FROM Diary WHERE date = ?1", params![key])
        .map_err(DatabaseError::Sqlite)?;
    crate::db::memos::delete_message(conn, date)?;

    Ok(())
}

/// Retrieves all diary entries, in no guaranteed order.
///
/// Rows whose date column does not parse as `YYYY-MM-DD` are skipped.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn fetch_entries(conn: &Connection) -> AppResult<Vec<DiaryEntry>> {
    let mut stmt = conn
        .prepare("SELECT date, text, mood FROM Diary")
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
            ))
        })
        .map_err(DatabaseError::Sqlite)?;

    let mut entries = Vec::new();
    for row in rows {
        let (date_str, text, mood) = row.map_err(DatabaseError::Sqlite)?;
        if let Ok(date) = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
            entries.push(DiaryEntry { date, text, mood });
        }
    }

    Ok(entries)
}

/// Retrieves the entry text for a date.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists for the given date.
pub fn fetch_text(conn: &Connection, date: NaiveDate) -> AppResult<Option<String>> {
    let result = conn.query_row(
        "SELECT text FROM Diary WHERE date = ?1",
        params![date_key(date)],
        |row| row.get(0),
    );

    match result {
        Ok(text) => Ok(Some(text)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Retrieves the mood score for a date.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists for the given date.
pub fn fetch_mood(conn: &Connection, date: NaiveDate) -> AppResult<Option<i32>> {
    let result = conn.query_row(
        "SELECT mood FROM Diary WHERE date = ?1",
        params![date_key(date)],
        |row| row.get(0),
    );

    match result {
        Ok(mood) => Ok(Some(mood)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Retrieves the set of dates that have an entry, for marking a calendar.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn fetch_dates_with_entries(conn: &Connection) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT date FROM Diary")
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(DatabaseError::Sqlite)?;

    let mut dates = Vec::new();
    for row in rows {
        let date_str = row.map_err(DatabaseError::Sqlite)?;
        if let Ok(date) = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
            dates.push(date);
        }
    }

    Ok(dates)
}

/// Retrieves the most recent `limit` mood samples, ascending by date.
///
/// The query selects descending to take the latest rows, then the series is
/// reversed so the chart reads left to right.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn fetch_recent_mood_series(conn: &Connection, limit: usize) -> AppResult<Vec<MoodSample>> {
    let mut stmt = conn
        .prepare("SELECT date, mood FROM Diary ORDER BY date DESC LIMIT ?1")
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([limit as i64], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i32>(1)?))
        })
        .map_err(DatabaseError::Sqlite)?;

    let mut samples = Vec::new();
    for row in rows {
        let (date_str, score) = row.map_err(DatabaseError::Sqlite)?;
        if let Ok(date) = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
            samples.push(MoodSample { date, score });
        }
    }

    samples.reverse();
    Ok(samples)
}

/// Retrieves the mood pair `(mood on date, mood on previous day)`.
///
/// Each component is the `-1` sentinel when the corresponding day has no entry.
/// The previous day is a pure calendar-day subtraction on `NaiveDate`, so the
/// pair is unaffected by daylight-saving-like shifts in the display calendar.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn fetch_mood_pair(conn: &Connection, date: NaiveDate) -> AppResult<(i32, i32)> {
    let prev = match date.pred_opt() {
        Some(prev) => prev,
        None => return Ok((fetch_mood(conn, date)?.unwrap_or(MOOD_UNSET), MOOD_UNSET)),
    };

    let key = date_key(date);
    let prev_key = date_key(prev);

    let mut mood_today = MOOD_UNSET;
    let mut mood_yesterday = MOOD_UNSET;

    let mut stmt = conn
        .prepare("SELECT date, mood FROM Diary WHERE date IN (?1, ?2)")
        .map_err(DatabaseError::Sqlite)?;
    let rows = stmt
        .query_map(params![key, prev_key], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i32>(1)?))
        })
        .map_err(DatabaseError::Sqlite)?;

    for row in rows {
        let (fetched_date, mood) = row.map_err(DatabaseError::Sqlite)?;
        if fetched_date == key {
            mood_today = mood;
        } else if fetched_date == prev_key {
            mood_yesterday = mood;
        }
    }

    Ok((mood_today, mood_yesterday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_save_then_read_back() {
        let conn = setup_test_db();
        let date = d("2024-01-15");

        save_entry(&conn, date, "a quiet day", 8).unwrap();

        assert_eq!(
            fetch_text(&conn, date).unwrap(),
            Some("a quiet day".to_string())
        );
        assert_eq!(fetch_mood(&conn, date).unwrap(), Some(8));
    }

    #[test]
    fn test_save_twice_overwrites() {
        let conn = setup_test_db();
        let date = d("2024-01-15");

        save_entry(&conn, date, "first draft", 3).unwrap();
        save_entry(&conn, date, "second draft", 12).unwrap();

        assert_eq!(
            fetch_text(&conn, date).unwrap(),
            Some("second draft".to_string())
        );
        assert_eq!(fetch_mood(&conn, date).unwrap(), Some(12));

        // Still one row - upsert, not append
        let entries = fetch_entries(&conn).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_delete_entry() {
        let conn = setup_test_db();
        let date = d("2024-01-15");

        save_entry(&conn, date, "to be removed", 5).unwrap();
        delete_entry(&conn, date).unwrap();

        assert_eq!(fetch_text(&conn, date).unwrap(), None);
        assert_eq!(fetch_mood(&conn, date).unwrap(), None);
    }

    #[test]
    fn test_delete_absent_date_is_ok() {
        let conn = setup_test_db();
        // Never saved; deleting must succeed
        delete_entry(&conn, d("2030-12-31")).unwrap();
    }

    #[test]
    fn test_delete_purges_cheer_up_memo() {
        let conn = setup_test_db();
        let date = d("2024-01-15");

        save_entry(&conn, date, "text", 5).unwrap();
        crate::db::memos::save_message(&conn, date, "stay bright").unwrap();

        delete_entry(&conn, date).unwrap();
        assert_eq!(crate::db::memos::fetch_message(&conn, date).unwrap(), None);
    }

    #[test]
    fn test_fetch_text_absent() {
        let conn = setup_test_db();
        assert_eq!(fetch_text(&conn, d("2024-01-15")).unwrap(), None);
    }

    #[test]
    fn test_fetch_dates_with_entries() {
        let conn = setup_test_db();

        save_entry(&conn, d("2024-01-01"), "a", 1).unwrap();
        save_entry(&conn, d("2024-01-03"), "b", 2).unwrap();
        save_entry(&conn, d("2024-01-03"), "b again", 2).unwrap();

        let mut dates = fetch_dates_with_entries(&conn).unwrap();
        dates.sort();
        assert_eq!(dates, vec![d("2024-01-01"), d("2024-01-03")]);
    }

    #[test]
    fn test_recent_mood_series_ascending_and_capped() {
        let conn = setup_test_db();

        for day in 1..=10 {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            save_entry(&conn, date, "entry", day as i32).unwrap();
        }

        let series = fetch_recent_mood_series(&conn, 7).unwrap();
        assert_eq!(series.len(), 7);
        // Most recent 7 dates, ascending: Jan 4 through Jan 10
        assert_eq!(series[0].date, d("2024-01-04"));
        assert_eq!(series[6].date, d("2024-01-10"));
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_mood_pair_both_absent() {
        let conn = setup_test_db();
        let pair = fetch_mood_pair(&conn, d("2024-01-15")).unwrap();
        assert_eq!(pair, (MOOD_UNSET, MOOD_UNSET));
    }

    #[test]
    fn test_mood_pair_only_today_present() {
        let conn = setup_test_db();
        save_entry(&conn, d("2024-01-15"), "today only", 9).unwrap();

        let pair = fetch_mood_pair(&conn, d("2024-01-15")).unwrap();
        assert_eq!(pair, (9, MOOD_UNSET));
    }

    #[test]
    fn test_mood_pair_both_present() {
        let conn = setup_test_db();
        save_entry(&conn, d("2024-01-14"), "yesterday", 4).unwrap();
        save_entry(&conn, d("2024-01-15"), "today", 11).unwrap();

        let pair = fetch_mood_pair(&conn, d("2024-01-15")).unwrap();
        assert_eq!(pair, (11, 4));
    }

    #[test]
    fn test_mood_pair_across_month_boundary() {
        let conn = setup_test_db();
        // Calendar-day subtraction, not string arithmetic
        save_entry(&conn, d("2024-02-29"), "leap", 6).unwrap();
        save_entry(&conn, d("2024-03-01"), "march", 7).unwrap();

        let pair = fetch_mood_pair(&conn, d("2024-03-01")).unwrap();
        assert_eq!(pair, (7, 6));
    }
}
