//! Countdown event CRUD and derived-field refresh.
//!
//! Events carry a denormalized `daysLeftOrPassed` column: the whole-day
//! difference between the event date and "today", recomputed at create and
//! update time and by [`refresh_derived_fields`]. Staleness between refreshes
//! is tolerated; the refresh is intended to run once per session start, not on
//! a background timer.
//!
//! The store does not own the notification lifecycle. Callers cancel and
//! reschedule reminders around `update_event` and `delete_event` (see the
//! `reminders` module).

use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::{debug, warn};

use super::entries::date_key;

/// A countdown event.
///
/// `days_left_or_passed` is derived, never an independent source of truth:
/// negative when the event has passed, zero when it is today, positive when
/// upcoming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownEvent {
    pub id: String,
    pub event_date: NaiveDate,
    pub name: String,
    pub days_left_or_passed: i64,
    pub is_pinned: bool,
    pub note: String,
    /// Reminder lead time in days, or `-1` for no reminder.
    pub advance_notice: i32,
    pub tag: String,
}

/// Fields supplied by the caller when creating or replacing an event.
///
/// The day count is not part of the draft; it is computed at write time.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub id: String,
    pub name: String,
    pub event_date: NaiveDate,
    pub is_pinned: bool,
    pub note: String,
    pub advance_notice: i32,
    pub tag: String,
}

/// Whole-day count from `today` to `event_date`.
///
/// Both sides are already calendar days, so this is an exact subtraction with
/// no timestamp truncation involved.
pub fn days_left_or_passed(event_date: NaiveDate, today: NaiveDate) -> i64 {
    (event_date - today).num_days()
}

/// Inserts a new event, computing the day count at insert time.
///
/// An empty name aborts the create as a no-op and returns `Ok(false)`; the
/// caller dismisses silently rather than raising.
///
/// # Errors
///
/// Returns an error if the database operation fails (including a duplicate id).
pub fn add_event(conn: &Connection, draft: &EventDraft, today: NaiveDate) -> AppResult<bool> {
    if draft.name.is_empty() {
        warn!("Skipping event create with empty name");
        return Ok(false);
    }

    let days = days_left_or_passed(draft.event_date, today);
    debug!("Adding event {} ({} days out)", draft.id, days);

    conn.execute(
        "INSERT INTO Event (id, eventDate, eventName, daysLeftOrPassed, isPinned, note, advanceNotice, tag)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            draft.id,
            date_key(draft.event_date),
            draft.name,
            days,
            draft.is_pinned as i32,
            draft.note,
            draft.advance_notice,
            draft.tag,
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(true)
}

/// Replaces every field of an existing event except its id.
///
/// Recomputes the day count. An empty name aborts the update as a no-op and
/// returns `Ok(false)`. The caller must independently cancel and reschedule
/// any reminder tied to the id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn update_event(conn: &Connection, draft: &EventDraft, today: NaiveDate) -> AppResult<bool> {
    if draft.name.is_empty() {
        warn!("Skipping event update with empty name");
        return Ok(false);
    }

    let days = days_left_or_passed(draft.event_date, today);
    debug!("Updating event {} ({} days out)", draft.id, days);

    conn.execute(
        "UPDATE Event SET eventDate = ?1, eventName = ?2, daysLeftOrPassed = ?3, isPinned = ?4,
         note = ?5, advanceNotice = ?6, tag = ?7 WHERE id = ?8",
        params![
            date_key(draft.event_date),
            draft.name,
            days,
            draft.is_pinned as i32,
            draft.note,
            draft.advance_notice,
            draft.tag,
            draft.id,
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(true)
}

/// Deletes an event by id.
///
/// Idempotent: deleting an absent id is not an error. The caller cancels any
/// pending reminder under the same id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_event(conn: &Connection, id: &str) -> AppResult<()> {
    debug!("Deleting event {}", id);

    conn.execute("DELETE FROM Event WHERE id = ?1", params![id])
        .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Retrieves all events, in no guaranteed order.
///
/// Rows whose date column does not parse as `YYYY-MM-DD` are skipped.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn fetch_events(conn: &Connection) -> AppResult<Vec<CountdownEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, eventDate, eventName, daysLeftOrPassed, isPinned, note, advanceNotice, tag
             FROM Event",
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, i32>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, i32>(6)?,
                row.get::<_, String>(7)?,
            ))
        })
        .map_err(DatabaseError::Sqlite)?;

    let mut events = Vec::new();
    for row in rows {
        let (id, date_str, name, days, pinned, note, advance_notice, tag) =
            row.map_err(DatabaseError::Sqlite)?;
        let event_date = match NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!("Skipping event {} with unparseable date {:?}", id, date_str);
                continue;
            }
        };
        events.push(CountdownEvent {
            id,
            event_date,
            name,
            days_left_or_passed: days,
            is_pinned: pinned == 1,
            note,
            advance_notice,
            tag,
        });
    }

    Ok(events)
}

/// Recomputes and persists the day count for every stored event.
///
/// This is the single refresh point for the denormalized column; nothing else
/// mutates it ad hoc. Idempotent for a fixed `today`.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn refresh_derived_fields(conn: &Connection, today: NaiveDate) -> AppResult<()> {
    debug!("Refreshing daysLeftOrPassed for all events");

    let events = fetch_events(conn)?;
    for event in &events {
        let days = days_left_or_passed(event.event_date, today);
        conn.execute(
            "UPDATE Event SET daysLeftOrPassed = ?1 WHERE id = ?2",
            params![days, event.id],
        )
        .map_err(DatabaseError::Sqlite)?;
    }

    Ok(())
}

/// Retrieves the tag of an event by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no event exists for the given id.
pub fn fetch_tag(conn: &Connection, id: &str) -> AppResult<Option<String>> {
    let result = conn.query_row(
        "SELECT tag FROM Event WHERE id = ?1",
        params![id],
        |row| row.get(0),
    );

    match result {
        Ok(tag) => Ok(Some(tag)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
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

    fn draft(id: &str, name: &str, event_date: NaiveDate) -> EventDraft {
        EventDraft {
            id: id.to_string(),
            name: name.to_string(),
            event_date,
            is_pinned: false,
            note: String::new(),
            advance_notice: -1,
            tag: String::new(),
        }
    }

    #[test]
    fn test_days_left_or_passed() {
        assert_eq!(days_left_or_passed(d("2024-01-20"), d("2024-01-10")), 10);
        assert_eq!(days_left_or_passed(d("2024-01-10"), d("2024-01-10")), 0);
        assert_eq!(days_left_or_passed(d("2024-01-05"), d("2024-01-10")), -5);
        // Leap day
        assert_eq!(days_left_or_passed(d("2024-03-01"), d("2024-02-28")), 2);
    }

    #[test]
    fn test_add_event_computes_days() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        let added = add_event(&conn, &draft("e1", "Birthday", d("2024-01-20")), today).unwrap();
        assert!(added);

        let events = fetch_events(&conn).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].days_left_or_passed, 10);
        assert_eq!(events[0].name, "Birthday");
    }

    #[test]
    fn test_add_event_empty_name_skipped() {
        let conn = setup_test_db();
        let added = add_event(&conn, &draft("e1", "", d("2024-01-20")), d("2024-01-10")).unwrap();
        assert!(!added);
        assert!(fetch_events(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_update_event_full_replace() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        add_event(&conn, &draft("e1", "Birthday", d("2024-01-20")), today).unwrap();

        let mut replacement = draft("e1", "Party", d("2024-02-01"));
        replacement.is_pinned = true;
        replacement.note = "bring cake".to_string();
        replacement.advance_notice = 2;
        replacement.tag = "Anniversary".to_string();
        let updated = update_event(&conn, &replacement, today).unwrap();
        assert!(updated);

        let events = fetch_events(&conn).unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.name, "Party");
        assert_eq!(event.event_date, d("2024-02-01"));
        assert_eq!(event.days_left_or_passed, 22);
        assert!(event.is_pinned);
        assert_eq!(event.note, "bring cake");
        assert_eq!(event.advance_notice, 2);
        assert_eq!(event.tag, "Anniversary");
    }

    #[test]
    fn test_update_event_empty_name_skipped() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        add_event(&conn, &draft("e1", "Birthday", d("2024-01-20")), today).unwrap();
        let updated = update_event(&conn, &draft("e1", "", d("2024-02-01")), today).unwrap();
        assert!(!updated);

        // Unchanged
        let events = fetch_events(&conn).unwrap();
        assert_eq!(events[0].name, "Birthday");
    }

    #[test]
    fn test_delete_event_idempotent() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        add_event(&conn, &draft("e1", "Birthday", d("2024-01-20")), today).unwrap();
        delete_event(&conn, "e1").unwrap();
        assert!(fetch_events(&conn).unwrap().is_empty());

        // Absent id is fine
        delete_event(&conn, "e1").unwrap();
        delete_event(&conn, "never-existed").unwrap();
    }

    #[test]
    fn test_refresh_after_simulated_day() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        add_event(&conn, &draft("e1", "Birthday", d("2024-01-20")), today).unwrap();
        assert_eq!(fetch_events(&conn).unwrap()[0].days_left_or_passed, 10);

        // One simulated day later
        refresh_derived_fields(&conn, d("2024-01-11")).unwrap();
        assert_eq!(fetch_events(&conn).unwrap()[0].days_left_or_passed, 9);
    }

    #[test]
    fn test_refresh_idempotent() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        add_event(&conn, &draft("e1", "Birthday", d("2024-01-20")), today).unwrap();
        add_event(&conn, &draft("e2", "Trip", d("2024-01-05")), today).unwrap();

        refresh_derived_fields(&conn, today).unwrap();
        let first: Vec<i64> = fetch_events(&conn)
            .unwrap()
            .iter()
            .map(|e| e.days_left_or_passed)
            .collect();

        refresh_derived_fields(&conn, today).unwrap();
        let second: Vec<i64> = fetch_events(&conn)
            .unwrap()
            .iter()
            .map(|e| e.days_left_or_passed)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_fetch_tag() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        let mut with_tag = draft("e1", "Holiday trip", d("2024-03-01"));
        with_tag.tag = "Holiday".to_string();
        add_event(&conn, &with_tag, today).unwrap();

        assert_eq!(fetch_tag(&conn, "e1").unwrap(), Some("Holiday".to_string()));
        assert_eq!(fetch_tag(&conn, "missing").unwrap(), None);
    }

    #[test]
    fn test_event_passed_negative_days() {
        let conn = setup_test_db();
        let today = d("2024-01-10");

        add_event(&conn, &draft("e1", "Old deadline", d("2024-01-01")), today).unwrap();
        assert_eq!(fetch_events(&conn).unwrap()[0].days_left_or_passed, -9);
    }
}
