//! Plain-text export of all diary entries.
//!
//! One `Date:`/`Text:`/`Mood:` triplet per entry, blank-line separated, in no
//! guaranteed order. The empty store is a distinct outcome rather than an
//! empty file, so callers can tell the user there was nothing to export.

use crate::db::entries::{self, date_key};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::info;

/// Outcome of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The report was written; carries the number of exported entries.
    Written(usize),
    /// The store held no entries; nothing was written.
    NothingToExport,
}

/// Renders all entries as a plain-text report.
///
/// Returns `None` when the store holds no entries.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn render_report(conn: &Connection) -> AppResult<Option<String>> {
    let all = entries::fetch_entries(conn)?;
    if all.is_empty() {
        return Ok(None);
    }

    let mut report = String::new();
    for entry in &all {
        report.push_str(&format!("Date: {}\n", date_key(entry.date)));
        report.push_str(&format!("Text: {}\n", entry.text));
        report.push_str(&format!("Mood: {}\n\n", entry.mood));
    }

    Ok(Some(report))
}

/// Exports all entries to a plain-text file at `path`.
///
/// # Errors
///
/// Returns an error if the database operation or the file write fails.
pub fn export_to_file(conn: &Connection, path: &Path) -> AppResult<ExportOutcome> {
    let report = match render_report(conn)? {
        Some(report) => report,
        None => return Ok(ExportOutcome::NothingToExport),
    };

    let count = report.matches("Date: ").count();
    fs::write(path, &report)?;
    info!("Exported {} entries to {}", count, path.display());

    Ok(ExportOutcome::Written(count))
}
