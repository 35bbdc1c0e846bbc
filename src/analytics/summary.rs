//! Daily summary composition.
//!
//! Pulls the entry text and mood for a date, extracts keywords, classifies
//! sentiment, picks (and memoizes) a cheer-up message, and assembles the
//! summary text shown for that day.

use crate::db::entries::{self, date_key, MOOD_UNSET};
use crate::db::memos;
use crate::errors::AppResult;
use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::debug;

use super::keywords::extract_keywords;
use super::messages::{cheer_up_pool, mood_description};
use super::sentiment::{classify_sentiment, Sentiment};

/// A stable per-date seed: the first eight bytes of the blake3 hash of the
/// canonical `YYYY-MM-DD` key. The same date yields the same seed on every
/// run, so seeded sentiment labels and cheer-up picks survive restarts.
pub fn stable_date_seed(date: NaiveDate) -> i64 {
    let hash = blake3::hash(date_key(date).as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    i64::from_le_bytes(prefix)
}

/// Picks the comparison sentence for a `(today, yesterday)` mood pair.
///
/// `-1` marks an absent or unset mood on either side.
pub fn mood_comparison(today: i32, yesterday: i32) -> &'static str {
    if today == MOOD_UNSET && yesterday == MOOD_UNSET {
        "Start tracking your mood today!"
    } else if yesterday == MOOD_UNSET {
        "No mood selected for yesterday."
    } else if today > yesterday {
        "You're feeling more upbeat today!"
    } else if today < yesterday {
        "Today's a bit tougher than yesterday, but that's okay."
    } else {
        "Your mood is consistent with yesterday."
    }
}

/// Returns the cheer-up message for a date, memoizing on first use.
///
/// Read-through: an existing memo is returned as-is even when `category`
/// differs from the one it was selected under. On a miss the message is
/// chosen by `abs(seed) mod pool_len` over the category's pool, persisted,
/// and returned.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn cheer_up_message(
    conn: &Connection,
    date: NaiveDate,
    category: Sentiment,
) -> AppResult<String> {
    if let Some(message) = memos::fetch_message(conn, date)? {
        return Ok(message);
    }

    let pool = cheer_up_pool(category);
    let index = (stable_date_seed(date).unsigned_abs() % pool.len() as u64) as usize;
    let message = pool[index];

    debug!("Selected {} cheer-up message for {}", category, date);
    memos::save_message(conn, date, message)?;

    Ok(message.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the full summary text for a date.
///
/// The summary is a keyword line, a mood line (with the yesterday comparison
/// when the mood is set and in range), and the date's cheer-up message. A date
/// with no entry yields `"No entry for this day."`. A persisted mood outside
/// `[0, 16]` that isn't the `-1` sentinel yields the invalid-score line rather
/// than an out-of-bounds descriptor lookup.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn build_daily_summary(conn: &Connection, date: NaiveDate) -> AppResult<String> {
    let text = entries::fetch_text(conn, date)?;
    let mood = entries::fetch_mood(conn, date)?;

    let (text, mood) = match (text, mood) {
        (Some(text), Some(mood)) => (text, mood),
        _ => return Ok("No entry for this day.".to_string()),
    };

    let keywords: Vec<String> = extract_keywords(&text)
        .iter()
        .map(|k| capitalize(k))
        .collect();
    let keywords_line = keywords.join(", ");

    let category = classify_sentiment(&text, stable_date_seed(date));
    let cheer_up = cheer_up_message(conn, date, category)?;

    let mood_part = if mood == MOOD_UNSET {
        "No mood selected for this day.".to_string()
    } else if let Some(description) = mood_description(mood) {
        let (today, yesterday) = entries::fetch_mood_pair(conn, date)?;
        format!(
            "You felt {} on this day. {}",
            description,
            mood_comparison(today, yesterday)
        )
    } else {
        "Invalid mood score for this day.".to_string()
    };

    Ok(format!(
        "Keywords of the Day: \n{}. \n\n{}\n\n{}",
        keywords_line, mood_part, cheer_up
    ))
}
