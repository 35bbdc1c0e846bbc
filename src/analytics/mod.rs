//! Derived analytics over diary entries.
//!
//! Everything here is computed, never persisted, except the cheer-up message
//! memo which `summary` writes through the `db::memos` table. The routines are
//! pure functions of the entry text, the date, and the stored mood scores.

pub mod keywords;
pub mod messages;
pub mod script;
pub mod sentiment;
pub mod summary;

pub use keywords::{extract_keywords, MAX_KEYWORDS};
pub use messages::{cheer_up_pool, mood_description, MOOD_DESCRIPTIONS};
pub use sentiment::{classify_sentiment, Sentiment};
pub use summary::{build_daily_summary, cheer_up_message, mood_comparison, stable_date_seed};
