/*!
# Daybook

Daybook is a personal diary data core: calendar-keyed entries with mood
scores, a countdown-event tracker, and derived analytics that compose a
daily summary. It ships as a library plus a thin CLI binary.

## Core Features

- One diary entry per calendar day, with upsert semantics and an optional
  mood score from a 17-slot vocabulary
- Countdown events with a denormalized day count and reminder lead times
- A daily summary combining extracted keywords, a sentiment-selected
  cheer-up message, and a mood comparison against the previous day
- Plain-text export of the full diary
- A cancellable current-weather lookup for display alongside an entry

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Process configuration and persisted user settings
- `db`: SQLite storage (entries, events, cheer-up memos, schema)
- `analytics`: Pure derived computations over entry text and moods
- `reminders`: Reminder trigger computation and the scheduler boundary
- `export`: Plain-text report generation
- `weather`: External current-weather boundary
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use daybook::db::Database;
use daybook::Config;

fn main() -> daybook::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;
    config.ensure_data_dir()?;

    let database = Database::open(&config.db_path())?;
    database.initialize_schema()?;

    let conn = database.get_conn()?;
    let date = chrono::Local::now().date_naive();
    println!("{}", daybook::analytics::build_daily_summary(&conn, date)?);
    Ok(())
}
```
*/

/// Derived analytics: keywords, sentiment, summary composition
pub mod analytics;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and persisted user settings
pub mod config;
/// SQLite storage for entries, events and cheer-up memos
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Plain-text export of the diary
pub mod export;
/// Reminder trigger computation and the scheduler boundary
pub mod reminders;
/// Current-weather lookup boundary
pub mod weather;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::{Config, Settings};
pub use errors::{AppError, AppResult};
