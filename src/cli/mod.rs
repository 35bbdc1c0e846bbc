use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// A personal diary and countdown-event tracker
#[derive(Parser, Debug)]
#[clap(name = "daybook", about = "A personal diary and countdown-event tracker")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Saves (or replaces) the diary entry for a date
    Save {
        /// Entry date (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
        /// Entry text
        text: String,
        /// Mood score, 0-16; omit to leave the mood unset
        #[clap(long, default_value_t = -1)]
        mood: i32,
    },

    /// Shows the diary entry for a date
    Show {
        /// Entry date (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Deletes the diary entry for a date
    Delete {
        /// Entry date (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Prints the daily summary for a date
    Summary {
        /// Entry date (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Prints the mood scores of the most recent entries
    Moods,

    /// Countdown event operations
    #[clap(subcommand)]
    Event(EventCommand),

    /// Exports all diary entries to a plain-text file
    Export {
        /// Destination file path
        path: PathBuf,
    },

    /// Shows or updates user settings
    Settings {
        /// Enable or disable event reminders
        #[clap(long, value_parser = ["on", "off"])]
        reminders: Option<String>,
        /// Color theme index
        #[clap(long)]
        theme: Option<usize>,
        /// Display language tag
        #[clap(long)]
        locale: Option<String>,
    },

    /// Fetches the current weather for a coordinate pair
    #[clap(allow_negative_numbers = true)]
    Weather {
        /// Latitude in decimal degrees
        lat: f64,
        /// Longitude in decimal degrees
        lon: f64,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventCommand {
    /// Adds a countdown event
    Add {
        /// Event name
        name: String,
        /// Event date (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
        /// Free-form note
        #[clap(long, default_value = "")]
        note: String,
        /// Pin the event to the top of lists
        #[clap(long)]
        pinned: bool,
        /// Reminder lead time in days; omit for no reminder
        #[clap(long, default_value_t = -1)]
        advance_notice: i32,
        /// Event tag
        #[clap(long, default_value = "")]
        tag: String,
    },

    /// Replaces every field of an existing event
    Update {
        /// Event id
        id: String,
        /// Event name
        name: String,
        /// Event date (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
        /// Free-form note
        #[clap(long, default_value = "")]
        note: String,
        /// Pin the event to the top of lists
        #[clap(long)]
        pinned: bool,
        /// Reminder lead time in days; omit for no reminder
        #[clap(long, default_value_t = -1)]
        advance_notice: i32,
        /// Event tag
        #[clap(long, default_value = "")]
        tag: String,
    },

    /// Removes an event by id
    Remove {
        /// Event id
        id: String,
    },

    /// Lists all events
    List,

    /// Recomputes the day counts against today's date
    Refresh,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

/// Parses a date argument in YYYY-MM-DD or YYYYMMDD form.
pub fn parse_date_arg(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::from_str(date_str).or_else(|_| NaiveDate::parse_from_str(date_str, "%Y%m%d"))
}
