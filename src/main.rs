/*!
# Daybook - A Personal Diary CLI

Command-line front end for the daybook data core. Each subcommand maps to
one core operation: saving and reading entries, composing the daily summary,
managing countdown events, exporting, adjusting settings, and the weather
lookup.

## Usage

```
daybook <COMMAND>

Commands:
  save      Saves (or replaces) the diary entry for a date
  show      Shows the diary entry for a date
  delete    Deletes the diary entry for a date
  summary   Prints the daily summary for a date
  moods     Prints the mood scores of the most recent entries
  event     Countdown event operations
  export    Exports all diary entries to a plain-text file
  settings  Shows or updates user settings
  weather   Fetches the current weather for a coordinate pair
```

## Configuration

- `DAYBOOK_DIR`: The data directory (defaults to "~/Documents/daybook")
- `DAYBOOK_WEATHER_KEY`: API key for the weather lookup
- `RUST_LOG`: Log filter (defaults to "warn", or "debug" with --verbose)
*/

use chrono::Local;
use daybook::analytics;
use daybook::cli::{parse_date_arg, CliArgs, Command, EventCommand};
use daybook::config::{Config, Settings, THEME_COUNT};
use daybook::db::{entries, events, Database};
use daybook::errors::{AppError, AppResult};
use daybook::export::{self, ExportOutcome};
use daybook::reminders::{self, LogScheduler};
use daybook::weather::{WeatherClient, WeatherOutcome};
use rusqlite::Connection;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting daybook");

    let config = Config::load()?;
    config.validate()?;
    config.ensure_data_dir()?;
    debug!("Data directory: {}", config.data_dir.display());

    let database = Database::open(&config.db_path())?;
    database.initialize_schema()?;

    let mut settings = Settings::load(&config.settings_path())?;
    let today = Local::now().date_naive();

    let conn = database.get_conn()?;
    run_command(args.command, &conn, &config, &mut settings, today)
}

fn run_command(
    command: Command,
    conn: &Connection,
    config: &Config,
    settings: &mut Settings,
    today: chrono::NaiveDate,
) -> AppResult<()> {
    match command {
        Command::Save { date, text, mood } => {
            let date = parse_date(&date)?;
            entries::save_entry(conn, date, &text, mood)?;
            println!("Saved entry for {}.", date);
        }

        Command::Show { date } => {
            let date = parse_date(&date)?;
            match entries::fetch_text(conn, date)? {
                Some(text) => {
                    println!("{}", text);
                    if let Some(mood) = entries::fetch_mood(conn, date)? {
                        if let Some(description) = analytics::mood_description(mood) {
                            println!("Mood: {} ({})", mood, description);
                        } else if mood != entries::MOOD_UNSET {
                            println!("Mood: {}", mood);
                        }
                    }
                }
                None => println!("No entry for this day."),
            }
        }

        Command::Delete { date } => {
            let date = parse_date(&date)?;
            entries::delete_entry(conn, date)?;
            println!("Deleted entry for {}.", date);
        }

        Command::Summary { date } => {
            let date = parse_date(&date)?;
            println!("{}", analytics::build_daily_summary(conn, date)?);
        }

        Command::Moods => {
            let series = entries::fetch_recent_mood_series(conn, 7)?;
            if series.is_empty() {
                println!("No entries yet.");
            }
            for sample in series {
                let label = analytics::mood_description(sample.score).unwrap_or("unset");
                println!("{}  {:>2}  {}", sample.date, sample.score, label);
            }
        }

        Command::Event(event_command) => {
            run_event_command(event_command, conn, settings, today)?;
        }

        Command::Export { path } => match export::export_to_file(conn, &path)? {
            ExportOutcome::Written(count) => {
                println!("Export successful. {} entries written to {}.", count, path.display());
            }
            ExportOutcome::NothingToExport => println!("No entries to export."),
        },

        Command::Settings {
            reminders,
            theme,
            locale,
        } => {
            let mut changed = false;
            if let Some(value) = reminders {
                settings.reminders_enabled = value == "on";
                changed = true;
            }
            if let Some(index) = theme {
                if index >= THEME_COUNT {
                    return Err(AppError::Config(format!(
                        "Theme index {} out of range (0..{})",
                        index, THEME_COUNT
                    )));
                }
                settings.theme_index = index;
                changed = true;
            }
            if let Some(tag) = locale {
                settings.locale = tag;
                changed = true;
            }
            if changed {
                settings.save(&config.settings_path())?;
            }
            println!(
                "reminders: {}\ntheme: {}\nlocale: {}",
                if settings.reminders_enabled { "on" } else { "off" },
                settings.theme_index,
                settings.locale
            );
        }

        Command::Weather { lat, lon } => {
            let api_key = std::env::var("DAYBOOK_WEATHER_KEY")
                .map_err(|_| AppError::Config("DAYBOOK_WEATHER_KEY is not set".to_string()))?;

            let client = WeatherClient::new(api_key);
            let runtime = tokio::runtime::Runtime::new()?;
            let outcome = runtime.block_on(client.fetch_current(lat, lon, &CancellationToken::new()));

            match outcome {
                WeatherOutcome::Current(weather) => {
                    let celsius = weather.temperature_kelvin - 273.15;
                    if weather.station.is_empty() {
                        println!("{} ({}), {:.1} C", weather.condition, weather.description, celsius);
                    } else {
                        println!(
                            "{}: {} ({}), {:.1} C",
                            weather.station, weather.condition, weather.description, celsius
                        );
                    }
                }
                WeatherOutcome::Failed(e) => return Err(e.into()),
                WeatherOutcome::Cancelled => println!("Weather lookup cancelled."),
            }
        }
    }

    Ok(())
}

fn run_event_command(
    command: EventCommand,
    conn: &Connection,
    settings: &Settings,
    today: chrono::NaiveDate,
) -> AppResult<()> {
    let mut scheduler = LogScheduler;

    match command {
        EventCommand::Add {
            name,
            date,
            note,
            pinned,
            advance_notice,
            tag,
        } => {
            let event_date = parse_date(&date)?;
            let draft = events::EventDraft {
                id: uuid::Uuid::new_v4().to_string(),
                name,
                event_date,
                is_pinned: pinned,
                note,
                advance_notice,
                tag,
            };

            if !events::add_event(conn, &draft, today)? {
                println!("Event name must not be empty; nothing added.");
                return Ok(());
            }

            if settings.reminders_enabled {
                sync_reminder(conn, &mut scheduler, &draft.id)?;
            }
            println!("Added event {} ({}).", draft.id, event_date);
        }

        EventCommand::Update {
            id,
            name,
            date,
            note,
            pinned,
            advance_notice,
            tag,
        } => {
            let event_date = parse_date(&date)?;
            let draft = events::EventDraft {
                id: id.clone(),
                name,
                event_date,
                is_pinned: pinned,
                note,
                advance_notice,
                tag,
            };

            if !events::update_event(conn, &draft, today)? {
                println!("Event name must not be empty; nothing updated.");
                return Ok(());
            }

            if settings.reminders_enabled {
                sync_reminder(conn, &mut scheduler, &id)?;
            }
            println!("Updated event {}.", id);
        }

        EventCommand::Remove { id } => {
            events::delete_event(conn, &id)?;
            reminders::cancel_event_reminder(&mut scheduler, &id)?;
            println!("Removed event {}.", id);
        }

        EventCommand::List => {
            let mut all = events::fetch_events(conn)?;
            if all.is_empty() {
                println!("No events.");
                return Ok(());
            }
            // Pinned first, then soonest
            all.sort_by_key(|e| (!e.is_pinned, e.days_left_or_passed));
            for event in all {
                let pin = if event.is_pinned { "*" } else { " " };
                println!(
                    "{} {}  {}  {:>4} day(s)  {}",
                    pin, event.id, event.event_date, event.days_left_or_passed, event.name
                );
            }
        }

        EventCommand::Refresh => {
            events::refresh_derived_fields(conn, today)?;
            println!("Refreshed day counts.");
        }
    }

    Ok(())
}

/// Reschedules the reminder for a stored event after a create or update.
fn sync_reminder(
    conn: &Connection,
    scheduler: &mut LogScheduler,
    id: &str,
) -> AppResult<()> {
    let all = events::fetch_events(conn)?;
    if let Some(event) = all.iter().find(|e| e.id == id) {
        reminders::sync_event_reminder(scheduler, event)?;
    }
    Ok(())
}

fn parse_date(date_str: &str) -> AppResult<chrono::NaiveDate> {
    parse_date_arg(date_str)
        .map_err(|e| AppError::Journal(format!("Invalid date format: {}", e)))
}
