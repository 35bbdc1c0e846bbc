//! Event reminder triggers.
//!
//! The core computes when a reminder should fire and hands delivery to a
//! [`ReminderScheduler`] implementation. OS-level notification delivery is an
//! external collaborator; the shipped [`LogScheduler`] stands in for it by
//! logging the computed trigger.
//!
//! One pending reminder per event id: every (re)schedule cancels the previous
//! trigger under the same id first, and deleting an event cancels its trigger.

use crate::db::events::CountdownEvent;
use crate::errors::AppResult;
use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

/// Hour of day (local) at which reminders fire.
const REMINDER_HOUR: u32 = 9;

/// Delivery boundary for reminder triggers.
pub trait ReminderScheduler {
    /// Registers a trigger under `id`, replacing any prior trigger with the
    /// same id.
    fn schedule(&mut self, id: &str, fire_at: NaiveDateTime, title: &str, body: &str)
        -> AppResult<()>;

    /// Removes the pending trigger under `id`, if any. Idempotent.
    fn cancel(&mut self, id: &str) -> AppResult<()>;
}

/// Computes the single fire time for an event's reminder.
///
/// Fires at 09:00 local on `event_date - advance_notice` days; an
/// `advance_notice` of zero fires on the event day itself. Returns `None` when
/// `advance_notice` is negative (reminder disabled).
pub fn reminder_fire_at(event_date: NaiveDate, advance_notice: i32) -> Option<NaiveDateTime> {
    if advance_notice < 0 {
        return None;
    }

    let fire_date = if advance_notice == 0 {
        event_date
    } else {
        event_date.checked_sub_days(Days::new(advance_notice as u64))?
    };

    fire_date.and_hms_opt(REMINDER_HOUR, 0, 0)
}

/// Cancels and, when the event carries a reminder, reschedules its trigger.
///
/// Cancel-then-schedule under the same id keeps at most one pending trigger
/// per event, including after an update that changes the date or lead time.
///
/// # Errors
///
/// Returns an error if the scheduler rejects the operation.
pub fn sync_event_reminder(
    scheduler: &mut dyn ReminderScheduler,
    event: &CountdownEvent,
) -> AppResult<()> {
    scheduler.cancel(&event.id)?;

    if let Some(fire_at) = reminder_fire_at(event.event_date, event.advance_notice) {
        debug!("Scheduling reminder for event {} at {}", event.id, fire_at);
        let body = format!("{} is in {} day(s).", event.name, event.advance_notice);
        scheduler.schedule(&event.id, fire_at, "Upcoming Event", &body)?;
    }

    Ok(())
}

/// Cancels the trigger for a deleted event.
///
/// # Errors
///
/// Returns an error if the scheduler rejects the operation.
pub fn cancel_event_reminder(scheduler: &mut dyn ReminderScheduler, id: &str) -> AppResult<()> {
    scheduler.cancel(id)
}

/// Scheduler that logs triggers instead of delivering them.
#[derive(Debug, Default)]
pub struct LogScheduler;

impl ReminderScheduler for LogScheduler {
    fn schedule(
        &mut self,
        id: &str,
        fire_at: NaiveDateTime,
        title: &str,
        body: &str,
    ) -> AppResult<()> {
        info!("Reminder {} at {}: {} - {}", id, fire_at, title, body);
        Ok(())
    }

    fn cancel(&mut self, id: &str) -> AppResult<()> {
        debug!("Cancelled reminder {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn event(id: &str, event_date: NaiveDate, advance_notice: i32) -> CountdownEvent {
        CountdownEvent {
            id: id.to_string(),
            event_date,
            name: "Birthday".to_string(),
            days_left_or_passed: 0,
            is_pinned: false,
            note: String::new(),
            advance_notice,
            tag: String::new(),
        }
    }

    /// Records calls so the cancel-then-schedule protocol can be asserted.
    #[derive(Default)]
    struct RecordingScheduler {
        calls: Vec<String>,
    }

    impl ReminderScheduler for RecordingScheduler {
        fn schedule(
            &mut self,
            id: &str,
            fire_at: NaiveDateTime,
            _title: &str,
            body: &str,
        ) -> AppResult<()> {
            self.calls.push(format!("schedule {} {} {}", id, fire_at, body));
            Ok(())
        }

        fn cancel(&mut self, id: &str) -> AppResult<()> {
            self.calls.push(format!("cancel {}", id));
            Ok(())
        }
    }

    #[test]
    fn test_fire_at_with_advance_notice() {
        let fire_at = reminder_fire_at(d("2024-01-20"), 3).unwrap();
        assert_eq!(fire_at.date(), d("2024-01-17"));
        assert_eq!(fire_at.time(), chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_fire_at_on_the_day() {
        let fire_at = reminder_fire_at(d("2024-01-20"), 0).unwrap();
        assert_eq!(fire_at.date(), d("2024-01-20"));
    }

    #[test]
    fn test_fire_at_disabled() {
        assert_eq!(reminder_fire_at(d("2024-01-20"), -1), None);
    }

    #[test]
    fn test_fire_at_crosses_month_boundary() {
        let fire_at = reminder_fire_at(d("2024-03-01"), 2).unwrap();
        assert_eq!(fire_at.date(), d("2024-02-28"));
    }

    #[test]
    fn test_sync_cancels_then_schedules() {
        let mut scheduler = RecordingScheduler::default();
        sync_event_reminder(&mut scheduler, &event("e1", d("2024-01-20"), 3)).unwrap();

        assert_eq!(scheduler.calls.len(), 2);
        assert_eq!(scheduler.calls[0], "cancel e1");
        assert!(scheduler.calls[1].starts_with("schedule e1 2024-01-17"));
        assert!(scheduler.calls[1].contains("Birthday is in 3 day(s)."));
    }

    #[test]
    fn test_sync_without_reminder_only_cancels() {
        let mut scheduler = RecordingScheduler::default();
        sync_event_reminder(&mut scheduler, &event("e1", d("2024-01-20"), -1)).unwrap();

        assert_eq!(scheduler.calls, vec!["cancel e1"]);
    }

    #[test]
    fn test_cancel_event_reminder() {
        let mut scheduler = RecordingScheduler::default();
        cancel_event_reminder(&mut scheduler, "e1").unwrap();
        assert_eq!(scheduler.calls, vec!["cancel e1"]);
    }
}
