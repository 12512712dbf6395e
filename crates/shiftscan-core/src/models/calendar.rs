//! Calendar event payloads built from extracted shifts.
//!
//! The payload follows the shape calendar APIs accept for timed events: a
//! local `dateTime` plus an IANA `timeZone` on each end. Submitting it is left
//! to the caller.

use serde::{Deserialize, Serialize};

use super::config::CalendarConfig;
use super::shift::ShiftRecord;

/// A timed calendar event for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: EventTime,
    pub end: EventTime,
    pub color_id: String,
    pub reminders: Reminders,
}

/// One end of a timed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// Local date-time, `yyyy-MM-ddTHH:mm:ss`.
    pub date_time: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    pub method: String,
    pub minutes: u32,
}

impl CalendarEvent {
    /// Build the event payload for a shift.
    pub fn from_shift(shift: &ShiftRecord, config: &CalendarConfig) -> Self {
        let description = if shift.notes.is_empty() {
            "Work shift".to_string()
        } else {
            shift.notes.clone()
        };

        Self {
            summary: format!("{} - {}", config.title_prefix, shift.location),
            description,
            location: shift.location.clone(),
            start: EventTime {
                date_time: shift.start_iso(),
                time_zone: config.time_zone.clone(),
            },
            end: EventTime {
                date_time: shift.end_iso(),
                time_zone: config.time_zone.clone(),
            },
            color_id: config.color_id.clone(),
            reminders: Reminders {
                use_default: false,
                overrides: config
                    .reminder_minutes
                    .iter()
                    .map(|&minutes| ReminderOverride {
                        method: "popup".to_string(),
                        minutes,
                    })
                    .collect(),
            },
        }
    }
}

/// Build event payloads for a list of shifts, preserving order.
pub fn events_for_shifts(shifts: &[ShiftRecord], config: &CalendarConfig) -> Vec<CalendarEvent> {
    shifts
        .iter()
        .map(|shift| CalendarEvent::from_shift(shift, config))
        .collect()
}
