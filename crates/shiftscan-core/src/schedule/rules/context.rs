//! Per-call parse context: year hint and week header dates.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::trace;

use super::lines::RawLine;
use super::patterns::{DATE_WITH_YEAR, WEEK_RANGE};

/// How many leading lines may supply the year hint.
const YEAR_HINT_LINES: usize = 5;

/// Inference aids derived once from the whole input of a single parse call.
///
/// Built fresh for every call and passed down by reference; nothing here is
/// stored on the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    /// Reference date of the call.
    pub today: NaiveDate,
    /// Year assumed for date tokens that omit one.
    pub year_hint: i32,
    /// Weekday dates from a "MM/DD/YYYY - MM/DD/YYYY" header, if present.
    pub week_dates: Option<WeekDateMap>,
}

impl ParseContext {
    pub fn build(lines: &[RawLine], text: &str, today: NaiveDate) -> Self {
        let year_hint = year_hint(lines).unwrap_or_else(|| today.year());
        let week_dates = WeekDateMap::from_text(text);

        trace!(
            year_hint,
            week_start = ?week_dates.as_ref().map(|w| w.start()),
            "built parse context"
        );

        Self {
            today,
            year_hint,
            week_dates,
        }
    }
}

fn year_hint(lines: &[RawLine]) -> Option<i32> {
    lines
        .iter()
        .take(YEAR_HINT_LINES)
        .find_map(|line| DATE_WITH_YEAR.captures(&line.text))
        .and_then(|caps| caps[1].parse().ok())
}

/// Weekday name to calendar date, for the seven days of a week header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDateMap {
    start: NaiveDate,
    days: HashMap<String, NaiveDate>,
}

impl WeekDateMap {
    /// Seven consecutive dates beginning at `start`, keyed by full and
    /// three-letter weekday names.
    pub fn new(start: NaiveDate) -> Self {
        let mut days = HashMap::with_capacity(14);
        for offset in 0..7 {
            let date = start + Duration::days(offset);
            let full = weekday_name(date.weekday());
            days.insert(full[..3].to_string(), date);
            days.insert(full.to_string(), date);
        }
        Self { start, days }
    }

    /// Find a "MM/DD/YYYY - MM/DD/YYYY" header anywhere in `text`.
    pub fn from_text(text: &str) -> Option<Self> {
        let caps = WEEK_RANGE.captures(text)?;
        let start = NaiveDate::parse_from_str(&caps[1], "%m/%d/%Y").ok()?;
        Some(Self::new(start))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Case-insensitive lookup; "Tues" and "Thurs" resolve by their first
    /// three letters.
    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        let key = name.trim_end_matches('.').to_lowercase();
        self.days
            .get(&key)
            .or_else(|| key.get(..3).and_then(|abbr| self.days.get(abbr)))
            .copied()
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parse a weekday name or abbreviation ("Mon", "tues", "THURSDAY").
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let lower = name.to_lowercase();
    match lower.get(..3)? {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
