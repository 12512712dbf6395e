//! Time range extraction for shift lines.

use chrono::NaiveTime;
use regex::{Captures, Regex};

use super::patterns::{TIME_RANGE, TIME_RANGE_LOOSE};
use super::{ExtractionMatch, FieldExtractor};

/// Start and end of a shift, in 24-hour time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Time range extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeExtractor;

impl TimeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First match of `pattern` in `text` that reads as a valid time range.
    fn try_pattern(pattern: &Regex, text: &str, loose: bool) -> Option<ExtractionMatch<TimeRange>> {
        pattern
            .captures_iter(text)
            .find_map(|caps| Self::from_captures(&caps, loose))
    }

    fn from_captures(caps: &Captures<'_>, loose: bool) -> Option<ExtractionMatch<TimeRange>> {
        let start_raw = caps.get(1)?.as_str();
        let end_raw = caps.get(3)?.as_str();
        let start_meridiem = caps.get(2).map(|m| m.as_str());
        let end_meridiem = caps.get(4).map(|m| m.as_str());

        // "1 - 5" on its own is a count or a range of days, not a time.
        if loose
            && start_meridiem.is_none()
            && end_meridiem.is_none()
            && !start_raw.contains(':')
            && !end_raw.contains(':')
        {
            return None;
        }

        let start = normalize_time(start_raw, start_meridiem)?;
        let end = normalize_time(end_raw, end_meridiem)?;

        let full = caps.get(0)?;
        Some(
            ExtractionMatch::new(TimeRange { start, end }, full.as_str().trim())
                .with_position(full.start(), full.end()),
        )
    }
}

impl FieldExtractor for TimeExtractor {
    type Output = ExtractionMatch<TimeRange>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        Self::try_pattern(&TIME_RANGE, text, false)
            .or_else(|| Self::try_pattern(&TIME_RANGE_LOOSE, text, true))
    }
}

/// Convert `H[:mm]` plus an optional meridiem to a 24-hour clock time.
///
/// Without a meridiem, hours 1-7 are taken as PM and 8-12 as AM (12 is
/// noon). Early-morning shifts written without AM are misread; schedules
/// that start before 8 usually say so.
pub fn normalize_time(time: &str, meridiem: Option<&str>) -> Option<NaiveTime> {
    let (hour_str, minute_str) = time.split_once(':').unwrap_or((time, "0"));
    let mut hour: u32 = hour_str.trim().parse().ok()?;
    let minute: u32 = minute_str.trim().parse().ok()?;

    match meridiem.map(|m| m.to_ascii_lowercase().replace('.', "")) {
        Some(m) if m == "pm" => {
            if hour != 12 {
                hour += 12;
            }
        }
        Some(_) => {
            if hour == 12 {
                hour = 0;
            }
        }
        None => {
            if (1..=7).contains(&hour) {
                hour += 12;
            }
        }
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}
