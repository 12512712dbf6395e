//! Deduplication and ordering of extracted shifts.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::context::parse_weekday;
use super::patterns::WEEKDAY;
use crate::models::shift::ShiftRecord;

/// Drop shifts whose `(date, start, end)` was already seen, keeping the first.
pub fn dedup_shifts(shifts: Vec<ShiftRecord>) -> Vec<ShiftRecord> {
    let mut seen = HashSet::with_capacity(shifts.len());
    shifts
        .into_iter()
        .filter(|shift| seen.insert(shift.dedup_key()))
        .collect()
}

/// Monday = 0 ... Sunday = 6, from the first weekday named in `text`.
pub fn weekday_index(text: &str) -> Option<u32> {
    WEEKDAY
        .find_iter(text)
        .find_map(|m| parse_weekday(m.as_str()))
        .map(|day| day.num_days_from_monday())
}

/// Compare two shifts: by the weekday written on their lines when both have
/// one and they differ, otherwise by date then start time.
pub fn compare_shifts(a: &ShiftRecord, b: &ShiftRecord) -> Ordering {
    if let (Some(wa), Some(wb)) = (weekday_index(&a.original_line), weekday_index(&b.original_line)) {
        if wa != wb {
            return wa.cmp(&wb);
        }
    }
    a.date.cmp(&b.date).then(a.start_time.cmp(&b.start_time))
}

/// Sort shifts with [`compare_shifts`].
///
/// The comparator mixes two keys and is not transitive across shifts with
/// and without a weekday, so a stable insertion sort is used: its result
/// depends only on the input order. Cost is quadratic in the number of
/// shifts, which stays small for a schedule.
pub fn order_shifts(mut shifts: Vec<ShiftRecord>) -> Vec<ShiftRecord> {
    for i in 1..shifts.len() {
        let mut j = i;
        while j > 0 && compare_shifts(&shifts[j - 1], &shifts[j]) == Ordering::Greater {
            shifts.swap(j - 1, j);
            j -= 1;
        }
    }
    shifts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn shift(date: (i32, u32, u32), start: u32, end: u32, line: &str) -> ShiftRecord {
        ShiftRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start_time: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
            position: "Barista".to_string(),
            location: "Starbucks".to_string(),
            notes: line.to_string(),
            original_line: line.to_string(),
        }
    }

    fn lines(shifts: &[ShiftRecord]) -> Vec<&str> {
        shifts.iter().map(|s| s.original_line.as_str()).collect()
    }

    #[test]
    fn test_dedup_keeps_first() {
        let shifts = vec![
            shift((2025, 9, 1), 9, 17, "first"),
            shift((2025, 9, 1), 9, 17, "second"),
            shift((2025, 9, 1), 9, 18, "third"),
        ];
        assert_eq!(lines(&dedup_shifts(shifts)), vec!["first", "third"]);
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index("Monday 9:00-5:00"), Some(0));
        assert_eq!(weekday_index("SUN 9am-5pm"), Some(6));
        assert_eq!(weekday_index("9:00-5:00"), None);
    }

    #[test]
    fn test_weekday_beats_calendar_date() {
        // A Monday that lands in the following week still sorts before Friday.
        let shifts = vec![
            shift((2025, 9, 5), 9, 17, "Fri 9:00-5:00"),
            shift((2025, 9, 8), 9, 17, "Mon 9:00-5:00"),
        ];
        assert_eq!(lines(&order_shifts(shifts)), vec!["Mon 9:00-5:00", "Fri 9:00-5:00"]);
    }

    #[test]
    fn test_falls_back_to_date_then_start() {
        let shifts = vec![
            shift((2025, 9, 2), 9, 17, "9/2 9:00-5:00"),
            shift((2025, 9, 1), 14, 22, "Mon 2:00-10:00"),
            shift((2025, 9, 1), 7, 15, "Mon 7:00AM-3:00PM"),
        ];
        assert_eq!(
            lines(&order_shifts(shifts)),
            vec!["Mon 7:00AM-3:00PM", "Mon 2:00-10:00", "9/2 9:00-5:00"]
        );
    }

    #[test]
    fn test_ordering_is_deterministic_for_mixed_keys() {
        let shifts = vec![
            shift((2025, 9, 10), 9, 17, "Mon 9:00-5:00"),
            shift((2025, 9, 5), 9, 17, "9/5 9:00-5:00"),
            shift((2025, 9, 3), 9, 17, "Wed 9:00-5:00"),
        ];
        let once = order_shifts(shifts.clone());
        let twice = order_shifts(shifts);
        assert_eq!(once, twice);
    }
}
