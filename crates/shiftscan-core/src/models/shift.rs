//! Shift record model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single work shift recovered from schedule text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Calendar date of the shift (`yyyy-MM-dd`).
    pub date: NaiveDate,

    /// Start time (`HH:mm`, 24-hour).
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    /// End time (`HH:mm`, 24-hour). May be earlier than the start.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,

    /// Role worked during the shift.
    pub position: String,

    /// Store or site name.
    pub location: String,

    /// The trimmed source line.
    pub notes: String,

    /// The source line, kept for weekday ordering.
    pub original_line: String,
}

impl ShiftRecord {
    /// Local start as `yyyy-MM-ddTHH:mm:00`.
    pub fn start_iso(&self) -> String {
        format!("{}T{}:00", self.date.format("%Y-%m-%d"), self.start_time.format("%H:%M"))
    }

    /// Local end as `yyyy-MM-ddTHH:mm:00`, on the same date as the start.
    pub fn end_iso(&self) -> String {
        format!("{}T{}:00", self.date.format("%Y-%m-%d"), self.end_time.format("%H:%M"))
    }

    /// Key used for duplicate detection.
    pub fn dedup_key(&self) -> (NaiveDate, NaiveTime, NaiveTime) {
        (self.date, self.start_time, self.end_time)
    }
}

/// Serde adapter for `HH:mm` clock times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ShiftRecord {
        ShiftRecord {
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            position: "Barista".to_string(),
            location: "Main Street Mall".to_string(),
            notes: "Monday 7:00AM-3:30PM".to_string(),
            original_line: "Monday 7:00AM-3:30PM".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case_with_short_times() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["date"], "2025-09-01");
        assert_eq!(json["startTime"], "07:00");
        assert_eq!(json["endTime"], "15:30");
        assert_eq!(json["originalLine"], "Monday 7:00AM-3:30PM");
    }

    #[test]
    fn test_deserialize_accepts_serialized_form() {
        let json = r#"{
            "date": "2025-09-01",
            "startTime": "07:00",
            "endTime": "15:30",
            "position": "Barista",
            "location": "Main Street Mall",
            "notes": "Monday 7:00AM-3:30PM",
            "originalLine": "Monday 7:00AM-3:30PM"
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift, sample());
    }

    #[test]
    fn test_iso_datetimes() {
        let shift = sample();
        assert_eq!(shift.start_iso(), "2025-09-01T07:00:00");
        assert_eq!(shift.end_iso(), "2025-09-01T15:30:00");
    }
}
