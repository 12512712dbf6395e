//! Common regex patterns for schedule text extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Time ranges: "9:00AM-5:00PM", "14:00 – 22:00", "9:00am to 5:00pm"
    pub static ref TIME_RANGE: Regex = Regex::new(
        r"(?i)\b(\d{1,2}:\d{2})\s*(?:([ap]\.?m)\.?)?\s*(?:-|–|—|to)\s*(\d{1,2}:\d{2})\s*(?:([ap]\.?m)\.?)?"
    ).unwrap();

    // Hour-only ranges: "9am-5pm", "7 - 3:30pm"
    pub static ref TIME_RANGE_LOOSE: Regex = Regex::new(
        r"(?i)\b(\d{1,2}(?::\d{2})?)\s*(?:([ap]\.?m)\.?)?\s*(?:-|–|—|to)\s*(\d{1,2}(?::\d{2})?)\s*(?:([ap]\.?m)\.?)?(?:$|[^\d/.:])"
    ).unwrap();

    // Anything shaped like "HH:mm ... - ... HH:mm"
    pub static ref TIME_LIKE: Regex = Regex::new(
        r"(?i)(\d{1,2}:\d{2}).*(?:-|–|—|to).*(\d{1,2}:\d{2})"
    ).unwrap();

    // Week header: "09/01/2025 - 09/07/2025"
    pub static ref WEEK_RANGE: Regex = Regex::new(
        r"(\d{1,2}/\d{1,2}/\d{4})\s*[-–—]\s*(\d{1,2}/\d{1,2}/\d{4})"
    ).unwrap();

    // Any two-date range, numeric or with month names
    pub static ref DATE_RANGE_NUMERIC: Regex = Regex::new(
        r"(?i)\b\d{1,2}[/.\-]\d{1,2}(?:[/.\-]\d{2,4})?\s*(?:[-–—]|to)\s*\d{1,2}[/.\-]\d{1,2}"
    ).unwrap();

    pub static ref DATE_RANGE_NAMED: Regex = Regex::new(
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s*\d{4})?\s*(?:[-–—]|to)\s*(?:(?:january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.?\s+)?\d{1,2}(?:$|[^\d:])"
    ).unwrap();

    // Numeric date carrying a 4-digit year, used for the year hint
    pub static ref DATE_WITH_YEAR: Regex = Regex::new(
        r"\b\d{1,2}[/\-.]\d{1,2}[/\-.](\d{4})\b"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4}-\d{1,2}-\d{1,2})\b"
    ).unwrap();

    // 12/25/2024, 12-25-24, 12.25.2024
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2}[/\-.]\d{1,2}[/\-.](?:\d{4}|\d{2}))\b"
    ).unwrap();

    // "Monday Dec 25", "Sept 3rd, 2025"
    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(?:(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|weds|wed|thurs|thur|thu|fri|sat|sun)\.?,?\s+)?(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:$|[^\d:])(?:,?\s*(\d{4})\b)?"
    ).unwrap();

    // "Monday 12/25"
    pub static ref DATE_WEEKDAY_NUMERIC: Regex = Regex::new(
        r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|weds|wed|thurs|thur|thu|fri|sat|sun)\.?,?\s*(\d{1,2}[/.]\d{1,2})\b"
    ).unwrap();

    pub static ref WEEKDAY: Regex = Regex::new(
        r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|weds|wed|thurs|thur|thu|fri|sat|sun)\b"
    ).unwrap();

    // "@ Barista", with OCR reading '@' as '©' or '®'
    pub static ref POSITION_MARKER: Regex = Regex::new(
        r#"^[\s|*•·~_'"`.,:;]*[@©®]\s*([A-Za-z].*?)[\s|*•·~_'"`.,:;]*$"#
    ).unwrap();

    pub static ref POSITION_KEYWORD: Regex = Regex::new(
        r"(?i)\b(barista|supervisor|manager|opener|closer|mid|morning|evening|overnight|shift)\b"
    ).unwrap();

    // "1234 - Main Street Mall"
    pub static ref STORE_LINE: Regex = Regex::new(
        r#"^[\s|*•·~_'"`.,:;#]*(\d{3,6})\s*[-–—:]\s*([A-Za-z].*?)[\s|*•·~_'"`.,:;]*$"#
    ).unwrap();

    // "Location: Downtown"
    pub static ref LOCATION_LABEL: Regex = Regex::new(
        r"(?i)\b(?:store|location)\s*:\s*([A-Za-z0-9#][^|]*?)\s*$"
    ).unwrap();

    pub static ref LOCATION_KEYWORD: Regex = Regex::new(
        r"(?i)(?:^|[^\w:#])((?:store(?:\s*#?\s*\d+)?|location)\b|#\d+|\d+\s+[a-z]+\s+(?:avenue|ave|street|st|road|rd|boulevard|blvd|drive|dr)\b\.?)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_range_is_not_a_time() {
        let line = "09/01/2025 - 09/07/2025";
        assert!(WEEK_RANGE.is_match(line));
        assert!(!TIME_RANGE.is_match(line));
        assert!(!TIME_RANGE_LOOSE.is_match(line));
    }

    #[test]
    fn test_month_name_does_not_match_inside_words() {
        assert!(!DATE_MONTH_NAME.is_match("Market 12 Main"));
        assert!(DATE_MONTH_NAME.is_match("Mon Sep 8 9:00-5:00"));
        assert!(!DATE_MONTH_NAME.is_match("Mar 9:00-5:00"));
    }

    #[test]
    fn test_weekday_needs_word_boundary() {
        assert!(!WEEKDAY.is_match("Sunset Blvd"));
        assert!(WEEKDAY.is_match("SAT 9am-5pm"));
        assert_eq!(WEEKDAY.find("Weds 9:00-5:00").map(|m| m.as_str()), Some("Weds"));
    }

    #[test]
    fn test_address_after_time_is_not_split() {
        let caps = LOCATION_KEYWORD.captures("9:00-5:00 1200 Main St").unwrap();
        assert_eq!(&caps[1], "1200 Main St");
    }
}
