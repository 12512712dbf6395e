//! Date resolution for shift lines.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::trace;

use super::context::{parse_weekday, ParseContext, WeekDateMap};
use super::lines::RawLine;
use super::patterns::{
    DATE_ISO, DATE_MONTH_NAME, DATE_NUMERIC, DATE_RANGE_NAMED, DATE_RANGE_NUMERIC,
    DATE_WEEKDAY_NUMERIC, WEEKDAY,
};
use super::{ExtractionMatch, FieldExtractor};

/// Formats tried in order when turning a date token into a calendar date.
const DATE_TEMPLATES: &[&str] = &[
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%m/%d/%y",
    "%m-%d-%y",
    "%m.%d.%y",
    "%Y-%m-%d",
    "%b %d %Y",
    "%B %d %Y",
];

/// Explicit date extractor for a single line.
///
/// Lines that hold a two-date range are week headers, not a shift's own
/// date, and never yield a match.
#[derive(Debug, Clone, Copy)]
pub struct DateExtractor {
    year_hint: i32,
}

impl DateExtractor {
    pub fn new(year_hint: i32) -> Self {
        Self { year_hint }
    }

    fn candidate_tokens(text: &str) -> Vec<(String, usize, usize)> {
        let mut tokens = Vec::new();

        for pattern in [&*DATE_ISO, &*DATE_NUMERIC] {
            if let Some(m) = pattern.captures(text).and_then(|c| c.get(1)) {
                tokens.push((m.as_str().to_string(), m.start(), m.end()));
            }
        }

        if let Some(caps) = DATE_MONTH_NAME.captures(text) {
            let full = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or_default();
            let month: String = caps[1].chars().take(3).collect();
            let token = match caps.get(3) {
                Some(year) => format!("{} {} {}", month, &caps[2], year.as_str()),
                None => format!("{} {}", month, &caps[2]),
            };
            tokens.push((token, full.0, full.1));
        }

        if let Some(m) = DATE_WEEKDAY_NUMERIC.captures(text).and_then(|c| c.get(1)) {
            tokens.push((m.as_str().to_string(), m.start(), m.end()));
        }

        tokens
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        if is_date_range(text) {
            return None;
        }

        Self::candidate_tokens(text)
            .into_iter()
            .find_map(|(token, start, end)| {
                normalize_date(&token, self.year_hint)
                    .map(|date| ExtractionMatch::new(date, token).with_position(start, end))
            })
    }
}

/// Whether the line looks like "date - date".
pub fn is_date_range(text: &str) -> bool {
    DATE_RANGE_NUMERIC.is_match(text) || DATE_RANGE_NAMED.is_match(text)
}

/// Turn a date token into a calendar date.
///
/// Tokens without a year ("Sep 3", "9/3") are retried with `year_hint`
/// appended. Only four-digit years are accepted.
pub fn normalize_date(token: &str, year_hint: i32) -> Option<NaiveDate> {
    let token = token.trim();
    parse_with_templates(token).or_else(|| {
        let with_year = append_year(token, year_hint)?;
        parse_with_templates(&with_year)
    })
}

fn parse_with_templates(token: &str) -> Option<NaiveDate> {
    DATE_TEMPLATES.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(token, fmt)
            .ok()
            .filter(|date| (1000..=9999).contains(&date.year()))
    })
}

fn append_year(token: &str, year_hint: i32) -> Option<String> {
    let has_full_year = token
        .split(|c: char| !c.is_ascii_digit())
        .any(|run| run.len() == 4);
    if has_full_year {
        return None;
    }

    if token.chars().any(|c| c.is_ascii_alphabetic()) {
        return Some(format!("{} {}", token, year_hint));
    }

    // "12/25" -> "12/25/2025"
    let separators: Vec<char> = token.chars().filter(|c| matches!(c, '/' | '-' | '.')).collect();
    match separators.as_slice() {
        [sep] => Some(format!("{}{}{}", token, sep, year_hint)),
        _ => None,
    }
}

/// Resolve the date of the shift on `lines[index]`.
///
/// First success wins:
/// 1. a weekday on the line, looked up in the week header map;
/// 2. an explicit date on the line;
/// 3. an explicit date on one of the `lookback` preceding lines, nearest first;
/// 4. with a week header, a weekday on one of those preceding lines;
/// 5. a weekday on the line, taken as its next occurrence on or after today.
pub fn resolve_date(
    lines: &[RawLine],
    index: usize,
    ctx: &ParseContext,
    lookback: usize,
) -> Option<ExtractionMatch<NaiveDate>> {
    let line = &lines.get(index)?.text;
    let extractor = DateExtractor::new(ctx.year_hint);
    let preceding = &lines[index.saturating_sub(lookback)..index];

    if let Some(found) = ctx.week_dates.as_ref().and_then(|week| week_lookup(line, week)) {
        trace!(line = index, date = %found.value, "date from week header");
        return Some(found);
    }

    if let Some(found) = extractor.extract(line) {
        return Some(found);
    }

    if let Some(found) = preceding.iter().rev().find_map(|prev| extractor.extract(&prev.text)) {
        trace!(line = index, date = %found.value, "date from preceding line");
        return Some(found);
    }

    if let Some(week) = ctx.week_dates.as_ref() {
        if let Some(found) = preceding.iter().rev().find_map(|prev| week_lookup(&prev.text, week)) {
            trace!(line = index, date = %found.value, "date from weekday heading");
            return Some(found);
        }
    }

    next_weekday(line, ctx.today)
}

fn week_lookup(text: &str, week: &WeekDateMap) -> Option<ExtractionMatch<NaiveDate>> {
    WEEKDAY.find_iter(text).find_map(|m| {
        week.get(m.as_str())
            .map(|date| ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end()))
    })
}

/// The next date on or after `today` that falls on the weekday named in `text`.
fn next_weekday(text: &str, today: NaiveDate) -> Option<ExtractionMatch<NaiveDate>> {
    let m = WEEKDAY.find(text)?;
    let target = parse_weekday(m.as_str())?;
    let delta = (target.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    let date = today + Duration::days(i64::from(delta));

    Some(ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::rules::lines::normalize_lines;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resolve(text: &str, index: usize, today: NaiveDate) -> Option<NaiveDate> {
        let lines = normalize_lines(text);
        let ctx = ParseContext::build(&lines, text, today);
        resolve_date(&lines, index, &ctx, 5).map(|m| m.value)
    }

    #[test]
    fn test_normalize_date_templates() {
        assert_eq!(normalize_date("12/25/2024", 2025), Some(date(2024, 12, 25)));
        assert_eq!(normalize_date("12-25-2024", 2025), Some(date(2024, 12, 25)));
        assert_eq!(normalize_date("9.1.2025", 2025), Some(date(2025, 9, 1)));
        assert_eq!(normalize_date("12/25/24", 2025), Some(date(2024, 12, 25)));
        assert_eq!(normalize_date("2025-09-01", 2024), Some(date(2025, 9, 1)));
        assert_eq!(normalize_date("Sep 3 2025", 2024), Some(date(2025, 9, 3)));
    }

    #[test]
    fn test_normalize_date_appends_year_hint() {
        assert_eq!(normalize_date("Dec 25", 2024), Some(date(2024, 12, 25)));
        assert_eq!(normalize_date("12/25", 2024), Some(date(2024, 12, 25)));
        assert_eq!(normalize_date("Feb 30", 2024), None);
        assert_eq!(normalize_date("13/45/2024", 2024), None);
    }

    #[test]
    fn test_explicit_date_forms() {
        let extractor = DateExtractor::new(2025);

        let found = extractor.extract("Tue 09/02/2025 9:00-5:00").unwrap();
        assert_eq!(found.value, date(2025, 9, 2));
        assert_eq!(found.source, "09/02/2025");

        assert_eq!(
            extractor.extract("Wednesday Sept 3rd 2:00-10:00").map(|m| m.value),
            Some(date(2025, 9, 3))
        );
        assert_eq!(
            extractor.extract("Thursday 9/4 8:00-4:00").map(|m| m.value),
            Some(date(2025, 9, 4))
        );
        assert_eq!(
            extractor.extract("Dec 31, 2024 close").map(|m| m.value),
            Some(date(2024, 12, 31))
        );
    }

    #[test]
    fn test_date_range_line_yields_nothing() {
        let extractor = DateExtractor::new(2025);
        assert!(extractor.extract("09/01/2025 - 09/07/2025").is_none());
        assert!(extractor.extract("Sep 1 - Sep 7").is_none());
    }

    #[test]
    fn test_week_header_wins_over_stray_date() {
        let text = "09/01/2025 - 09/07/2025\nMonday 12/24/2024 9:00-5:00";
        assert_eq!(resolve(text, 1, date(2026, 1, 1)), Some(date(2025, 9, 1)));
    }

    #[test]
    fn test_lookback_finds_date_above() {
        let text = "Fri 10/03/2025\nOpen\n6:00AM-2:00PM";
        assert_eq!(resolve(text, 2, date(2026, 1, 1)), Some(date(2025, 10, 3)));
    }

    #[test]
    fn test_lookback_is_bounded() {
        let text = "10/03/2025\nl1 x\nl2 x\nl3 x\nl4 x\nl5 x\n6:00AM-2:00PM";
        assert_eq!(resolve(text, 6, date(2026, 1, 1)), None);
    }

    #[test]
    fn test_weekday_heading_above_uses_week_map() {
        let text = "09/01/2025 - 09/07/2025\nWednesday\n2:00-10:00";
        assert_eq!(resolve(text, 2, date(2026, 1, 1)), Some(date(2025, 9, 3)));
    }

    #[test]
    fn test_bare_weekday_rolls_forward() {
        // 2025-09-10 is a Wednesday.
        let today = date(2025, 9, 10);
        assert_eq!(resolve("Wed 9:00-5:00", 0, today), Some(date(2025, 9, 10)));
        assert_eq!(resolve("Fri 9:00-5:00", 0, today), Some(date(2025, 9, 12)));
        assert_eq!(resolve("Mon 9:00-5:00", 0, today), Some(date(2025, 9, 15)));
    }

    #[test]
    fn test_no_date_anywhere() {
        assert_eq!(resolve("9:00-5:00", 0, date(2025, 9, 10)), None);
    }
}
