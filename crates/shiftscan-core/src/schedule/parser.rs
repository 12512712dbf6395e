//! Heuristic schedule parser: normalizes lines, builds the per-call context,
//! and assembles one shift per line that carries a time range and a date.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::{ExtractionError, Result};
use crate::models::config::ExtractionConfig;
use crate::models::shift::ShiftRecord;

use super::rules::{
    dates::resolve_date, dedup_shifts, extract_location, extract_position, is_header_line,
    normalize_lines, order_shifts, FieldExtractor, ParseContext, RawLine, TimeExtractor,
};

/// Result of a schedule parse.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Deduplicated, ordered shifts.
    pub shifts: Vec<ShiftRecord>,
    /// Number of normalized lines that were not headers.
    pub candidate_lines: usize,
    /// Lines with a time range whose date could not be resolved.
    pub skipped_lines: Vec<String>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// What happened to a single line.
enum LineOutcome {
    Header,
    NoTime,
    NoDate,
    Shift(ShiftRecord),
}

/// Line-oriented heuristic shift parser.
///
/// Holds configuration only. Every parse builds its own [`ParseContext`], so
/// one parser can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct HeuristicShiftParser {
    config: ExtractionConfig,
}

impl HeuristicShiftParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from an extraction config.
    pub fn from_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Set the position used when none is found.
    pub fn with_default_position(mut self, position: impl Into<String>) -> Self {
        self.config.default_position = position.into();
        self
    }

    /// Set the location used when none is found.
    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.config.default_location = location.into();
        self
    }

    /// Set how many preceding lines are searched for a date.
    pub fn with_date_lookback(mut self, lines: usize) -> Self {
        self.config.date_lookback = lines;
        self
    }

    /// Set the maximum accepted input length (0 = unlimited).
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.config.max_input_chars = max;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Parse shifts from text, resolving bare weekdays against the local clock.
    pub fn parse(&self, text: &str) -> Result<ExtractionResult> {
        self.parse_at(text, Local::now().date_naive())
    }

    /// Parse with an explicit reference date instead of the local clock.
    pub fn parse_at(&self, text: &str, today: NaiveDate) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut result = self.analyze(text, today)?;
        result.processing_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }

    /// Same as [`parse_at`](Self::parse_at) but leaves `processing_time_ms`
    /// at zero, for targets without a monotonic clock.
    pub fn analyze(&self, text: &str, today: NaiveDate) -> Result<ExtractionResult> {
        let max = self.config.max_input_chars;
        if max > 0 {
            let len = text.chars().count();
            if len > max {
                return Err(ExtractionError::InputTooLarge { len, max }.into());
            }
        }
        Ok(self.run(text, today))
    }

    /// Extract shifts without any input bound. Never fails.
    pub fn extract(&self, text: &str, today: NaiveDate) -> Vec<ShiftRecord> {
        self.run(text, today).shifts
    }

    fn run(&self, text: &str, today: NaiveDate) -> ExtractionResult {
        let mut warnings = Vec::new();

        info!("Parsing schedule from {} characters of text", text.len());

        let lines = normalize_lines(text);
        let ctx = ParseContext::build(&lines, text, today);

        let mut shifts = Vec::new();
        let mut skipped_lines = Vec::new();
        let mut candidate_lines = 0;

        for index in 0..lines.len() {
            match self.parse_line(&lines, index, &ctx) {
                LineOutcome::Header => {}
                LineOutcome::NoTime => candidate_lines += 1,
                LineOutcome::NoDate => {
                    candidate_lines += 1;
                    debug!("Line {} has a time range but no date: {}", index, lines[index].text);
                    warnings.push(format!("No date found for line: {}", lines[index].text));
                    skipped_lines.push(lines[index].text.clone());
                }
                LineOutcome::Shift(shift) => {
                    candidate_lines += 1;
                    debug!(
                        "Line {} -> {} {}-{} {} @ {}",
                        index,
                        shift.date,
                        shift.start_time.format("%H:%M"),
                        shift.end_time.format("%H:%M"),
                        shift.position,
                        shift.location
                    );
                    shifts.push(shift);
                }
            }
        }

        let found = shifts.len();
        let shifts = order_shifts(dedup_shifts(shifts));
        if shifts.len() < found {
            debug!("Dropped {} duplicate shifts", found - shifts.len());
        }

        if shifts.is_empty() && !lines.is_empty() {
            warnings.push("No shifts found".to_string());
        }

        debug!(
            "Extracted {} shifts from {} lines ({} candidates)",
            shifts.len(),
            lines.len(),
            candidate_lines
        );

        ExtractionResult {
            shifts,
            candidate_lines,
            skipped_lines,
            warnings,
            processing_time_ms: 0,
        }
    }

    fn parse_line(&self, lines: &[RawLine], index: usize, ctx: &ParseContext) -> LineOutcome {
        let line = &lines[index].text;
        if is_header_line(line) {
            return LineOutcome::Header;
        }

        let Some(time) = TimeExtractor::new().extract(line) else {
            return LineOutcome::NoTime;
        };

        let Some(date) = resolve_date(lines, index, ctx, self.config.date_lookback) else {
            return LineOutcome::NoDate;
        };

        let position = extract_position(lines, index, self.config.position_lookahead)
            .unwrap_or_else(|| self.config.default_position.clone());
        let location = extract_location(
            lines,
            index,
            self.config.location_lookahead,
            self.config.location_context,
        )
        .unwrap_or_else(|| self.config.default_location.clone());

        LineOutcome::Shift(ShiftRecord {
            date: date.value,
            start_time: time.value.start,
            end_time: time.value.end,
            position,
            location,
            notes: line.clone(),
            original_line: line.clone(),
        })
    }
}

/// Extract shifts from schedule text with default settings.
///
/// Empty or unparseable text yields an empty list.
pub fn extract_shifts(text: &str) -> Vec<ShiftRecord> {
    HeuristicShiftParser::new().extract(text, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 9, 10)
    }

    #[test]
    fn test_end_to_end_week_schedule() {
        let text = "09/01/2025 - 09/07/2025\nMonday 7:00AM-3:00PM\n@ Barista\n1234 - Main Street Mall\n";
        let shifts = HeuristicShiftParser::new().extract(text, today());

        assert_eq!(
            shifts,
            vec![ShiftRecord {
                date: date(2025, 9, 1),
                start_time: t(7, 0),
                end_time: t(15, 0),
                position: "Barista".to_string(),
                location: "Main Street Mall".to_string(),
                notes: "Monday 7:00AM-3:00PM".to_string(),
                original_line: "Monday 7:00AM-3:00PM".to_string(),
            }]
        );
    }

    #[test]
    fn test_multi_day_photo() {
        let text = r#"
            STARBUCKS WEEKLY SCHEDULE
            Employee Name: Sam
            09/01/2025 - 09/07/2025
            Mon 7:00AM-3:00PM
            @ Barista
            Wed 2:00-10:00
            © Shift Supervisor
            05521 - Kingsway & 41st
            Fri 9:00 - 5:30
            Total Hours: 23.5
        "#;
        let result = HeuristicShiftParser::new().parse_at(text, today()).unwrap();
        let summary: Vec<_> = result
            .shifts
            .iter()
            .map(|s| (s.date, s.start_time, s.end_time, s.position.as_str(), s.location.as_str()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (date(2025, 9, 1), t(7, 0), t(15, 0), "Barista", "Starbucks"),
                (date(2025, 9, 3), t(14, 0), t(22, 0), "Shift Supervisor", "Kingsway & 41st"),
                (date(2025, 9, 5), t(9, 0), t(17, 30), "Barista", "Starbucks"),
            ]
        );
        assert!(result.skipped_lines.is_empty());
    }

    #[test]
    fn test_week_header_beats_stray_numbers() {
        let text = "09/01/2025 - 09/07/2025\nMonday 12/24/2024 9:00-5:00";
        let shifts = HeuristicShiftParser::new().extract(text, today());

        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].date, date(2025, 9, 1));
    }

    #[test]
    fn test_hours_keyword_with_time_range_is_a_shift() {
        let text = "Tue 09/02/2025\nTotal Hours: 9:00 - 5:00";
        let shifts = HeuristicShiftParser::new().extract(text, today());

        assert_eq!(shifts.len(), 1);
        assert_eq!((shifts[0].start_time, shifts[0].end_time), (t(9, 0), t(17, 0)));
        assert_eq!(shifts[0].date, date(2025, 9, 2));
    }

    #[test]
    fn test_empty_and_garbage_input() {
        let parser = HeuristicShiftParser::new();
        for text in ["", "   ", "hello world", "\r\n\r\n"] {
            assert!(parser.extract(text, today()).is_empty(), "input {:?}", text);
        }
    }

    #[test]
    fn test_time_without_date_is_skipped() {
        let result = HeuristicShiftParser::new().parse_at("Opening 6:00AM-2:00PM", today()).unwrap();

        assert!(result.shifts.is_empty());
        assert_eq!(result.skipped_lines, vec!["Opening 6:00AM-2:00PM".to_string()]);
        assert_eq!(result.candidate_lines, 1);
    }

    #[test]
    fn test_duplicates_are_removed() {
        let text = "09/01/2025 - 09/07/2025\nMon 7:00AM-3:00PM\nMonday 7:00 AM - 3:00 PM\nTue 7:00AM-3:00PM";
        let shifts = HeuristicShiftParser::new().extract(text, today());

        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].original_line, "Mon 7:00AM-3:00PM");
        let mut keys: Vec<_> = shifts.iter().map(ShiftRecord::dedup_key).collect();
        keys.dedup();
        assert_eq!(keys.len(), shifts.len());
    }

    #[test]
    fn test_configured_defaults() {
        let parser = HeuristicShiftParser::new()
            .with_default_position("Cashier")
            .with_default_location("Downtown");
        let shifts = parser.extract("Sat 9am-5pm", today());

        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].date, date(2025, 9, 13));
        assert_eq!(shifts[0].position, "Cashier");
        assert_eq!(shifts[0].location, "Downtown");
    }

    #[test]
    fn test_input_bound() {
        let parser = HeuristicShiftParser::new().with_max_input_chars(10);
        let err = parser.parse_at("Monday 9:00-5:00", today()).unwrap_err();

        assert!(matches!(
            err,
            crate::ShiftScanError::Extraction(ExtractionError::InputTooLarge { len: 16, max: 10 })
        ));
    }

    #[test]
    fn test_idempotent() {
        let text = "09/01/2025 - 09/07/2025\nMon 7:00AM-3:00PM\nThu 2:00-10:00\n";
        let parser = HeuristicShiftParser::new();
        assert_eq!(parser.extract(text, today()), parser.extract(text, today()));
    }

    #[test]
    fn test_concurrent_parses_do_not_share_context() {
        let parser = HeuristicShiftParser::new();
        let a = "09/01/2025 - 09/07/2025\nMonday 9:00-5:00";
        let b = "03/02/2026 - 03/08/2026\nMonday 9:00-5:00";

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let parser = &parser;
                    let (text, expected) = if i % 2 == 0 {
                        (a, date(2025, 9, 1))
                    } else {
                        (b, date(2026, 3, 2))
                    };
                    scope.spawn(move || {
                        for _ in 0..50 {
                            let shifts = parser.extract(text, today());
                            assert_eq!(shifts.len(), 1);
                            assert_eq!(shifts[0].date, expected);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    }

    #[test]
    fn test_hour_only_range_after_numbers() {
        let parser = HeuristicShiftParser::new();

        let shifts = parser.extract("2025-09-01 9am-5pm", today());
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].date, date(2025, 9, 1));
        assert_eq!((shifts[0].start_time, shifts[0].end_time), (t(9, 0), t(17, 0)));

        let shifts = parser.extract("Shift 1-2 Sat 9am-5pm", today());
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].date, date(2025, 9, 13));
        assert_eq!((shifts[0].start_time, shifts[0].end_time), (t(9, 0), t(17, 0)));
    }

    #[test]
    fn test_huge_location_context_is_clamped() {
        let mut config = ExtractionConfig::default();
        config.location_context = usize::MAX;
        let parser = HeuristicShiftParser::from_config(config);
        let shifts = parser.extract("x line\nSat 9:00-5:00", today());

        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].location, "Starbucks");
    }

    #[test]
    fn test_parse_uses_local_clock_only_for_bare_weekdays() {
        let result = HeuristicShiftParser::new()
            .parse("09/01/2025 - 09/07/2025\nWeds 9:00-5:00")
            .unwrap();

        assert_eq!(result.shifts.len(), 1);
        assert_eq!(result.shifts[0].date, date(2025, 9, 3));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_extract_shifts_default_entry_point() {
        let shifts = extract_shifts("09/01/2025 - 09/07/2025\nSunday 8:00-4:00");
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].date, date(2025, 9, 7));
        assert_eq!(shifts[0].start_time, t(8, 0));
        assert_eq!(shifts[0].end_time, t(16, 0));
    }
}
