//! Line normalization and header classification.

use super::patterns::TIME_LIKE;

/// Words that mark column headers, titles and totals.
const HEADER_KEYWORDS: &[&str] = &[
    "schedule", "week", "employee", "name", "position", "total", "hours",
];

/// A normalized input line and its position in the line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub index: usize,
    pub text: String,
}

/// Split raw OCR text into trimmed, whitespace-collapsed lines.
///
/// Lines of two characters or fewer are OCR debris and are dropped. Indices
/// are assigned after dropping, so they address the returned sequence.
pub fn normalize_lines(text: &str) -> Vec<RawLine> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| line.chars().count() > 2)
        .enumerate()
        .map(|(index, text)| RawLine { index, text })
        .collect()
}

/// Whether a line is a header or label rather than a shift.
///
/// A real time range overrides the keyword signal: shift lines sometimes
/// carry words like "hours".
pub fn is_header_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|k| lower.contains(k)) && !TIME_LIKE.is_match(line)
}

/// Whether a line carries an `HH:mm - HH:mm` range.
pub fn has_time_range(line: &str) -> bool {
    TIME_LIKE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_trims_collapses_and_drops_short_lines() {
        let text = "  Weekly   Schedule \r\n\r\nok\n  Monday\t 9:00 -  5:00 \n";
        let lines = normalize_lines(text);

        assert_eq!(
            lines,
            vec![
                RawLine { index: 0, text: "Weekly Schedule".to_string() },
                RawLine { index: 1, text: "Monday 9:00 - 5:00".to_string() },
            ]
        );
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("   \n \r\n  ").is_empty());
    }

    #[test]
    fn test_header_keywords() {
        assert!(is_header_line("Employee Name"));
        assert!(is_header_line("WEEKLY SCHEDULE"));
        assert!(is_header_line("Total hours 38"));
        assert!(!is_header_line("Monday 7:00AM-3:00PM"));
    }

    #[test]
    fn test_time_range_vetoes_header_keyword() {
        assert!(!is_header_line("Total Hours: 9:00 - 5:00"));
        assert!(!is_header_line("Shift hours 9:00am to 5:00pm"));
    }
}
