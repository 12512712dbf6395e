//! Position (role) extraction.

use super::lines::RawLine;
use super::patterns::{POSITION_KEYWORD, POSITION_MARKER};
use super::{forward_window, ExtractionMatch, FieldExtractor};

/// Recognizes `@ Role` marker lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionExtractor;

impl PositionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Match a role keyword anywhere in the line.
    pub fn keyword(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let m = POSITION_KEYWORD.find(text)?;
        Some(ExtractionMatch::new(title_case(m.as_str()), m.as_str()).with_position(m.start(), m.end()))
    }
}

impl FieldExtractor for PositionExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = POSITION_MARKER.captures(text)?;
        let role = caps.get(1)?;
        Some(
            ExtractionMatch::new(role.as_str().trim().to_string(), text)
                .with_position(role.start(), role.end()),
        )
    }
}

/// Find the position for the shift on `lines[index]`.
///
/// Tries a marker on the line itself, then a marker on the next `lookahead`
/// lines (up to the next shift), then a role keyword on the line.
pub fn extract_position(lines: &[RawLine], index: usize, lookahead: usize) -> Option<String> {
    let extractor = PositionExtractor::new();
    let line = &lines.get(index)?.text;

    extractor
        .extract(line)
        .or_else(|| forward_window(lines, index, lookahead).find_map(|next| extractor.extract(&next.text)))
        .or_else(|| extractor.keyword(line))
        .map(|m| m.value)
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
