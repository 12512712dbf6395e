//! Location (store) extraction.

use super::lines::RawLine;
use super::patterns::{LOCATION_KEYWORD, LOCATION_LABEL, STORE_LINE};
use super::{forward_window, ExtractionMatch, FieldExtractor};

/// Recognizes `1234 - Store Name` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationExtractor;

impl LocationExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Looser match: "Location: X", "Store #12", "#4521", "120 King St".
    pub fn keyword(&self, text: &str) -> Option<ExtractionMatch<String>> {
        if let Some(value) = LOCATION_LABEL.captures(text).and_then(|c| c.get(1)) {
            return Some(
                ExtractionMatch::new(value.as_str().trim().to_string(), text)
                    .with_position(value.start(), value.end()),
            );
        }

        let value = LOCATION_KEYWORD.captures(text)?.get(1)?;
        Some(
            ExtractionMatch::new(value.as_str().trim().to_string(), text)
                .with_position(value.start(), value.end()),
        )
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = STORE_LINE.captures(text)?;
        let name = caps.get(2)?;
        Some(
            ExtractionMatch::new(name.as_str().trim().to_string(), text)
                .with_position(name.start(), name.end()),
        )
    }
}

/// Find the location for the shift on `lines[index]`.
///
/// Tries a store line at `index`, then on the next `lookahead` lines (up to
/// the next shift), then a keyword on the line, then a keyword on any line
/// from `context` lines before to `context - 1` lines after.
pub fn extract_location(
    lines: &[RawLine],
    index: usize,
    lookahead: usize,
    context: usize,
) -> Option<String> {
    let extractor = LocationExtractor::new();
    let line = &lines.get(index)?.text;

    let found = extractor
        .extract(line)
        .or_else(|| forward_window(lines, index, lookahead).find_map(|next| extractor.extract(&next.text)))
        .or_else(|| extractor.keyword(line))
        .or_else(|| {
            let from = index.saturating_sub(context);
            let to = index.saturating_add(context).min(lines.len());
            lines[from..to].iter().find_map(|near| extractor.keyword(&near.text))
        })?;

    Some(found.value)
}
