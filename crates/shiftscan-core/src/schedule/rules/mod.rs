//! Rule-based field extractors for schedule lines.

pub mod context;
pub mod dates;
pub mod lines;
pub mod location;
pub mod order;
pub mod patterns;
pub mod position;
pub mod times;

pub use context::{ParseContext, WeekDateMap};
pub use dates::{normalize_date, DateExtractor};
pub use lines::{has_time_range, is_header_line, normalize_lines, RawLine};
pub use location::{extract_location, LocationExtractor};
pub use order::{dedup_shifts, order_shifts, weekday_index};
pub use position::{extract_position, PositionExtractor};
pub use times::{normalize_time, TimeExtractor, TimeRange};

/// Trait for single-line field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from one line.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// An extracted value with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source line.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Lines following `index`, up to `window` of them, stopping before the next
/// line that carries its own time range.
pub(crate) fn forward_window(
    lines: &[RawLine],
    index: usize,
    window: usize,
) -> impl Iterator<Item = &RawLine> {
    lines
        .iter()
        .skip(index + 1)
        .take(window)
        .take_while(|line| TimeExtractor.extract(&line.text).is_none())
}
