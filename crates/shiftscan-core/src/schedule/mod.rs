//! Shift extraction from schedule text.

mod parser;
pub mod rules;

pub use parser::{extract_shifts, ExtractionResult, HeuristicShiftParser};
