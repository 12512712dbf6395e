//! Core library for extracting work shifts from OCR'd schedule text.
//!
//! This crate provides:
//! - A heuristic, line-oriented shift parser (dates, time ranges, positions, locations)
//! - Shift data models with ISO date and 24-hour time serialization
//! - Calendar event payloads built from extracted shifts
//! - JSON configuration for extraction defaults and calendar output

pub mod error;
pub mod models;
pub mod schedule;

pub use error::{ExtractionError, Result, ShiftScanError};
pub use models::calendar::CalendarEvent;
pub use models::config::{CalendarConfig, ExtractionConfig, ShiftScanConfig};
pub use models::shift::ShiftRecord;
pub use schedule::{extract_shifts, ExtractionResult, HeuristicShiftParser};
