//! WASM bindings for schedule shift extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! OCR runs on the JavaScript side; these functions take the recognized text.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shiftscan_core::models::calendar::events_for_shifts;
use shiftscan_core::models::config::CalendarConfig;
use shiftscan_core::schedule::rules::normalize_time;
use shiftscan_core::{HeuristicShiftParser, ShiftRecord};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Today's date from the browser clock.
fn browser_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract shifts from OCR text with default settings.
///
/// Rejects anything that is not a string.
#[wasm_bindgen(js_name = extractShifts)]
pub fn extract_shifts(text: JsValue) -> Result<JsValue, JsValue> {
    let Some(text) = text.as_string() else {
        return Err(JsValue::from_str("extractShifts expects a string"));
    };
    let shifts = HeuristicShiftParser::new().extract(&text, browser_today());
    to_js(&shifts)
}

/// Normalize a clock token such as `"2:00"` with an optional `am`/`pm`.
///
/// Returns `HH:mm`, or `undefined` when the token is not a valid time.
#[wasm_bindgen(js_name = normalizeTime)]
pub fn normalize_time_js(time: &str, meridiem: Option<String>) -> Option<String> {
    normalize_time(time, meridiem.as_deref()).map(|t| t.format("%H:%M").to_string())
}

/// Shift extractor class for browser use.
#[wasm_bindgen]
pub struct ShiftExtractor {
    parser: HeuristicShiftParser,
    calendar: CalendarConfig,
}

#[wasm_bindgen]
impl ShiftExtractor {
    /// Create a new shift extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: HeuristicShiftParser::new(),
            calendar: CalendarConfig::default(),
        }
    }

    /// Position used when none is found.
    #[wasm_bindgen(js_name = setDefaultPosition)]
    pub fn set_default_position(&mut self, position: &str) {
        self.parser = self.parser.clone().with_default_position(position);
    }

    /// Location used when none is found.
    #[wasm_bindgen(js_name = setDefaultLocation)]
    pub fn set_default_location(&mut self, location: &str) {
        self.parser = self.parser.clone().with_default_location(location);
    }

    /// Maximum accepted input length (0 = unlimited).
    #[wasm_bindgen(js_name = setMaxInputChars)]
    pub fn set_max_input_chars(&mut self, max: usize) {
        self.parser = self.parser.clone().with_max_input_chars(max);
    }

    /// Title prefix for calendar events.
    #[wasm_bindgen(js_name = setTitlePrefix)]
    pub fn set_title_prefix(&mut self, prefix: &str) {
        self.calendar.title_prefix = prefix.to_string();
    }

    /// Extract shifts from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self
            .parser
            .analyze(text, browser_today())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        to_js(&result.shifts)
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen(js_name = extractWithMetadata)]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let started = js_sys::Date::now();
        let result = self
            .parser
            .analyze(text, browser_today())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExtractResult {
            shifts: Vec<ShiftRecord>,
            candidate_lines: usize,
            skipped_lines: Vec<String>,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        let output = ExtractResult {
            shifts: result.shifts,
            candidate_lines: result.candidate_lines,
            skipped_lines: result.skipped_lines,
            warnings: result.warnings,
            processing_time_ms: (js_sys::Date::now() - started).max(0.0) as u64,
        };

        to_js(&output)
    }

    /// Build calendar event payloads for shifts returned by `extract`.
    #[wasm_bindgen(js_name = toCalendarEvents)]
    pub fn to_calendar_events(&self, shifts: JsValue, time_zone: Option<String>) -> Result<JsValue, JsValue> {
        let shifts: Vec<ShiftRecord> =
            serde_wasm_bindgen::from_value(shifts).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut calendar = self.calendar.clone();
        if let Some(time_zone) = time_zone {
            calendar.time_zone = time_zone;
        }

        to_js(&events_for_shifts(&shifts, &calendar))
    }
}

impl Default for ShiftExtractor {
    fn default() -> Self {
        Self::new()
    }
}
