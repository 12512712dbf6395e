//! Configuration structures for shift extraction and calendar output.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the shiftscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftScanConfig {
    /// Shift extraction configuration.
    pub extraction: ExtractionConfig,

    /// Calendar event configuration.
    pub calendar: CalendarConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Shift extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Position used when none can be found near a shift line.
    pub default_position: String,

    /// Location used when none can be found near a shift line.
    pub default_location: String,

    /// Number of preceding lines searched for a date.
    pub date_lookback: usize,

    /// Number of following lines searched for a `@ role` marker.
    pub position_lookahead: usize,

    /// Number of following lines searched for a `1234 - Store` line.
    pub location_lookahead: usize,

    /// Lines before the shift line included in the location keyword scan.
    /// The scan also covers `location_context - 1` lines after it.
    pub location_context: usize,

    /// Maximum accepted input length in characters (0 = unlimited).
    pub max_input_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_position: "Barista".to_string(),
            default_location: "Starbucks".to_string(),
            date_lookback: 5,
            position_lookahead: 2,
            location_lookahead: 3,
            location_context: 3,
            max_input_chars: 0,
        }
    }
}

/// Calendar event configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// IANA time zone attached to event start and end.
    pub time_zone: String,

    /// Event title prefix, followed by the shift location.
    pub title_prefix: String,

    /// Calendar colour identifier.
    pub color_id: String,

    /// Popup reminders, in minutes before the start.
    pub reminder_minutes: Vec<u32>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: "America/Edmonton".to_string(),
            title_prefix: "Shift".to_string(),
            color_id: "10".to_string(), // green
            reminder_minutes: vec![30, 10],
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format used when none is given on the command line.
    pub default_format: String,

    /// Include the source line in CSV and text output.
    pub include_notes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
            include_notes: true,
        }
    }
}

impl ShiftScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
