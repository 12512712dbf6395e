//! Output formatting shared by the parse and batch commands.

use serde::Serialize;

use shiftscan_core::ShiftRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// Resolve a `-f` flag against the configured default format.
    pub fn resolve(flag: Option<Self>, default: &str) -> anyhow::Result<Self> {
        match flag {
            Some(format) => Ok(format),
            None => <Self as clap::ValueEnum>::from_str(default, true)
                .map_err(|_| anyhow::anyhow!("Unknown output format in config: {}", default)),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// One shift in the JSON response, numbered from 1.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShiftEntry<'a> {
    id: String,
    date: String,
    start_time: String,
    end_time: String,
    location: &'a str,
    position: &'a str,
    notes: &'a str,
}

#[derive(Debug, Serialize)]
struct ShiftResponse<'a> {
    shifts: Vec<ShiftEntry<'a>>,
}

pub fn format_shifts(shifts: &[ShiftRecord], format: OutputFormat, include_notes: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_json(shifts, include_notes),
        OutputFormat::Csv => format_csv(shifts, include_notes),
        OutputFormat::Text => Ok(format_text(shifts)),
    }
}

fn format_json(shifts: &[ShiftRecord], include_notes: bool) -> anyhow::Result<String> {
    let response = ShiftResponse {
        shifts: shifts
            .iter()
            .enumerate()
            .map(|(i, shift)| ShiftEntry {
                id: (i + 1).to_string(),
                date: shift.date.format("%Y-%m-%d").to_string(),
                start_time: shift.start_time.format("%H:%M").to_string(),
                end_time: shift.end_time.format("%H:%M").to_string(),
                location: &shift.location,
                position: &shift.position,
                notes: if include_notes { shift.notes.as_str() } else { "" },
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

fn format_csv(shifts: &[ShiftRecord], include_notes: bool) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["id", "date", "start_time", "end_time", "position", "location", "notes"])?;

    for (i, shift) in shifts.iter().enumerate() {
        let id = (i + 1).to_string();
        let date = shift.date.to_string();
        let start = shift.start_time.format("%H:%M").to_string();
        let end = shift.end_time.format("%H:%M").to_string();
        let notes = if include_notes { shift.notes.as_str() } else { "" };
        wtr.write_record([
            id.as_str(),
            date.as_str(),
            start.as_str(),
            end.as_str(),
            shift.position.as_str(),
            shift.location.as_str(),
            notes,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(shifts: &[ShiftRecord]) -> String {
    if shifts.is_empty() {
        return "No shifts found\n".to_string();
    }

    let mut output = format!("Shifts: {}\n\n", shifts.len());
    for (i, shift) in shifts.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {} {}  {}-{}  {} @ {}\n",
            i + 1,
            shift.date.format("%a"),
            shift.date,
            shift.start_time.format("%H:%M"),
            shift.end_time.format("%H:%M"),
            shift.position,
            shift.location
        ));
    }
    output
}
