//! Events command - turn a schedule into calendar event payloads.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use shiftscan_core::models::calendar::events_for_shifts;

use super::parse::build_parser;
use super::{load_config, read_input, write_output};

/// Arguments for the events command.
#[derive(Args)]
pub struct EventsArgs {
    /// Input text file, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// IANA time zone for event times (default: from config)
    #[arg(long)]
    time_zone: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reference date for weekday-only lines (default: today)
    #[arg(long)]
    today: Option<NaiveDate>,
}

pub async fn run(args: EventsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(time_zone) = args.time_zone {
        config.calendar.time_zone = time_zone;
    }

    let text = read_input(&args.input)?;
    let parser = build_parser(&config, None, None);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let result = parser.parse_at(&text, today)?;

    let events = events_for_shifts(&result.shifts, &config.calendar);
    info!("Built {} calendar events in {}", events.len(), config.calendar.time_zone);

    write_output(&serde_json::to_string_pretty(&events)?, args.output.as_ref())
}
