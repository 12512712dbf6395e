//! Parse command - extract shifts from a single OCR text file.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use shiftscan_core::models::config::ShiftScanConfig;
use shiftscan_core::HeuristicShiftParser;

use super::output::{format_shifts, OutputFormat};
use super::{load_config, read_input, write_output};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Reference date for weekday-only lines (default: today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Position used when none is found
    #[arg(long)]
    position: Option<String>,

    /// Location used when none is found
    #[arg(long)]
    location: Option<String>,

    /// Print skipped lines and timing to stderr
    #[arg(long)]
    stats: bool,
}

/// Build a parser from the config plus command-line overrides.
pub fn build_parser(
    config: &ShiftScanConfig,
    position: Option<&str>,
    location: Option<&str>,
) -> HeuristicShiftParser {
    let mut parser = HeuristicShiftParser::from_config(config.extraction.clone());
    if let Some(position) = position {
        parser = parser.with_default_position(position);
    }
    if let Some(location) = location {
        parser = parser.with_default_location(location);
    }
    parser
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let format = OutputFormat::resolve(args.format, &config.output.default_format)?;

    info!("Parsing {}", args.input.display());
    let text = read_input(&args.input)?;

    let parser = build_parser(&config, args.position.as_deref(), args.location.as_deref());
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let result = parser.parse_at(&text, today)?;

    for warning in &result.warnings {
        warn!("{}", warning);
    }

    let output = format_shifts(&result.shifts, format, config.output.include_notes)?;
    write_output(&output, args.output.as_ref())?;

    if args.stats {
        eprintln!();
        eprintln!(
            "{} {} shifts from {} candidate lines",
            style("ℹ").blue(),
            result.shifts.len(),
            result.candidate_lines
        );
        for line in &result.skipped_lines {
            eprintln!("  {} skipped: {}", style("-").yellow(), line);
        }
        eprintln!("{} Processing time: {}ms", style("ℹ").blue(), result.processing_time_ms);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
