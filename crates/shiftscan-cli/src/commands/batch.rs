//! Batch processing command for multiple schedule text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use shiftscan_core::{ExtractionResult, HeuristicShiftParser};

use super::output::{format_shifts, OutputFormat};
use super::parse::build_parser;
use super::{load_config, read_input};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input text files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Reference date for weekday-only lines (default: today)
    #[arg(long)]
    today: Option<NaiveDate>,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    extraction: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let format = OutputFormat::resolve(args.format, &config.output.default_format)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!("{} Found {} files to process", style("ℹ").blue(), files.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = Arc::new(build_parser(&config, None, None));
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut tasks = JoinSet::new();

    for path in files {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let parser = Arc::clone(&parser);
        tasks.spawn_blocking(move || {
            let _permit = permit;
            let file_start = Instant::now();
            let outcome = process_single_file(&path, &parser, today);
            let processing_time_ms = file_start.elapsed().as_millis() as u64;
            match outcome {
                Ok(extraction) => ProcessResult {
                    path,
                    extraction: Some(extraction),
                    error: None,
                    processing_time_ms,
                },
                Err(e) => ProcessResult {
                    path,
                    extraction: None,
                    error: Some(e.to_string()),
                    processing_time_ms,
                },
            }
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let result = joined?;
        if let Some(error_msg) = &result.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                anyhow::bail!("Processing failed for {}: {}", result.path.display(), error_msg);
            }
        }
        overall_pb.inc(1);
        results.push(result);
    }
    results.sort_by(|a, b| a.path.cmp(&b.path));

    overall_pb.finish_and_clear();

    let (successful, failed): (Vec<_>, Vec<_>) = results.iter().partition(|r| r.extraction.is_some());

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(extraction) = &result.extraction {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("schedule");
                let output_path = output_dir.join(format!("{}.{}", output_name, format.extension()));
                let content = format_shifts(&extraction.shifts, format, config.output.include_notes)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!("{} Summary written to {}", style("✓").green(), summary_path.display());
    }

    let total_shifts: usize = successful
        .iter()
        .filter_map(|r| r.extraction.as_ref())
        .map(|e| e.shifts.len())
        .sum();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}, {} shifts found",
        style("✓").green(),
        results.len(),
        start.elapsed(),
        total_shifts
    );
    eprintln!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    parser: &HeuristicShiftParser,
    today: NaiveDate,
) -> anyhow::Result<ExtractionResult> {
    let text = read_input(path)?;
    Ok(parser.parse_at(&text, today)?)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "shifts",
        "skipped_lines",
        "first_date",
        "last_date",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let time = result.processing_time_ms.to_string();

        if let Some(extraction) = &result.extraction {
            let shifts = extraction.shifts.len().to_string();
            let skipped = extraction.skipped_lines.len().to_string();
            let first = extraction.shifts.iter().map(|s| s.date).min();
            let last = extraction.shifts.iter().map(|s| s.date).max();
            let first = first.map(|d| d.to_string()).unwrap_or_default();
            let last = last.map(|d| d.to_string()).unwrap_or_default();
            wtr.write_record([
                filename,
                "success",
                shifts.as_str(),
                skipped.as_str(),
                first.as_str(),
                last.as_str(),
                time.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                time.as_str(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
