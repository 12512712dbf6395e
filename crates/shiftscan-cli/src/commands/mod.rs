pub mod batch;
pub mod config;
pub mod events;
pub mod output;
pub mod parse;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use shiftscan_core::models::config::ShiftScanConfig;

/// Load the config from `-c`, else the user config file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ShiftScanConfig> {
    if let Some(path) = config_path {
        return ShiftScanConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path));
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        return ShiftScanConfig::from_file(&default_path)
            .with_context(|| format!("Failed to load config from {}", default_path.display()));
    }

    Ok(ShiftScanConfig::default())
}

/// Read schedule text from a file, or from stdin when `input` is `-`.
pub fn read_input(input: &Path) -> anyhow::Result<String> {
    let bytes = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
        fs::read(input)?
    };

    String::from_utf8(bytes).map_err(|_| anyhow::anyhow!("Input is not valid UTF-8: {}", input.display()))
}

/// Write `content` to `output`, or print it when no output path is given.
pub fn write_output(content: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!(
                "{} Output written to {}",
                console::style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}
