//! sample translated CDS features from GenBank annotations
//!
//! Command-line arguments for cdsample.

use clap::{ArgAction, Parser};
use log::Level;

use std::{fmt, path::PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// Path to annotation file (GenBank, optionally .gz)
    #[arg(short = 'i', long = "input_file", visible_alias = "input-file")]
    pub input_file: PathBuf,

    /// Path to output FASTA file
    #[arg(short = 'o', long = "output_file", visible_alias = "output-file")]
    pub output_file: PathBuf,

    /// Number of protein records to sample
    #[arg(short = 'c', long, value_parser = parse_count)]
    pub count: usize,

    /// Derive CDS_<start>_<end> identifiers for features without locus_tag/protein_id [0 or 1]
    #[arg(
        short = 'f',
        long = "fabricate_ids",
        visible_alias = "fabricate-ids",
        default_value = "0",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = parse_switch,
        action = ArgAction::Set
    )]
    pub fabricate_ids: bool,

    /// Append log lines to this file
    #[arg(short = 'l', long)]
    pub log: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,

    /// Seed for the random number generator
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Gzip-compress the output file
    #[arg(short = 'Z', long, default_value = "false", action = ArgAction::SetTrue)]
    pub compress: bool,
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input_file={}, output_file={}, count={}, fabricate_ids={}, log={}, level={}, seed={}, compress={}",
            self.input_file.display(),
            self.output_file.display(),
            self.count,
            self.fabricate_ids,
            self.log
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.level,
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.compress,
        )
    }
}

/// Parses a record count, which must be at least 1.
pub fn parse_count(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("count must be greater than 0".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("invalid count '{}': {}", value, e)),
    }
}

/// Parses a boolean switch given as `0` or `1`.
pub fn parse_switch(value: &str) -> Result<bool, String> {
    match value.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("expected 0 or 1, got '{}'", other)),
    }
}
