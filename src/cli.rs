use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sortty::data::{parse_values, DataSource, DEFAULT_COUNT};

#[derive(Debug, Parser, Clone)]
#[command(name = "sortty")]
#[command(about = "Watch sorting algorithms work, one comparison at a time")]
pub struct Cli {
    /// Algorithm to preselect (bubble, selection, insertion, merge, quick, heap).
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Number of random values to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Literal values to sort, e.g. "5,3,8,1".
    #[arg(long, conflicts_with = "input")]
    pub values: Option<String>,

    /// Read values from a file (numbers separated by commas or whitespace).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Seed for the random generator, for reproducible data.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Playback ticks per second.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Log file path (the terminal belongs to the UI).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Data source described by the flags
    pub fn data_source(&self) -> Result<DataSource> {
        if let Some(text) = &self.values {
            let values = parse_values(text).context("parse --values")?;
            return Ok(DataSource::Literal(values));
        }
        if let Some(path) = &self.input {
            return Ok(DataSource::File(path.clone()));
        }
        Ok(DataSource::Random {
            count: self.count,
            seed: self.seed,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("sortty.log"))
    }
}
