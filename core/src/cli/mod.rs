pub mod prompt;
pub mod report;

use crate::export::{DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicomtab
#[derive(Parser, Debug)]
#[command(name = "dicomtab")]
#[command(about = "Tabulate DICOM metadata and average pixel intensity for a directory tree")]
#[command(version)]
pub struct Cli {
    /// Directory to scan; prompted for interactively when omitted
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Directory the CSV file is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Name of the CSV file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Table preview format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Skip printing the table preview
    #[arg(long)]
    pub no_preview: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
