//! Command-line argument definitions for flight processor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the flight record processor
///
/// Validates a CSV file of flight records, writing classified records to
/// OUTPUT and rejected records to an error file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-processor",
    version,
    about = "Validate CSV flight records and classify carrier codes as IATA or ICAO",
    long_about = "Reads a CSV file with id, carrier_code, flight_number and flight_date columns. \
                  Records with a canonical YYYY-MM-DD date and a recognised IATA or ICAO carrier \
                  code are written to OUTPUT with their carrier code type. Other non-empty \
                  records are written unchanged to the error file, which defaults to errors.csv \
                  beside OUTPUT."
)]
pub struct Args {
    /// CSV file of flight records
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Destination for valid, classified records
    #[arg(value_name = "OUTPUT")]
    pub output_path: PathBuf,

    /// Destination for rejected records
    ///
    /// Defaults to errors.csv in the directory of OUTPUT.
    #[arg(
        short = 'e',
        long = "errors",
        value_name = "PATH",
        help = "Destination for rejected records [default: errors.csv beside OUTPUT]"
    )]
    pub error_path: Option<PathBuf>,

    /// Overwrite existing output files without asking
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors, hide progress
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
