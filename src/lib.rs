//! Flight Processor Library
//!
//! A Rust library for validating CSV flight records and classifying their
//! carrier codes as IATA or ICAO.
//!
//! This library provides tools for:
//! - Reading flight records from CSV with header-based column mapping
//! - Validating dates, flight numbers and carrier codes per record
//! - Partitioning records into valid, invalid and empty outcomes
//! - Writing valid records and rejected records to separate CSV sinks

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod pipeline;
        pub mod record_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CarrierType, ClassifiedRecord, InputRow, Outcome, RawRecord};
pub use app::services::pipeline::{Summary, run, run_files};
pub use app::services::record_parser::classify;
pub use config::Config;

/// Result type alias for the flight processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flight record processing
///
/// Row-level validation failures are not errors; they surface as
/// [`Outcome::Invalid`] and [`Outcome::Empty`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed CSV; aborts the run
    #[error("CSV parsing error at line {line}: {message}")]
    CsvParsing {
        line: u64,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(line: u64, message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            line,
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for failures caused by malformed input rather than the environment
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::CsvParsing { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|p| p.line()).unwrap_or(0);
        Self::CsvParsing {
            line,
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
