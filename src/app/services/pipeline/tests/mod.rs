//! Test utilities for the pipeline
//!
//! In-memory sinks and CSV fixtures shared by the pipeline test modules.

use super::{CsvSink, RowSource, Summary, run};
use crate::Result;

// Test modules
mod pipeline_tests;
mod source_tests;

/// Header line of a well-formed input file
pub const INPUT_HEADER: &str = "id,carrier_code,flight_number,flight_date";

/// Helper to build CSV input from data lines
pub fn create_input(lines: &[&str]) -> String {
    let mut input = String::from(INPUT_HEADER);
    for line in lines {
        input.push('\n');
        input.push_str(line);
    }
    input.push('\n');
    input
}

/// Output captured from both sinks after a run
pub struct RunOutput {
    pub result: Result<Summary>,
    pub valid: String,
    pub errors: String,
}

/// Helper to run the pipeline over in-memory bytes
pub fn run_on_bytes(input: &[u8]) -> RunOutput {
    let mut valid_sink = CsvSink::new(Vec::new());
    let mut error_sink = CsvSink::new(Vec::new());

    let result = RowSource::new(input).and_then(|rows| run(rows, &mut valid_sink, &mut error_sink));

    RunOutput {
        result,
        valid: String::from_utf8(valid_sink.into_inner().unwrap()).unwrap(),
        errors: String::from_utf8(error_sink.into_inner().unwrap()).unwrap(),
    }
}

/// Helper to run the pipeline over CSV text
pub fn run_on_str(input: &str) -> RunOutput {
    run_on_bytes(input.as_bytes())
}
