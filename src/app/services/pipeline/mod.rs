//! Flight record pipeline
//!
//! Single pass over the input: every row is classified by the record
//! parser and routed to the valid sink, the error sink, or dropped when
//! empty. Output order follows input order within each sink.
//!
//! ## Architecture
//!
//! - [`source`] - CSV row source with header-based column mapping
//! - [`sink`] - Record sink trait and the CSV implementation
//! - [`stats`] - Per-outcome run summary
//!
//! ## Usage
//!
//! ```rust
//! use flight_processor::app::services::pipeline::{CsvSink, RowSource, run};
//!
//! # fn example() -> flight_processor::Result<()> {
//! let input = "id,carrier_code,flight_number,flight_date\n1,AA,100,2016-01-05\n";
//! let rows = RowSource::new(input.as_bytes())?;
//! let mut valid = CsvSink::new(Vec::new());
//! let mut errors = CsvSink::new(Vec::new());
//!
//! let summary = run(rows, &mut valid, &mut errors)?;
//! assert_eq!(summary.valid, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod sink;
pub mod source;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use sink::{CsvSink, RecordSink};
pub use source::RowSource;
pub use stats::Summary;

use std::path::Path;
use tracing::{debug, info, trace};

use crate::Result;
use crate::app::models::{InputRow, Outcome};
use crate::app::services::record_parser::classify;
use crate::constants::{ERROR_OUTPUT_HEADER, VALID_OUTPUT_HEADER};

/// Classify every row and route it to its sink
///
/// Both headers are written before the first row. A source error aborts
/// the run; rows already routed stay written.
pub fn run<I, V, E>(rows: I, valid_sink: &mut V, error_sink: &mut E) -> Result<Summary>
where
    I: IntoIterator<Item = Result<InputRow>>,
    V: RecordSink + ?Sized,
    E: RecordSink + ?Sized,
{
    valid_sink.write_fields(VALID_OUTPUT_HEADER)?;
    error_sink.write_fields(ERROR_OUTPUT_HEADER)?;

    let mut summary = Summary::new();

    for row in rows {
        let row = row?;
        let outcome = classify(&row);

        match &outcome {
            Outcome::Valid(record) => valid_sink.write_fields(&record.to_fields())?,
            Outcome::Invalid(raw) => error_sink.write_fields(&raw.to_fields())?,
            Outcome::Empty => trace!("Skipped empty row {}", summary.rows_read + 1),
        }

        summary.record(&outcome);
    }

    debug!(
        "Pipeline finished: {} rows, {} valid, {} invalid, {} empty",
        summary.rows_read, summary.valid, summary.invalid, summary.empty
    );

    Ok(summary)
}

/// Run the pipeline from an input file into two output files
///
/// Output files are created or truncated. Both sinks are flushed before
/// returning, including when the input turns out to be malformed; the
/// run's own error takes precedence over a failed flush.
pub fn run_files(input: &Path, output: &Path, errors: &Path) -> Result<Summary> {
    run_files_with_progress(input, output, errors, |_| {})
}

/// Like [`run_files`], calling `on_row` with the running row count
pub fn run_files_with_progress<F>(
    input: &Path,
    output: &Path,
    errors: &Path,
    mut on_row: F,
) -> Result<Summary>
where
    F: FnMut(u64),
{
    info!("Processing flight records from {}", input.display());

    let source = RowSource::from_path(input)?;
    let mut valid_sink = CsvSink::create(output)?;
    let mut error_sink = CsvSink::create(errors)?;

    let mut rows_seen = 0;
    let rows = source.inspect(|_| {
        rows_seen += 1;
        on_row(rows_seen);
    });

    let result = run(rows, &mut valid_sink, &mut error_sink);
    let summary = finish_run(result, &mut valid_sink, &mut error_sink)?;
    info!(
        "Wrote {} valid records to {} and {} rejected records to {}",
        summary.valid,
        output.display(),
        summary.invalid,
        errors.display()
    );

    Ok(summary)
}

/// Flush both sinks after a run, reporting the run's error first
fn finish_run<V, E>(
    result: Result<Summary>,
    valid_sink: &mut V,
    error_sink: &mut E,
) -> Result<Summary>
where
    V: RecordSink + ?Sized,
    E: RecordSink + ?Sized,
{
    let flushed = valid_sink.flush().and(error_sink.flush());
    let summary = result?;
    flushed?;
    Ok(summary)
}
