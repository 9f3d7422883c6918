//! CSV record sinks
//!
//! Append-only destinations for output records. The pipeline writes
//! through [`RecordSink`]; [`CsvSink`] is the CSV-encoding implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Destination accepting one ordered sequence of fields at a time
pub trait RecordSink {
    /// Append one record
    fn write_fields(&mut self, fields: &[&str]) -> Result<()>;

    /// Push buffered records to the underlying writer
    fn flush(&mut self) -> Result<()>;
}

/// CSV-encoding sink with double-quote escaping, one record per line
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    records_written: u64,
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file sink
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(output: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(output);
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Records appended so far, header included
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::io("Failed to flush CSV sink", e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_fields(&mut self, fields: &[&str]) -> Result<()> {
        self.writer
            .write_record(fields)
            .map_err(|e| Error::io("Failed to write CSV record", e.into()))?;
        self.records_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io("Failed to flush CSV sink", e))
    }
}
