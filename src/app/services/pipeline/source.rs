//! CSV row source for flight records
//!
//! Reads the header once to learn column positions, then yields one
//! [`InputRow`] per data line. Rows shorter than the header leave their
//! trailing columns absent; a structurally broken line ends iteration
//! with an error.

use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::app::models::InputRow;
use crate::constants::RECOGNISED_COLUMNS;
use crate::{Error, Result};

/// Lazy, non-restartable sequence of input rows
#[derive(Debug)]
pub struct RowSource<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
    rows_read: u64,
    finished: bool,
}

impl RowSource<File> {
    /// Open a CSV file as a row source
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open input {}", path.display()), e))?;
        Self::new(file)
    }
}

impl<R: Read> RowSource<R> {
    /// Create a row source, consuming the header line
    pub fn new(input: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Error::csv_parsing(1, "Failed to read CSV header", Some(e)))?
            .iter()
            .map(str::to_string)
            .collect();

        for column in RECOGNISED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                warn!("Input header has no '{}' column, reading it as empty", column);
            }
        }
        debug!("Input columns: {:?}", headers);

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            rows_read: 0,
            finished: false,
        })
    }

    /// Column names from the header line
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows read so far
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    fn build_row(&self) -> InputRow {
        let mut row = InputRow::new();
        for (name, value) in self.headers.iter().zip(self.record.iter()) {
            row.insert(name.as_str(), value);
        }
        row
    }
}

impl<R: Read> Iterator for RowSource<R> {
    type Item = Result<InputRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                self.rows_read += 1;
                Some(Ok(self.build_row()))
            }
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                // Header is line 1, so data row n sits on line n + 1 at best
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(self.rows_read + 2);
                Some(Err(Error::csv_parsing(
                    line,
                    format!("Malformed CSV after {} data rows", self.rows_read),
                    Some(e),
                )))
            }
        }
    }
}
