//! Core data structures for flight record processing
//!
//! Defines the input row mapping, the carrier classification, and the
//! per-row outcome produced by the record parser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::constants::{CARRIER_CODE_COLUMN, FLIGHT_DATE_COLUMN, FLIGHT_NUMBER_COLUMN, ID_COLUMN};

/// One input line as a mapping from column name to value
///
/// Empty strings are stored as absent so that `",,,"` and a missing
/// column look the same to the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    fields: HashMap<String, String>,
}

impl InputRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (key, value) in pairs {
            row.insert(key, value);
        }
        row
    }

    /// Set a column value, replacing any earlier one; an empty value clears the column
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, value);
        }
    }

    /// Look up a column, `None` when absent or empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get(ID_COLUMN)
    }

    pub fn carrier_code(&self) -> Option<&str> {
        self.get(CARRIER_CODE_COLUMN)
    }

    pub fn flight_number(&self) -> Option<&str> {
        self.get(FLIGHT_NUMBER_COLUMN)
    }

    pub fn flight_date(&self) -> Option<&str> {
        self.get(FLIGHT_DATE_COLUMN)
    }
}

/// Airline designator format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarrierType {
    /// Two-character code, letters or digits, optional trailing `*`
    Iata,
    /// Three-letter code
    Icao,
}

impl CarrierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarrierType::Iata => "IATA",
            CarrierType::Icao => "ICAO",
        }
    }
}

impl fmt::Display for CarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub id: String,
    pub carrier_type: CarrierType,
    pub carrier_code: String,
    pub flight_number: String,
    /// Original `flight_date` text, never reformatted
    pub date: String,
}

impl ClassifiedRecord {
    /// Fields in valid-output column order
    pub fn to_fields(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.carrier_type.as_str(),
            self.carrier_code.as_str(),
            self.flight_number.as_str(),
            self.date.as_str(),
        ]
    }
}

/// The original fields of a rejected record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: Option<String>,
    pub carrier_code: Option<String>,
    pub flight_number: Option<String>,
    pub flight_date: Option<String>,
}

impl RawRecord {
    pub fn from_row(row: &InputRow) -> Self {
        Self {
            id: row.id().map(str::to_string),
            carrier_code: row.carrier_code().map(str::to_string),
            flight_number: row.flight_number().map(str::to_string),
            flight_date: row.flight_date().map(str::to_string),
        }
    }

    /// True when none of the four fields is present
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.carrier_code.is_none()
            && self.flight_number.is_none()
            && self.flight_date.is_none()
    }

    /// Fields in error-output column order, absent values as empty strings
    pub fn to_fields(&self) -> [&str; 4] {
        [
            self.id.as_deref().unwrap_or_default(),
            self.carrier_code.as_deref().unwrap_or_default(),
            self.flight_number.as_deref().unwrap_or_default(),
            self.flight_date.as_deref().unwrap_or_default(),
        ]
    }
}

/// Classification of a single input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid(ClassifiedRecord),
    Invalid(RawRecord),
    Empty,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }
}
