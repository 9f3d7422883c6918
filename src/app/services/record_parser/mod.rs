//! Flight record parser
//!
//! Turns one input row into an [`Outcome`]: a classified record, the
//! original fields of a rejected record, or nothing for an empty row.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Flight date validation with exact round-trip check
//! - [`carrier_code`] - IATA / ICAO designator classification
//!
//! ## Usage
//!
//! ```rust
//! use flight_processor::app::models::{CarrierType, InputRow, Outcome};
//! use flight_processor::app::services::record_parser::classify;
//!
//! let row = InputRow::from_pairs([
//!     ("id", "1"),
//!     ("carrier_code", "AA"),
//!     ("flight_number", "100"),
//!     ("flight_date", "2016-01-05"),
//! ]);
//!
//! match classify(&row) {
//!     Outcome::Valid(record) => assert_eq!(record.carrier_type, CarrierType::Iata),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod carrier_code;
pub mod field_parsers;

#[cfg(test)]
pub mod tests;

pub use carrier_code::classify_carrier_code;
pub use field_parsers::validate_date;

use tracing::trace;

use crate::app::models::{ClassifiedRecord, InputRow, Outcome, RawRecord};

/// Classify a single input row
///
/// Pure function of the row: the same row always yields the same outcome.
pub fn classify(row: &InputRow) -> Outcome {
    let id = row.id();
    let carrier_code = row.carrier_code();
    let flight_number = row.flight_number();
    let flight_date = row.flight_date();

    let date = flight_date.filter(|d| validate_date(d).is_some());
    let carrier_type = carrier_code.and_then(classify_carrier_code);

    match (id, carrier_type, carrier_code, flight_number, date) {
        (Some(id), Some(carrier_type), Some(carrier_code), Some(flight_number), Some(date)) => {
            Outcome::Valid(ClassifiedRecord {
                id: id.to_string(),
                carrier_type,
                carrier_code: carrier_code.to_string(),
                flight_number: flight_number.to_string(),
                date: date.to_string(),
            })
        }
        _ => {
            let raw = RawRecord::from_row(row);
            if raw.is_empty() {
                Outcome::Empty
            } else {
                trace!(
                    "Rejected record id={:?}: carrier_type={:?}, flight_number={}, date={}",
                    id,
                    carrier_type,
                    flight_number.is_some(),
                    date.is_some()
                );
                Outcome::Invalid(raw)
            }
        }
    }
}
