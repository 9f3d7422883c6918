//! Test utilities for the record parser
//!
//! Row builders shared by the classification test modules.

use crate::app::models::InputRow;


/// Helper to build a row with all four columns present
pub fn create_row(
    id: &str,
    carrier_code: &str,
    flight_number: &str,
    flight_date: &str,
) -> InputRow {
    InputRow::from_pairs([
        ("id", id),
        ("carrier_code", carrier_code),
        ("flight_number", flight_number),
        ("flight_date", flight_date),
    ])
}

/// Helper to build a row where every column is blank
pub fn create_blank_row() -> InputRow {
    create_row("", "", "", "")
}
