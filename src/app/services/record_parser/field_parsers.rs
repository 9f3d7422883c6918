//! Field parsing utilities for flight records
//!
//! Dates must be canonical `YYYY-MM-DD`. Parsing alone is not enough:
//! the parsed date has to render back to exactly the input text, which
//! rejects unpadded months and days along with impossible dates.

use chrono::NaiveDate;
use tracing::debug;

use crate::constants::FLIGHT_DATE_FORMAT;

/// Validate a flight date, returning the parsed date when canonical
pub fn validate_date(value: &str) -> Option<NaiveDate> {
    let date = match NaiveDate::parse_from_str(value, FLIGHT_DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            debug!("Failed to parse flight date '{}': {}", value, e);
            return None;
        }
    };

    let rendered = date.format(FLIGHT_DATE_FORMAT).to_string();
    if rendered != value {
        debug!("Flight date '{}' is not canonical (renders as '{}')", value, rendered);
        return None;
    }

    Some(date)
}
