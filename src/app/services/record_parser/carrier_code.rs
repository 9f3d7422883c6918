//! Carrier code classification
//!
//! Two independent predicates, checked IATA first. A code matching
//! neither has no carrier type and makes its record invalid.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::CarrierType;
use crate::constants::{IATA_CODE_PATTERN, ICAO_CODE_PATTERN};

static IATA_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(IATA_CODE_PATTERN).unwrap());
static ICAO_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(ICAO_CODE_PATTERN).unwrap());

/// Two uppercase letters or digits, optionally followed by `*`
pub fn is_iata_code(code: &str) -> bool {
    IATA_CODE.is_match(code)
}

/// Exactly three uppercase letters
pub fn is_icao_code(code: &str) -> bool {
    ICAO_CODE.is_match(code)
}

/// Classify a carrier code, `None` when it matches neither format
pub fn classify_carrier_code(code: &str) -> Option<CarrierType> {
    if is_iata_code(code) {
        Some(CarrierType::Iata)
    } else if is_icao_code(code) {
        Some(CarrierType::Icao)
    } else {
        None
    }
}
