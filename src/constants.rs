//! Application constants for flight processor
//!
//! Column names, output headers and file naming used throughout the
//! flight processor application.

// =============================================================================
// Input Columns
// =============================================================================

/// Record identifier column
pub const ID_COLUMN: &str = "id";

/// Airline designator column
pub const CARRIER_CODE_COLUMN: &str = "carrier_code";

/// Flight number column
pub const FLIGHT_NUMBER_COLUMN: &str = "flight_number";

/// Flight date column, `YYYY-MM-DD`
pub const FLIGHT_DATE_COLUMN: &str = "flight_date";

/// Columns recognised in the input header
pub const RECOGNISED_COLUMNS: &[&str] = &[
    ID_COLUMN,
    CARRIER_CODE_COLUMN,
    FLIGHT_NUMBER_COLUMN,
    FLIGHT_DATE_COLUMN,
];

// =============================================================================
// Output Headers
// =============================================================================

/// Header row written to the valid-record output
pub const VALID_OUTPUT_HEADER: &[&str] = &[
    "id",
    "carrier_code_type",
    "carrier_code",
    "flight_number",
    "date",
];

/// Header row written to the error output
pub const ERROR_OUTPUT_HEADER: &[&str] = &["id", "carrier_code", "flight_number", "flight_date"];

// =============================================================================
// Validation Formats
// =============================================================================

/// Canonical flight date format; parsed dates must re-render to the input
pub const FLIGHT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Two uppercase letters or digits, optionally followed by `*`
pub const IATA_CODE_PATTERN: &str = r"^[A-Z0-9]{2}\*?$";

/// Three uppercase letters
pub const ICAO_CODE_PATTERN: &str = r"^[A-Z]{3}$";

// =============================================================================
// Files
// =============================================================================

/// Error file name, placed beside the output file unless overridden
pub const DEFAULT_ERROR_FILE_NAME: &str = "errors.csv";

/// Logging target used for the default env filter
pub const LOG_TARGET: &str = "flight_processor";
