//! Tests for reading input rows from CSV

use super::*;
use crate::Error;

#[test]
fn test_rows_follow_header_positions() {
    let input = "flight_date,flight_number,carrier_code,id\n2016-01-05,100,AA,1\n";
    let mut source = RowSource::new(input.as_bytes()).unwrap();

    let row = source.next().unwrap().unwrap();

    assert_eq!(row.id(), Some("1"));
    assert_eq!(row.carrier_code(), Some("AA"));
    assert_eq!(row.flight_number(), Some("100"));
    assert_eq!(row.flight_date(), Some("2016-01-05"));
    assert!(source.next().is_none());
    assert_eq!(source.rows_read(), 1);
}

#[test]
fn test_missing_header_column_reads_as_absent() {
    let input = "id,carrier_code,flight_number\n1,AA,100\n";
    let mut source = RowSource::new(input.as_bytes()).unwrap();

    let row = source.next().unwrap().unwrap();

    assert_eq!(source.headers(), ["id", "carrier_code", "flight_number"]);
    assert_eq!(row.flight_date(), None);
}

#[test]
fn test_duplicate_header_takes_last_column() {
    let input = "id,carrier_code,flight_number,flight_date,id\n\
                 1,AA,100,2016-01-05,\n\
                 9,AA,100,2016-01-05,2\n";
    let mut source = RowSource::new(input.as_bytes()).unwrap();

    let row = source.next().unwrap().unwrap();
    assert_eq!(row.id(), None);
    assert_eq!(row.carrier_code(), Some("AA"));

    let row = source.next().unwrap().unwrap();
    assert_eq!(row.id(), Some("2"));
}

#[test]
fn test_short_row_leaves_trailing_fields_absent() {
    let input = create_input(&["1,AA"]);
    let mut source = RowSource::new(input.as_bytes()).unwrap();

    let row = source.next().unwrap().unwrap();

    assert_eq!(row.carrier_code(), Some("AA"));
    assert_eq!(row.flight_number(), None);
    assert_eq!(row.flight_date(), None);
}

#[test]
fn test_extra_columns_are_kept() {
    let input = "id,carrier_code,flight_number,flight_date,gate\n1,AA,100,2016-01-05,B12\n";
    let mut source = RowSource::new(input.as_bytes()).unwrap();

    let row = source.next().unwrap().unwrap();

    assert_eq!(row.get("gate"), Some("B12"));
}

#[test]
fn test_quoted_fields_are_unescaped() {
    let input = create_input(&["\"1\",\"A,A\",\"1\"\"0\",2016-01-05"]);
    let mut source = RowSource::new(input.as_bytes()).unwrap();

    let row = source.next().unwrap().unwrap();

    assert_eq!(row.carrier_code(), Some("A,A"));
    assert_eq!(row.flight_number(), Some("1\"0"));
}

#[test]
fn test_error_ends_iteration() {
    let mut input = create_input(&[]).into_bytes();
    input.extend_from_slice(b"\xff,AA,100,2016-01-05\n");
    input.extend_from_slice(b"2,AA,100,2016-01-05\n");
    let mut source = RowSource::new(input.as_slice()).unwrap();

    match source.next() {
        Some(Err(Error::CsvParsing { source: inner, .. })) => assert!(inner.is_some()),
        other => panic!("Expected CsvParsing error, got {:?}", other),
    }
    assert!(source.next().is_none());
}

#[test]
fn test_invalid_header_is_structural() {
    let input = b"id,carrier\xff_code\n1,AA\n";

    let error = RowSource::new(&input[..]).unwrap_err();

    assert!(error.is_structural());
}
