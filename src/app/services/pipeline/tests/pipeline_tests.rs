//! Tests for routing rows to the valid and error sinks

use super::*;
use crate::Error;
use crate::app::models::InputRow;
use crate::app::services::pipeline::{RecordSink, finish_run};

const VALID_HEADER: &str = "id,carrier_code_type,carrier_code,flight_number,date\n";
const ERROR_HEADER: &str = "id,carrier_code,flight_number,flight_date\n";

#[test]
fn test_headers_written_for_empty_input() {
    let output = run_on_str(&create_input(&[]));

    assert_eq!(output.result.unwrap(), Summary::default());
    assert_eq!(output.valid, VALID_HEADER);
    assert_eq!(output.errors, ERROR_HEADER);
}

#[test]
fn test_scenario_rows_are_partitioned() {
    let input = create_input(&[
        "1,AA,100,2016-01-05",
        "2,DLH,200,2016-01-06",
        "3,1234,300,2016-01-07",
        "4,AA,400,2016-13-40",
        ",,,",
        "5,A1*,500,2016-02-01",
    ]);

    let output = run_on_str(&input);
    let summary = output.result.unwrap();

    assert_eq!(
        output.valid,
        format!(
            "{}1,IATA,AA,100,2016-01-05\n2,ICAO,DLH,200,2016-01-06\n5,IATA,A1*,500,2016-02-01\n",
            VALID_HEADER
        )
    );
    assert_eq!(
        output.errors,
        format!("{}3,1234,300,2016-01-07\n4,AA,400,2016-13-40\n", ERROR_HEADER)
    );
    assert_eq!(
        summary,
        Summary {
            rows_read: 6,
            valid: 3,
            invalid: 2,
            empty: 1,
        }
    );
}

#[test]
fn test_order_is_preserved_within_each_sink() {
    let input = create_input(&[
        "10,ZZZ,1,2016-03-01",
        "11,bad,2,2016-03-02",
        "12,YY,3,2016-03-03",
        "13,XX,4,2016-3-04",
        "14,WWW,5,2016-03-05",
        "15,VV,,2016-03-06",
    ]);

    let output = run_on_str(&input);
    output.result.unwrap();

    let valid_ids: Vec<&str> = output
        .valid
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    let error_ids: Vec<&str> = output
        .errors
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();

    assert_eq!(valid_ids, vec!["10", "12", "14"]);
    assert_eq!(error_ids, vec!["11", "13", "15"]);
}

#[test]
fn test_invalid_rows_keep_original_values() {
    let input = create_input(&["\"7,8\",aa,\"say \"\"x\"\"\",2016-01-05", "9,,900,"]);

    let output = run_on_str(&input);
    output.result.unwrap();

    assert_eq!(
        output.errors,
        format!("{}\"7,8\",aa,\"say \"\"x\"\"\",2016-01-05\n9,,900,\n", ERROR_HEADER)
    );
    assert_eq!(output.valid, VALID_HEADER);
}

#[test]
fn test_valid_date_is_not_reformatted() {
    let output = run_on_str(&create_input(&["1,AA,100,2016-01-05"]));
    output.result.unwrap();

    assert!(output.valid.ends_with(",2016-01-05\n"));
}

#[test]
fn test_malformed_line_aborts_after_earlier_rows() {
    let mut input = create_input(&["1,AA,100,2016-01-05", "2,BB,200,2016-01-06"]).into_bytes();
    input.extend_from_slice(b"3,C\xff,300,2016-01-07\n");
    input.extend_from_slice(b"4,DD,400,2016-01-08\n");

    let output = run_on_bytes(&input);

    match output.result {
        Err(Error::CsvParsing { line, .. }) => assert_eq!(line, 4),
        other => panic!("Expected CsvParsing error, got {:?}", other),
    }
    assert_eq!(
        output.valid,
        format!("{}1,IATA,AA,100,2016-01-05\n2,IATA,BB,200,2016-01-06\n", VALID_HEADER)
    );
    assert_eq!(output.errors, ERROR_HEADER);
}

/// Sink that records fields without encoding them
#[derive(Default)]
struct MemorySink {
    records: Vec<Vec<String>>,
}

impl RecordSink for MemorySink {
    fn write_fields(&mut self, fields: &[&str]) -> Result<()> {
        self.records.push(fields.iter().map(|f| f.to_string()).collect());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_run_accepts_any_row_iterator_and_sink() {
    let rows = vec![
        Ok(InputRow::from_pairs([
            ("id", "1"),
            ("carrier_code", "DLH"),
            ("flight_number", "100"),
            ("flight_date", "2016-01-05"),
        ])),
        Ok(InputRow::new()),
        Ok(InputRow::from_pairs([("id", "2")])),
    ];
    let mut valid = MemorySink::default();
    let mut errors = MemorySink::default();

    let summary = run(rows, &mut valid, &mut errors).unwrap();

    assert_eq!(summary.rows_read, 3);
    assert_eq!(valid.records.len(), 2);
    assert_eq!(valid.records[1], vec!["1", "ICAO", "DLH", "100", "2016-01-05"]);
    assert_eq!(errors.records.len(), 2);
    assert_eq!(errors.records[1], vec!["2", "", "", ""]);
}

#[test]
fn test_source_error_in_iterator_stops_run() {
    let rows = vec![
        Ok(InputRow::from_pairs([("id", "1")])),
        Err(Error::csv_parsing(3, "broken", None)),
        Ok(InputRow::from_pairs([("id", "2")])),
    ];
    let mut valid = MemorySink::default();
    let mut errors = MemorySink::default();

    let result = run(rows, &mut valid, &mut errors);

    assert!(result.unwrap_err().is_structural());
    assert_eq!(errors.records.len(), 2);
}

/// Sink whose flush always fails, as a full or read-only disk would
#[derive(Default)]
struct UnflushableSink {
    inner: MemorySink,
}

impl RecordSink for UnflushableSink {
    fn write_fields(&mut self, fields: &[&str]) -> Result<()> {
        self.inner.write_fields(fields)
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::io(
            "flush failed",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}

#[test]
fn test_structural_error_wins_over_flush_failure() {
    let rows = vec![
        Ok(InputRow::from_pairs([("id", "1")])),
        Err(Error::csv_parsing(3, "broken", None)),
    ];
    let mut valid = MemorySink::default();
    let mut errors = UnflushableSink::default();

    let result = run(rows, &mut valid, &mut errors);
    let error = finish_run(result, &mut valid, &mut errors).unwrap_err();

    assert!(matches!(error, Error::CsvParsing { line: 3, .. }));
}

#[test]
fn test_flush_failure_reported_after_clean_run() {
    let rows = vec![Ok(InputRow::from_pairs([("id", "1")]))];
    let mut valid = UnflushableSink::default();
    let mut errors = MemorySink::default();

    let result = run(rows, &mut valid, &mut errors);
    assert!(result.is_ok());
    let error = finish_run(result, &mut valid, &mut errors).unwrap_err();

    assert!(matches!(error, Error::Io { .. }));
}
