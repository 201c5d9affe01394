use super::*;

fn read(data: &str) -> Result<Table, FormatError> {
    read_table(BufReader::new(data.as_bytes()), "test.csv", b',')
}

#[test]
fn can_read_headers_and_rows_in_order() {
    let table = read("Postcode,VAN,TRUCK\n2000,1,0\n1000,0,1\n").unwrap();

    assert_eq!(table.source(), "test.csv");
    assert_eq!(table.headers(), &["Postcode".to_string(), "VAN".to_string(), "TRUCK".to_string()]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0], TableRow { line: 2, values: vec!["2000".into(), "1".into(), "0".into()] });
    assert_eq!(table.rows()[1].values[0], "1000");
    assert_eq!(table.rows()[1].line, 3);
}

#[test]
fn can_read_with_custom_delimiter_and_trim_cells() {
    let table = read_table(BufReader::new("Postcode; VAN\n 1000 ; 12 \n".as_bytes()), "test.csv", b';').unwrap();

    assert_eq!(table.headers(), &["Postcode".to_string(), "VAN".to_string()]);
    assert_eq!(table.rows()[0].values, vec!["1000".to_string(), "12".to_string()]);
}

#[test]
fn can_iterate_records_as_pairs() {
    let table = read("Postcode,VAN\n1000,12\n").unwrap();

    let records = table.records().collect::<Vec<_>>();

    assert_eq!(records, vec![(2, vec![("Postcode", "1000"), ("VAN", "12")])]);
}

#[test]
fn can_read_table_without_rows() {
    let table = read("Postcode,VAN\n").unwrap();

    assert!(table.is_empty());
}

#[test]
fn can_detect_row_with_wrong_column_count() {
    let error = read("Postcode,VAN,TRUCK\n1000,1,0\n2000,1\n").unwrap_err();

    assert_eq!(error.code, MALFORMED_ROW_CODE);
    assert!(error.cause.contains("'test.csv', line 3"), "{}", error.cause);
}

#[test]
fn can_detect_missing_header() {
    let error = read("").unwrap_err();

    assert_eq!(error.code, MALFORMED_ROW_CODE);
    assert_eq!(error.details, Some("header row is missing".to_string()));
}

#[test]
fn can_detect_duplicated_and_empty_headers() {
    let duplicated = read("Postcode,VAN,VAN\n1000,1,0\n").unwrap_err();
    let empty = read("Postcode,,VAN\n1000,1,0\n").unwrap_err();

    assert_eq!(duplicated.details, Some("column 'VAN' is duplicated".to_string()));
    assert_eq!(empty.details, Some("header of column 2 is empty".to_string()));
}

#[test]
fn can_require_column() {
    let table = read("Postcode,VAN\n1000,12\n").unwrap();

    assert_eq!(table.require_column("VAN"), Ok(1));
    assert_eq!(table.require_column("Attr").unwrap_err().code, MALFORMED_ROW_CODE);
}

#[test]
fn can_report_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let error = open_table(&dir.path().join("Demand.csv"), b',').unwrap_err();

    assert_eq!(error.code, FILE_ERROR_CODE);
    assert_eq!(error.cause, "cannot read 'Demand.csv'");
}

#[test]
fn can_open_table_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Demand.csv");
    std::fs::write(&path, "Postcode,VAN\n1000,12\n").unwrap();

    let table = open_table(&path, b',').unwrap();

    assert_eq!(table.source(), "Demand.csv");
    assert_eq!(table.len(), 1);
}
