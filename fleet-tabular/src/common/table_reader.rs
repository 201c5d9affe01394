#[cfg(test)]
#[path = "../../tests/unit/common/table_reader_test.rs"]
mod table_reader_test;

use crate::format::*;
use csv::{ErrorKind, ReaderBuilder, Trim};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A single data row of the table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// A line number in the source, starting from 1.
    pub line: u64,
    /// Raw cell values in header order.
    pub values: Vec<String>,
}

/// A table read from a delimited source: headers are taken verbatim from the first line and
/// rows keep their source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    source: String,
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl Table {
    /// Returns a name of the source the table was read from.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Returns column headers.
    pub fn headers(&self) -> &[String] {
        self.headers.as_slice()
    }

    /// Returns rows in source order.
    pub fn rows(&self) -> &[TableRow] {
        self.rows.as_slice()
    }

    /// Returns amount of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an index of the column with given name or malformed row error if it is absent.
    pub fn require_column(&self, name: &str) -> Result<usize, FormatError> {
        self.headers.iter().position(|header| header == name).ok_or_else(|| {
            create_malformed_row_error(self.source(), Some(1), format!("expected column '{name}' is missing"))
        })
    }

    /// Iterates over rows as `(header, value)` pairs.
    pub fn records(&self) -> impl Iterator<Item = (u64, Vec<(&str, &str)>)> + '_ {
        self.rows.iter().map(|row| {
            (row.line, self.headers.iter().map(String::as_str).zip(row.values.iter().map(String::as_str)).collect())
        })
    }
}

/// Reads a table from a delimited source. `source` is used to identify the table in errors.
pub fn read_table<R: Read>(reader: BufReader<R>, source: &str, delimiter: u8) -> Result<Table, FormatError> {
    let mut reader = ReaderBuilder::new().delimiter(delimiter).trim(Trim::All).from_reader(reader);
    let map_csv_error = |error: csv::Error| {
        let line = error.position().map(|position| position.line());
        match error.kind() {
            ErrorKind::Io(_) => create_file_error(source, &error),
            _ => create_malformed_row_error(source, line, &error),
        }
    };

    let headers =
        reader.headers().map_err(map_csv_error)?.iter().map(|header| header.to_string()).collect::<Vec<_>>();
    validate_headers(source, &headers)?;

    let rows = reader
        .records()
        .map(|record| {
            let record = record.map_err(map_csv_error)?;
            let line = record.position().map_or(0, |position| position.line());

            Ok(TableRow { line, values: record.iter().map(|value| value.to_string()).collect() })
        })
        .collect::<Result<Vec<_>, FormatError>>()?;

    Ok(Table { source: source.to_string(), headers, rows })
}

/// Opens and reads a table from the file.
pub fn open_table(path: &Path, delimiter: u8) -> Result<Table, FormatError> {
    let source = path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().to_string());
    let file = File::open(path).map_err(|err| create_file_error(&source, format!("{}: {err}", path.display())))?;

    read_table(BufReader::new(file), &source, delimiter)
}

fn validate_headers(source: &str, headers: &[String]) -> Result<(), FormatError> {
    if headers.is_empty() {
        return Err(create_malformed_row_error(source, Some(1), "header row is missing"));
    }

    if let Some(position) = headers.iter().position(|header| header.is_empty()) {
        return Err(create_malformed_row_error(source, Some(1), format!("header of column {} is empty", position + 1)));
    }

    let mut unique = FxHashSet::default();
    if let Some(duplicate) = headers.iter().find(|header| !unique.insert(header.as_str())) {
        return Err(create_malformed_row_error(source, Some(1), format!("column '{duplicate}' is duplicated")));
    }

    Ok(())
}
