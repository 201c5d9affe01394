//! Contains the error type reported when source tables cannot be read.

#[cfg(test)]
#[path = "../tests/unit/format_test.rs"]
mod format_test;

use serde::Serialize;
use std::fmt::Display;

/// A code of missing or unreadable source.
pub const FILE_ERROR_CODE: &str = "E0000";
/// A code of malformed row, missing column or header.
pub const MALFORMED_ROW_CODE: &str = "E0001";
/// A code of a cell which cannot be parsed as number.
pub const PARSE_ERROR_CODE: &str = "E0002";
/// A code of missing fleet attribute.
pub const MISSING_ATTRIBUTE_CODE: &str = "E0003";
/// A code of postcode sets mismatch between geo indexed sources.
pub const KEY_MISMATCH_CODE: &str = "E0004";
/// A code of invalid reader configuration.
pub const INVALID_CONFIG_CODE: &str = "E0005";

/// A format error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }

    /// Formats multiple format errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'", self.code, self.cause, self.action)?;
        if let Some(details) = &self.details {
            write!(f, ", details: '{details}'")?;
        }

        Ok(())
    }
}

impl std::error::Error for FormatError {}

pub(crate) fn create_file_error(source: &str, error: impl Display) -> FormatError {
    FormatError::new_with_details(
        FILE_ERROR_CODE.to_string(),
        format!("cannot read '{source}'"),
        format!("check that '{source}' exists and is readable"),
        error.to_string(),
    )
}

pub(crate) fn create_malformed_row_error(source: &str, line: Option<u64>, details: impl Display) -> FormatError {
    let location = line.map_or_else(|| format!("'{source}'"), |line| format!("'{source}', line {line}"));

    FormatError::new_with_details(
        MALFORMED_ROW_CODE.to_string(),
        format!("malformed table in {location}"),
        format!("check rows and columns of '{source}'"),
        details.to_string(),
    )
}

pub(crate) fn create_parse_error(source: &str, line: u64, column: &str, value: &str, kind: &str) -> FormatError {
    FormatError::new_with_details(
        PARSE_ERROR_CODE.to_string(),
        format!("cannot parse value in '{source}', line {line}, column '{column}'"),
        format!("use {kind} value in column '{column}' of '{source}'"),
        format!("'{value}' is not a valid {kind}"),
    )
}

pub(crate) fn create_missing_attribute_error(source: &str, attribute: &str) -> FormatError {
    FormatError::new(
        MISSING_ATTRIBUTE_CODE.to_string(),
        format!("attribute '{attribute}' is missing in '{source}'"),
        format!("add '{attribute}' row to '{source}'"),
    )
}
