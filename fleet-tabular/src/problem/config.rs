//! Reader configuration.

#[cfg(test)]
#[path = "../../tests/unit/problem/config_test.rs"]
mod config_test;

use crate::format::{FormatError, INVALID_CONFIG_CODE};
use fleet_core::prelude::Float;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A default scale factor applied to deviation values.
pub const DEFAULT_MAX_STDEV: Float = 0.5;

/// Specifies how postcode sets of geo indexed sources are reconciled.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// All geo indexed sources must contain exactly the same postcodes.
    #[default]
    Strict,
    /// Sources are kept as they are, mismatches are only logged.
    Lenient,
}

/// Names of source files.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceFiles {
    /// Allowed assignments between postcodes and fleets.
    pub availability: String,
    /// Demand per postcode.
    pub demand: String,
    /// Fleet attributes.
    pub fleets: String,
    /// Productivity per postcode and fleet.
    pub productivity: String,
    /// Productivity deviation per postcode and fleet.
    pub deviation: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            availability: "FleetAreaConstraints.csv".to_string(),
            demand: "Demand.csv".to_string(),
            fleets: "Fleets.csv".to_string(),
            productivity: "ParcelsPerH.csv".to_string(),
            deviation: "Delayed.csv".to_string(),
        }
    }
}

/// A reader configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderConfig {
    /// A field delimiter, must be an ASCII character. Default is comma.
    pub delimiter: char,
    /// A name of postcode column in geo indexed sources. Default is `Postcode`.
    pub key_column: String,
    /// A name of attribute column in fleets source. Default is `Attr`.
    pub attribute_column: String,
    /// A scale factor applied to deviation values. Default is 0.5.
    pub max_stdev: Float,
    /// A postcode reconciliation policy. Default is strict.
    pub key_policy: KeyPolicy,
    /// Reads source tables in parallel. Default is false.
    pub parallel: bool,
    /// Source file names.
    pub files: SourceFiles,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            key_column: "Postcode".to_string(),
            attribute_column: "Attr".to_string(),
            max_stdev: DEFAULT_MAX_STDEV,
            key_policy: KeyPolicy::default(),
            parallel: false,
            files: SourceFiles::default(),
        }
    }
}

impl ReaderConfig {
    /// Sets the deviation scale factor.
    pub fn with_max_stdev(mut self, max_stdev: Float) -> Self {
        self.max_stdev = max_stdev;
        self
    }

    /// Sets the postcode reconciliation policy.
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    /// Enables or disables parallel reading.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the delimiter as byte or error if it cannot be used as csv delimiter.
    pub fn delimiter_byte(&self) -> Result<u8, FormatError> {
        u8::try_from(self.delimiter).ok().filter(|byte| byte.is_ascii() && *byte != b'"').ok_or_else(|| {
            create_config_error(format!("delimiter '{}' is not a single byte ascii character", self.delimiter))
        })
    }

    /// Checks that configuration values can be used.
    pub fn validate(&self) -> Result<(), FormatError> {
        self.delimiter_byte()?;

        if !self.max_stdev.is_finite() || self.max_stdev < 0. {
            return Err(create_config_error(format!("max stdev should be non-negative, got {}", self.max_stdev)));
        }

        if self.key_column.is_empty() || self.attribute_column.is_empty() {
            return Err(create_config_error("key and attribute column names cannot be empty"));
        }

        Ok(())
    }
}

/// Reads reader configuration from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<ReaderConfig, FormatError> {
    let config: ReaderConfig = serde_json::from_reader(reader).map_err(create_config_error)?;
    config.validate()?;

    Ok(config)
}

fn create_config_error(details: impl std::fmt::Display) -> FormatError {
    FormatError::new_with_details(
        INVALID_CONFIG_CODE.to_string(),
        "cannot use reader configuration".to_string(),
        "check reader configuration".to_string(),
        details.to_string(),
    )
}
