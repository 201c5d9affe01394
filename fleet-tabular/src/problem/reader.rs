#[cfg(test)]
#[path = "../../tests/unit/problem/reader_test.rs"]
mod reader_test;

use super::*;
use crate::common::*;
use crate::format::*;
use fleet_core::prelude::*;
use fleet_core::utils::create_silent_logger;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a problem from the directory with default file names, using `max_stdev` as deviation
/// scale factor.
pub fn read_problem<P: AsRef<Path>>(path: P, max_stdev: Float) -> Result<ProblemInstance, FormatError> {
    ProblemReader::new(ReaderConfig::default().with_max_stdev(max_stdev)).read_dir(path)
}

/// Reads problem instance from tables and assembles them together.
pub struct ProblemReader {
    config: ReaderConfig,
    logger: InfoLogger,
}

impl ProblemReader {
    /// Creates a new instance of `ProblemReader` which does not log anything.
    pub fn new(config: ReaderConfig) -> Self {
        Self { config, logger: create_silent_logger() }
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Returns reader configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Reads problem from the directory which contains all source files.
    pub fn read_dir<P: AsRef<Path>>(&self, path: P) -> Result<ProblemInstance, FormatError> {
        let path = path.as_ref();
        let sources = ProblemSources::from_files(&self.config.files).map(false, |name| {
            File::open(path.join(&name))
                .map(|file| TableSource::new(&name, BufReader::new(file)))
                .map_err(|err| create_file_error(&name, format!("{}: {err}", path.join(&name).display())))
        });

        self.read_sources(sources.transpose()?)
    }

    /// Reads problem from named sources.
    pub fn read_sources<R: Read + Send>(
        &self,
        sources: ProblemSources<TableSource<R>>,
    ) -> Result<ProblemInstance, FormatError> {
        self.config.validate()?;
        let delimiter = self.config.delimiter_byte()?;

        let tables = sources
            .map(self.config.parallel, |source| read_table(source.reader, &source.name, delimiter))
            .transpose()?;

        tables.as_array().iter().for_each(|table| {
            (self.logger)(&format!(
                "read '{}': {} rows, {} columns",
                table.source(),
                table.len(),
                table.headers().len()
            ))
        });

        self.assemble(tables)
    }

    fn assemble(&self, tables: ProblemSources<Table>) -> Result<ProblemInstance, FormatError> {
        let key_column = self.config.key_column.as_str();

        let availability = index_by_key::<i64>(&tables.availability, key_column, 1.)?;
        let demand = index_by_key::<i64>(&tables.demand, key_column, 1.)?;
        let fleets = read_fleet_table(&tables.fleets, self.config.attribute_column.as_str())?;
        let productivity = index_by_key::<Float>(&tables.productivity, key_column, 1.)?;
        let deviation = index_by_key::<Float>(&tables.deviation, key_column, self.config.max_stdev)?;

        self.log_duplicates(&availability);
        self.log_duplicates(&demand);
        self.log_duplicates(&productivity);
        self.log_duplicates(&deviation);

        let mismatches = [
            get_key_mismatch(&availability, &demand),
            get_key_mismatch(&availability, &productivity),
            get_key_mismatch(&availability, &deviation),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        if !mismatches.is_empty() {
            match self.config.key_policy {
                KeyPolicy::Strict => return Err(create_key_mismatch_error(&availability.source, &mismatches)),
                KeyPolicy::Lenient => {
                    mismatches.iter().for_each(|mismatch| (self.logger)(&format!("warning: {mismatch}")))
                }
            }
        }

        (self.logger)(&format!(
            "assembled problem: {} postcodes, {} fleets, deviation scale {}",
            availability.keys.len(),
            fleets.len(),
            self.config.max_stdev
        ));

        Ok(ProblemInstance::new(
            availability.keys,
            fleets,
            GeoTables {
                availability: availability.values,
                demand: demand.values,
                productivity: productivity.values,
                deviation: deviation.values,
            },
            self.config.max_stdev,
        ))
    }

    fn log_duplicates<T>(&self, index: &KeyIndex<T>) {
        if !index.duplicates.is_empty() {
            (self.logger)(&format!(
                "warning: '{}' has duplicated postcodes, the last row is used: {}",
                index.source,
                join_postcodes(index.duplicates.iter())
            ));
        }
    }
}

/// Returns a description of postcode set difference between two indices, if any.
fn get_key_mismatch<A, B>(expected: &KeyIndex<A>, actual: &KeyIndex<B>) -> Option<String> {
    let expected_keys = expected.keys.iter().collect::<FxHashSet<_>>();
    let actual_keys = actual.keys.iter().collect::<FxHashSet<_>>();

    let missing = expected.keys.iter().filter(|key| !actual_keys.contains(key)).collect::<Vec<_>>();
    let unexpected = actual.keys.iter().filter(|key| !expected_keys.contains(key)).collect::<Vec<_>>();

    let describe = |postcodes: Vec<&Postcode>, what: &str| {
        (!postcodes.is_empty())
            .then(|| format!("{what} '{}': {}", actual.source, join_postcodes(postcodes.into_iter())))
    };

    let parts = [describe(missing, "missing in"), describe(unexpected, "unexpected in")]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}

fn join_postcodes<'a>(postcodes: impl Iterator<Item = &'a Postcode>) -> String {
    postcodes.map(|postcode| postcode.to_string()).collect::<Vec<_>>().join(", ")
}

fn create_key_mismatch_error(source: &str, mismatches: &[String]) -> FormatError {
    FormatError::new_with_details(
        KEY_MISMATCH_CODE.to_string(),
        format!("geo indexed sources do not list the same postcodes as '{source}'"),
        "make sure that all geo indexed sources contain the same postcodes".to_string(),
        mismatches.join("; "),
    )
}
