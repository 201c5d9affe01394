//! Import command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

use fleet_core::prelude::*;
use fleet_tabular::problem::{ProblemReader, ReaderConfig, read_config};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Creates reader configuration from an optional json file. A given `max_stdev` overrides the
/// value from the file.
pub fn create_reader_config(config_path: Option<&Path>, max_stdev: Option<Float>) -> GenericResult<ReaderConfig> {
    let config = match config_path {
        Some(path) => {
            let file =
                File::open(path).map_err(|err| format!("cannot open config file '{}': '{err}'", path.display()))?;
            read_config(BufReader::new(file)).map_err(|err| format!("cannot read config: {err}"))?
        }
        None => ReaderConfig::default(),
    };

    let config = match max_stdev {
        Some(max_stdev) => config.with_max_stdev(max_stdev),
        None => config,
    };

    config.validate().map_err(|err| format!("cannot use config: {err}"))?;

    Ok(config)
}

/// Imports problem from the directory with tables.
pub fn import_problem<P: AsRef<Path>>(
    path: P,
    config: ReaderConfig,
    logger: Option<InfoLogger>,
) -> GenericResult<ProblemInstance> {
    let reader = ProblemReader::new(config);
    let reader = match logger {
        Some(logger) => reader.with_logger(logger),
        None => reader,
    };

    reader.read_dir(path).map_err(|err| format!("cannot import problem: {err}").into())
}

/// Serializes problem instance as pretty json.
pub fn serialize_problem<W: Write>(writer: W, problem: &ProblemInstance) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, problem).map_err(|err| format!("cannot serialize problem: '{err}'").into())
}
