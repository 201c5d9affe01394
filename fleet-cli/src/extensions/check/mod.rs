//! A helper module which contains functionality to check problem consistency.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use fleet_core::prelude::*;
use fleet_tabular::problem::{ProblemReader, ReaderConfig};
use std::path::Path;

/// Loads problem from the directory and checks domain expectations which the loader does not
/// enforce. Returns all found errors.
pub fn check_problem<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<ProblemInstance, Vec<String>> {
    let problem = ProblemReader::new(config).read_dir(path).map_err(|err| vec![err.to_string()])?;

    validate_problem(&problem)?;

    Ok(problem)
}
