use clap::{Arg, ArgMatches};

pub mod check;
pub mod export;
pub mod import;

use fleet_cli::core::prelude::Float;
use fleet_cli::extensions::import::create_reader_config;
use fleet_cli::tabular::problem::ReaderConfig;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::Path;
use std::process;

const PROBLEM_DIR_ARG_NAME: &str = "PROBLEM_DIR";
const CONFIG_ARG_NAME: &str = "config";
const MAX_STDEV_ARG_NAME: &str = "max-stdev";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

/// Returns arguments shared by all commands which load a problem.
fn get_problem_args() -> [Arg; 3] {
    [
        Arg::new(PROBLEM_DIR_ARG_NAME).help("Sets the directory which contains problem tables").required(true).index(1),
        Arg::new(CONFIG_ARG_NAME)
            .help("Specifies path to the json file with reader configuration")
            .short('c')
            .long(CONFIG_ARG_NAME)
            .required(false),
        Arg::new(MAX_STDEV_ARG_NAME)
            .help("Specifies a scale factor applied to deviation values, overrides config value")
            .short('s')
            .long(MAX_STDEV_ARG_NAME)
            .required(false),
    ]
}

fn get_problem_dir(matches: &ArgMatches) -> Result<&str, String> {
    matches
        .get_one::<String>(PROBLEM_DIR_ARG_NAME)
        .map(String::as_str)
        .ok_or_else(|| "problem directory is not specified".to_string())
}

fn get_reader_config(matches: &ArgMatches) -> Result<ReaderConfig, String> {
    let config_path = matches.get_one::<String>(CONFIG_ARG_NAME).map(Path::new);
    let max_stdev = parse_float_value::<Float>(matches, MAX_STDEV_ARG_NAME, "max stdev")?;

    create_reader_config(config_path, max_stdev).map_err(|err| err.to_string())
}

fn parse_float_value<T: std::str::FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}
