#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use clap::{ArgAction, Command};
use fleet_cli::core::prelude::InfoLogger;
use fleet_cli::extensions::analyze::{get_summary, serialize_summary};
use fleet_cli::extensions::import::{import_problem, serialize_problem};
use std::sync::Arc;

const SUMMARY_ARG_NAME: &str = "summary";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Loads problem from a directory of tables and writes it as json")
        .args(get_problem_args())
        .arg(
            Arg::new(SUMMARY_ARG_NAME)
                .help("Writes aggregated summary instead of the full problem")
                .long(SUMMARY_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether loading progress should be logged")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_import(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_dir = get_problem_dir(matches)?;
    let config = get_reader_config(matches)?;
    let logger: Option<InfoLogger> =
        if matches.get_flag(LOG_ARG_NAME) { Some(Arc::new(|msg: &str| println!("{msg}"))) } else { None };

    let problem = import_problem(problem_dir, config, logger).map_err(|err| err.to_string())?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = out_writer_func(out_result);

    let result = if matches.get_flag(SUMMARY_ARG_NAME) {
        serialize_summary(out_buffer, &get_summary(&problem))
    } else {
        serialize_problem(out_buffer, &problem)
    };

    result.map_err(|err| err.to_string())
}
