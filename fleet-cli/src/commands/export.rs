#[cfg(test)]
#[path = "../../tests/unit/commands/export_test.rs"]
mod export_test;

use super::*;
use clap::Command;
use fleet_cli::extensions::import::import_problem;
use fleet_cli::tabular::problem::write_problem;

const OUT_DIR_ARG_NAME: &str = "out-dir";

pub fn get_export_app() -> Command {
    Command::new("export")
        .about("Loads problem and writes it back as a directory of tables")
        .args(get_problem_args())
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies path to the output directory")
                .short('o')
                .long(OUT_DIR_ARG_NAME)
                .required(true),
        )
}

pub fn run_export(matches: &ArgMatches) -> Result<(), String> {
    let problem_dir = get_problem_dir(matches)?;
    let out_dir = matches
        .get_one::<String>(OUT_DIR_ARG_NAME)
        .ok_or_else(|| "output directory is not specified".to_string())?;
    let config = get_reader_config(matches)?;

    let problem = import_problem(problem_dir, config.clone(), None).map_err(|err| err.to_string())?;

    write_problem(&problem, out_dir, &config).map_err(|err| format!("cannot export problem: {err}"))
}
