#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::Command;
use fleet_cli::extensions::check::check_problem;

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Loads problem and checks that it meets domain expectations")
        .args(get_problem_args())
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let problem_dir = get_problem_dir(matches)?;
    let config = get_reader_config(matches)?;

    let problem = check_problem(problem_dir, config)
        .map_err(|err| format!("checker found {} errors:\n{}", err.len(), err.join("\n")))?;

    println!("problem is valid: {} postcodes, {} fleets", problem.n_postcodes(), problem.n_fleets());

    Ok(())
}
