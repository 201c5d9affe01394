//! A command line interface to load, check and rewrite fleet assignment problems.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

mod commands;

use crate::cli::{get_app, run_subcommand};

fn main() {
    run_subcommand(get_app().get_matches());
}

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::export::{get_export_app, run_export};
    use super::commands::import::{get_import_app, run_import};
    use super::commands::*;
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Fleet Assignment Problem Tool")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to load, check and rewrite fleet assignment problems")
            .subcommand(get_import_app())
            .subcommand(get_check_app())
            .subcommand(get_export_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("import", import_matches)) => run_import(import_matches, create_write_buffer),
            Some(("check", check_matches)) => run_check(check_matches),
            Some(("export", export_matches)) => run_export(export_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
