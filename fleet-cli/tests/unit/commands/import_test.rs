use super::*;
use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;
use std::io::BufReader;

fn read_json(file: &File) -> serde_json::Value {
    serde_json::from_reader(BufReader::new(file)).unwrap()
}

#[test]
fn can_import_problem_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "fleet-cli",
        "import",
        CASE_STUDY_PATH,
        "--max-stdev",
        "1",
        "--out-result",
        tmpfile.path().to_str().unwrap(),
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    let value = read_json(tmpfile.as_file());
    assert_eq!(value["deviationScale"], 1.);
    assert_eq!(value["tables"]["deviation"]["1006"]["BIKE"], 0.4);
}

#[test]
fn can_import_problem_summary() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec!["import", CASE_STUDY_PATH, "--summary", "--log", "--out-result", tmpfile.path().to_str().unwrap()];
    let matches = get_import_app().try_get_matches_from(args).unwrap();

    run_import(&matches, create_write_buffer).unwrap();

    let value = read_json(tmpfile.as_file());
    assert_eq!(value["postcodes"], 6);
    assert_eq!(value["fleets"].as_array().map(|fleets| fleets.len()), Some(3));
}

#[test]
fn can_detect_wrong_max_stdev_argument() {
    let args = vec!["import", CASE_STUDY_PATH, "--max-stdev", "abc"];
    let matches = get_import_app().try_get_matches_from(args).unwrap();

    let result = run_import(&matches, create_write_buffer);

    assert!(result.is_err_and(|err| err.starts_with("cannot get float value")));
}

#[test]
fn can_detect_missing_problem_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let args = vec!["import", missing.to_str().unwrap()];
    let matches = get_import_app().try_get_matches_from(args).unwrap();

    let result = run_import(&matches, create_write_buffer);

    assert!(result.is_err_and(|err| err.contains("E0000")));
}

#[test]
fn can_require_problem_directory() {
    assert!(get_import_app().try_get_matches_from(vec!["import"]).is_err());
}
