use super::*;
use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;
use fleet_cli::tabular::problem::read_problem;

#[test]
fn can_export_problem_from_args() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    let args = vec!["fleet-cli", "export", CASE_STUDY_PATH, "--out-dir", out_dir.to_str().unwrap()];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    let original = read_problem(CASE_STUDY_PATH, 0.5).unwrap();
    let exported = read_problem(&out_dir, 0.5).unwrap();
    assert!(original.approx_eq(&exported, 1E-9));
}

#[test]
fn can_detect_tables_written_with_other_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{ "delimiter": ";" }"#).unwrap();
    let out_dir = dir.path().join("out");
    let args = vec![
        "export",
        CASE_STUDY_PATH,
        "--config",
        config_path.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
    ];
    let matches = get_export_app().try_get_matches_from(args).unwrap();

    let result = run_export(&matches);

    assert!(result.is_err_and(|err| err.contains("E0001")));
}

#[test]
fn can_require_out_dir() {
    assert!(get_export_app().try_get_matches_from(vec!["export", CASE_STUDY_PATH]).is_err());
}
