use super::*;
use crate::helpers::*;
use fleet_tabular::problem::KeyPolicy;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn can_create_default_reader_config() {
    let config = create_reader_config(None, None).unwrap();

    assert_eq!(config, ReaderConfig::default());
}

#[test]
fn can_override_max_stdev_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "maxStdev": 0.1, "keyPolicy": "lenient" }"#).unwrap();

    let config = create_reader_config(Some(path.as_path()), Some(0.7)).unwrap();

    assert_eq!(config.max_stdev, 0.7);
    assert_eq!(config.key_policy, KeyPolicy::Lenient);
}

#[test]
fn can_detect_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    assert!(create_reader_config(Some(missing.as_path()), None).is_err());
    assert!(create_reader_config(None, Some(-1.)).is_err());
    assert!(create_reader_config(None, Some(Float::NAN)).is_err());
}

#[test]
fn can_import_case_study_with_logger() {
    let messages = Rc::new(RefCell::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.borrow_mut().push(msg.to_string()))
    };

    let problem = import_problem(CASE_STUDY_PATH, ReaderConfig::default(), Some(logger)).unwrap();

    assert_eq!(problem.postcodes(), &[1001, 1002, 1003, 1004, 1005, 1006]);
    assert_eq!(problem.fleet_ids(), &["VAN".to_string(), "TRUCK".to_string(), "BIKE".to_string()]);
    assert!(messages.borrow().iter().any(|msg| msg.starts_with("assembled problem: 6 postcodes, 3 fleets")));
}

#[test]
fn can_return_error_when_import_fails() {
    let dir = tempfile::tempdir().unwrap();

    let result = import_problem(dir.path(), ReaderConfig::default(), None);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot import problem: E0000")));
}

#[test]
fn can_serialize_problem() {
    let problem = import_problem(CASE_STUDY_PATH, ReaderConfig::default(), None).unwrap();
    let mut buffer = Vec::new();

    serialize_problem(&mut buffer, &problem).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["deviationScale"], 0.5);
    assert_eq!(value["postcodes"].as_array().map(|postcodes| postcodes.len()), Some(6));
    assert_eq!(value["tables"]["demand"]["1002"]["TRUCK"], 210);
}
