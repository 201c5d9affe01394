use super::*;
use crate::format::{FILE_ERROR_CODE, PARSE_ERROR_CODE, create_file_error};

fn create_numbers() -> ProblemSources<&'static str> {
    ProblemSources { availability: "1", demand: "2", fleets: "3", productivity: "4", deviation: "5" }
}

#[test]
fn can_map_sources_keeping_roles() {
    for is_parallel in [false, true] {
        let mapped = create_numbers().map(is_parallel, |value| value.parse::<i32>().unwrap() * 10);

        assert_eq!(mapped.as_array(), [&10, &20, &30, &40, &50]);
    }
}

#[test]
fn can_transpose_to_first_error_in_source_order() {
    let sources = ProblemSources {
        availability: Ok(1),
        demand: Err(create_file_error("Demand.csv", "not found")),
        fleets: Ok(3),
        productivity: Err(FormatError::new(PARSE_ERROR_CODE.to_string(), "cause".to_string(), "action".to_string())),
        deviation: Ok(5),
    };

    let error = sources.transpose().unwrap_err();

    assert_eq!(error.code, FILE_ERROR_CODE);
}

#[test]
fn can_create_names_from_files() {
    let names = ProblemSources::from_files(&SourceFiles::default());

    assert_eq!(
        names.as_array(),
        [
            &"FleetAreaConstraints.csv".to_string(),
            &"Demand.csv".to_string(),
            &"Fleets.csv".to_string(),
            &"ParcelsPerH.csv".to_string(),
            &"Delayed.csv".to_string()
        ]
    );
}
