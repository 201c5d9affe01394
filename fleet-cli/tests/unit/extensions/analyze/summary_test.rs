use super::*;
use crate::helpers::*;
use fleet_tabular::problem::read_problem;

fn get_case_study_summary() -> ProblemSummary {
    get_summary(&read_problem(CASE_STUDY_PATH, 0.5).unwrap())
}

#[test]
fn can_get_problem_summary() {
    let summary = get_case_study_summary();

    assert_eq!(summary.postcodes, 6);
    assert_eq!(summary.total_demand, 1335);
    assert_eq!(summary.deviation_scale, 0.5);
    assert!(summary.unserved_postcodes.is_empty());
}

#[test]
fn can_get_fleet_summaries_in_fleet_order() {
    let summary = get_case_study_summary();

    let fleets = summary
        .fleets
        .iter()
        .map(|fleet| (fleet.id.as_str(), fleet.available_postcodes, fleet.demand))
        .collect::<Vec<_>>();
    assert_eq!(fleets, vec![("VAN", 4, 410), ("TRUCK", 4, 825), ("BIKE", 3, 100)]);

    assert_eq!(summary.fleets[0].mean_productivity, Some(15.3125));
    assert_eq!(summary.fleets[1].mean_productivity, Some(22.1875));
    assert!(summary.fleets[2].mean_productivity.is_some_and(|mean| (mean - 8.5).abs() < 1E-9));
    assert_eq!(summary.fleets[1].attributes.max_capacity, 1200);
}

#[test]
fn can_serialize_summary() {
    let summary = get_case_study_summary();
    let mut buffer = Vec::new();

    serialize_summary(&mut buffer, &summary).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["totalDemand"], 1335);
    assert_eq!(value["fleets"][2]["id"], "BIKE");
    assert_eq!(value["fleets"][2]["attributes"]["greenCapacity"], 150);
    assert_eq!(value["unservedPostcodes"].as_array().map(|postcodes| postcodes.len()), Some(0));
}
