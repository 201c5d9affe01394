//! This module provides functionality to validate problem instance for domain expectations which
//! are not enforced while loading it.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::models::{GeoTable, Postcode, ProblemInstance};

/// Validates problem instance on a set of rules and returns all violations found.
pub fn validate_problem(problem: &ProblemInstance) -> Result<(), Vec<String>> {
    let errors = check_e1001_non_negative_values(problem)
        .err()
        .into_iter()
        .chain(check_e1002_min_capacity_not_above_max(problem).err())
        .chain(check_e1003_binary_availability(problem).err())
        .chain(check_e1004_postcode_has_available_fleet(problem).err())
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Checks that all numeric fields are non-negative.
fn check_e1001_non_negative_values(problem: &ProblemInstance) -> Result<(), String> {
    let fleets = problem
        .fleets()
        .iter()
        .filter(|(_, attrs)| {
            attrs.cost < 0. || attrs.min_capacity < 0 || attrs.max_capacity < 0 || attrs.green_capacity < 0
        })
        .map(|(id, _)| format!("fleet '{id}'"));

    let geo = [
        ("availability", get_postcodes_with(problem, problem.availability(), |value| *value < 0)),
        ("demand", get_postcodes_with(problem, problem.demand(), |value| *value < 0)),
        ("productivity", get_postcodes_with(problem, problem.productivity(), |value| *value < 0.)),
        ("deviation", get_postcodes_with(problem, problem.deviation(), |value| *value < 0.)),
    ]
    .into_iter()
    .flat_map(|(table, postcodes)| postcodes.into_iter().map(move |postcode| format!("{table} of '{postcode}'")));

    let entities = fleets.chain(geo).collect::<Vec<_>>();

    if entities.is_empty() {
        Ok(())
    } else {
        Err(format!("E1001: Negative values found in: {}", entities.join(", ")))
    }
}

/// Checks that min capacity does not exceed max capacity.
fn check_e1002_min_capacity_not_above_max(problem: &ProblemInstance) -> Result<(), String> {
    let fleet_ids = problem
        .fleets()
        .iter()
        .filter(|(_, attrs)| attrs.min_capacity > attrs.max_capacity)
        .map(|(id, _)| id.as_str())
        .collect::<Vec<_>>();

    if fleet_ids.is_empty() {
        Ok(())
    } else {
        Err(format!("E1002: Min capacity is greater than max capacity for fleets: {}", fleet_ids.join(", ")))
    }
}

/// Checks that availability flags are either 0 or 1.
fn check_e1003_binary_availability(problem: &ProblemInstance) -> Result<(), String> {
    let postcodes = get_postcodes_with(problem, problem.availability(), |value| *value != 0 && *value != 1);

    if postcodes.is_empty() {
        Ok(())
    } else {
        Err(format!("E1003: Availability flags other than 0 or 1 in postcodes: {}", join_postcodes(&postcodes)))
    }
}

/// Checks that every postcode can be served by at least one fleet.
fn check_e1004_postcode_has_available_fleet(problem: &ProblemInstance) -> Result<(), String> {
    let postcodes = problem
        .postcodes()
        .iter()
        .filter(|postcode| problem.available_fleets(**postcode).is_empty())
        .cloned()
        .collect::<Vec<_>>();

    if postcodes.is_empty() {
        Ok(())
    } else {
        Err(format!("E1004: No fleet is available for postcodes: {}", join_postcodes(&postcodes)))
    }
}

fn get_postcodes_with<T, F>(problem: &ProblemInstance, table: &GeoTable<T>, predicate: F) -> Vec<Postcode>
where
    F: Fn(&T) -> bool,
{
    problem
        .postcodes()
        .iter()
        .filter(|postcode| {
            table.get(*postcode).is_some_and(|values| values.values().any(&predicate))
        })
        .cloned()
        .collect()
}

fn join_postcodes(postcodes: &[Postcode]) -> String {
    postcodes.iter().map(|postcode| postcode.to_string()).collect::<Vec<_>>().join(", ")
}
