#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/summary_test.rs"]
mod summary_test;

use fleet_core::prelude::*;
use serde::Serialize;
use std::io::Write;

/// Keeps aggregated information about one fleet.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    /// Fleet id.
    pub id: FleetId,
    /// Fleet attributes.
    pub attributes: FleetAttributes,
    /// Amount of postcodes the fleet is allowed to serve.
    pub available_postcodes: usize,
    /// Demand assigned to the fleet column over all postcodes.
    pub demand: i64,
    /// Mean productivity over postcodes the fleet is allowed to serve.
    pub mean_productivity: Option<Float>,
}

/// Keeps aggregated information about the problem.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummary {
    /// Amount of postcodes.
    pub postcodes: usize,
    /// Total demand over all postcodes.
    pub total_demand: i64,
    /// A scale factor applied to deviation values.
    pub deviation_scale: Float,
    /// Per fleet summary in fleet order.
    pub fleets: Vec<FleetSummary>,
    /// Postcodes which no fleet is allowed to serve.
    pub unserved_postcodes: Vec<Postcode>,
}

/// Creates problem summary.
pub fn get_summary(problem: &ProblemInstance) -> ProblemSummary {
    let fleets = problem
        .fleets()
        .iter()
        .map(|(fleet_id, attributes)| {
            let served = problem
                .postcodes()
                .iter()
                .filter(|postcode| problem.available_fleets(**postcode).contains(&fleet_id))
                .collect::<Vec<_>>();

            let demand = problem
                .postcodes()
                .iter()
                .filter_map(|postcode| problem.demand().get(postcode).and_then(|demand| demand.get(fleet_id)))
                .sum();

            let productivity = served
                .iter()
                .filter_map(|postcode| problem.productivity().get(*postcode).and_then(|values| values.get(fleet_id)))
                .collect::<Vec<_>>();
            let mean_productivity = if productivity.is_empty() {
                None
            } else {
                Some(productivity.iter().copied().sum::<Float>() / productivity.len() as Float)
            };

            FleetSummary {
                id: fleet_id.clone(),
                attributes: attributes.clone(),
                available_postcodes: served.len(),
                demand,
                mean_productivity,
            }
        })
        .collect();

    ProblemSummary {
        postcodes: problem.n_postcodes(),
        total_demand: problem.postcodes().iter().map(|postcode| problem.total_demand(*postcode)).sum(),
        deviation_scale: problem.deviation_scale(),
        fleets,
        unserved_postcodes: problem
            .postcodes()
            .iter()
            .filter(|postcode| problem.available_fleets(**postcode).is_empty())
            .cloned()
            .collect(),
    }
}

/// Serializes problem summary as pretty json.
pub fn serialize_summary<W: Write>(writer: W, summary: &ProblemSummary) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, summary).map_err(|err| format!("cannot serialize summary: '{err}'").into())
}
