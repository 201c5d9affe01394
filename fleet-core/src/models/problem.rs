#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use super::*;
use crate::utils::{Float, is_close};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Geo indexed tables of the problem, all keyed by postcode.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GeoTables {
    /// Allowed assignment flags: 1 when the fleet can serve the postcode.
    pub availability: GeoTable<i64>,
    /// Demand per fleet (or demand category).
    pub demand: GeoTable<i64>,
    /// Productivity in parcels per hour.
    pub productivity: GeoTable<Float>,
    /// Standard deviation of productivity, already scaled.
    pub deviation: GeoTable<Float>,
}

/// Represents an immutable fleet assignment problem instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInstance {
    postcodes: Vec<Postcode>,
    fleets: FleetTable,
    tables: GeoTables,
    deviation_scale: Float,
}

impl ProblemInstance {
    /// Creates a new instance of `ProblemInstance`.
    ///
    /// `postcodes` defines the postcode order, `deviation_scale` is the factor which was already
    /// applied to deviation values.
    pub fn new(postcodes: Vec<Postcode>, fleets: FleetTable, tables: GeoTables, deviation_scale: Float) -> Self {
        Self { postcodes, fleets, tables, deviation_scale }
    }

    /// Returns postcodes in their source order.
    pub fn postcodes(&self) -> &[Postcode] {
        self.postcodes.as_slice()
    }

    /// Returns fleet ids in their source order.
    pub fn fleet_ids(&self) -> &[FleetId] {
        self.fleets.ids()
    }

    /// Returns amount of postcodes.
    pub fn n_postcodes(&self) -> usize {
        self.postcodes.len()
    }

    /// Returns amount of fleets.
    pub fn n_fleets(&self) -> usize {
        self.fleets.len()
    }

    /// Returns fleet attributes.
    pub fn fleets(&self) -> &FleetTable {
        &self.fleets
    }

    /// Returns allowed assignment flags.
    pub fn availability(&self) -> &GeoTable<i64> {
        &self.tables.availability
    }

    /// Returns demand.
    pub fn demand(&self) -> &GeoTable<i64> {
        &self.tables.demand
    }

    /// Returns productivity in parcels per hour.
    pub fn productivity(&self) -> &GeoTable<Float> {
        &self.tables.productivity
    }

    /// Returns productivity standard deviation, scaled by `deviation_scale`.
    pub fn deviation(&self) -> &GeoTable<Float> {
        &self.tables.deviation
    }

    /// Returns the factor applied to raw deviation values.
    pub fn deviation_scale(&self) -> Float {
        self.deviation_scale
    }

    /// Returns per parcel cost of each fleet.
    pub fn cost(&self) -> FxHashMap<FleetId, Float> {
        self.fleets.project(|attrs| attrs.cost)
    }

    /// Returns min capacity of each fleet.
    pub fn min_capacity(&self) -> FxHashMap<FleetId, i64> {
        self.fleets.project(|attrs| attrs.min_capacity)
    }

    /// Returns max capacity of each fleet.
    pub fn max_capacity(&self) -> FxHashMap<FleetId, i64> {
        self.fleets.project(|attrs| attrs.max_capacity)
    }

    /// Returns green capacity of each fleet.
    pub fn green_capacity(&self) -> FxHashMap<FleetId, i64> {
        self.fleets.project(|attrs| attrs.green_capacity)
    }

    /// Returns fleets allowed to serve the postcode in fleet order.
    pub fn available_fleets(&self, postcode: Postcode) -> Vec<&FleetId> {
        self.tables.availability.get(&postcode).map_or_else(Vec::new, |flags| {
            self.fleets.ids().iter().filter(|id| flags.get(id.as_str()).is_some_and(|flag| *flag == 1)).collect()
        })
    }

    /// Returns total demand of the postcode over all its columns.
    pub fn total_demand(&self, postcode: Postcode) -> i64 {
        self.tables.demand.get(&postcode).map_or(0, |demand| demand.values().sum())
    }

    /// Compares two instances allowing floating point differences within the tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Float) -> bool {
        let floats_eq = |lhs: &GeoTable<Float>, rhs: &GeoTable<Float>| {
            lhs.len() == rhs.len()
                && lhs.iter().all(|(postcode, values)| {
                    rhs.get(postcode).is_some_and(|other| {
                        values.len() == other.len()
                            && values.iter().all(|(id, value)| {
                                other.get(id).is_some_and(|other| is_close(*value, *other, tolerance))
                            })
                    })
                })
        };

        let fleets_eq = self.fleets.ids() == other.fleets.ids()
            && self.fleets.iter().all(|(id, attrs)| {
                other.fleets.get(id).is_some_and(|other| {
                    is_close(attrs.cost, other.cost, tolerance)
                        && attrs.min_capacity == other.min_capacity
                        && attrs.max_capacity == other.max_capacity
                        && attrs.green_capacity == other.green_capacity
                })
            });

        self.postcodes == other.postcodes
            && fleets_eq
            && self.tables.availability == other.tables.availability
            && self.tables.demand == other.tables.demand
            && floats_eq(&self.tables.productivity, &other.tables.productivity)
            && floats_eq(&self.tables.deviation, &other.tables.deviation)
            && is_close(self.deviation_scale, other.deviation_scale, tolerance)
    }
}
