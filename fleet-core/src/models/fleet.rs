#[cfg(test)]
#[path = "../../tests/unit/models/fleet_test.rs"]
mod fleet_test;

use super::FleetId;
use crate::utils::Float;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Attributes of a single fleet.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetAttributes {
    /// A cost per parcel.
    pub cost: Float,
    /// A minimum amount of parcels the fleet has to deliver.
    pub min_capacity: i64,
    /// A maximum amount of parcels the fleet can deliver.
    pub max_capacity: i64,
    /// An amount of parcels which can be delivered without marginal cost.
    pub green_capacity: i64,
}

/// Keeps fleet attributes together with the original fleet order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FleetTable {
    ids: Vec<FleetId>,
    attributes: FxHashMap<FleetId, FleetAttributes>,
}

impl FleetTable {
    /// Creates a new instance of `FleetTable`. When the same id is met twice, the last entry wins,
    /// but the id keeps its first position.
    pub fn new(entries: Vec<(FleetId, FleetAttributes)>) -> Self {
        entries.into_iter().fold(Self::default(), |mut acc, (id, attrs)| {
            if acc.attributes.insert(id.clone(), attrs).is_none() {
                acc.ids.push(id);
            }
            acc
        })
    }

    /// Returns fleet ids in their original order.
    pub fn ids(&self) -> &[FleetId] {
        self.ids.as_slice()
    }

    /// Returns attributes of the fleet with given id.
    pub fn get(&self, fleet_id: &str) -> Option<&FleetAttributes> {
        self.attributes.get(fleet_id)
    }

    /// Returns amount of fleets.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if there is no fleet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over fleets in their original order.
    pub fn iter(&self) -> impl Iterator<Item = (&FleetId, &FleetAttributes)> + '_ {
        self.ids.iter().filter_map(move |id| self.attributes.get(id).map(|attrs| (id, attrs)))
    }

    /// Projects a single attribute of every fleet into a map.
    pub fn project<T, F>(&self, attr_fn: F) -> FxHashMap<FleetId, T>
    where
        F: Fn(&FleetAttributes) -> T,
    {
        self.iter().map(|(id, attrs)| (id.clone(), attr_fn(attrs))).collect()
    }
}
