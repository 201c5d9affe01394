#[cfg(test)]
#[path = "../../tests/unit/common/attribute_transposer_test.rs"]
mod attribute_transposer_test;

use super::{CellValue, Table};
use crate::format::*;
use fleet_core::prelude::*;
use rustc_hash::FxHashMap;

/// An attribute row name with per parcel cost.
pub const COST_ATTRIBUTE: &str = "cost";
/// An attribute row name with min capacity.
pub const MIN_CAPACITY_ATTRIBUTE: &str = "mincapacity";
/// An attribute row name with max capacity.
pub const MAX_CAPACITY_ATTRIBUTE: &str = "maxcapacity";
/// An attribute row name with green capacity.
pub const GREEN_CAPACITY_ATTRIBUTE: &str = "greencapacity";

/// A single attribute row with raw values keyed by fleet id.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRow {
    /// A line number in the source.
    pub line: u64,
    /// Raw values keyed by fleet id.
    pub values: FxHashMap<FleetId, String>,
}

/// Attribute rows of the fleets source.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRows {
    /// A name of the source.
    pub source: String,
    /// Fleet ids in column order.
    pub fleet_ids: Vec<FleetId>,
    /// Rows keyed by attribute name.
    pub rows: FxHashMap<String, AttributeRow>,
}

impl AttributeRows {
    /// Casts raw values of the attribute to numeric kind.
    pub fn cast<T: CellValue>(&self, attribute: &str) -> Result<FxHashMap<FleetId, T>, FormatError> {
        let row = self.rows.get(attribute).ok_or_else(|| create_missing_attribute_error(&self.source, attribute))?;

        self.fleet_ids
            .iter()
            .map(|fleet_id| {
                let raw = row.values.get(fleet_id).map_or("", String::as_str);
                T::parse_cell(raw)
                    .map(|value| (fleet_id.clone(), value))
                    .ok_or_else(|| create_parse_error(&self.source, row.line, fleet_id, raw, T::KIND))
            })
            .collect()
    }
}

/// Transposes the table keyed by `attribute_column` into attribute name -> fleet id -> raw value
/// mapping. When the same attribute is met twice, the last row wins.
pub fn transpose_attributes(table: &Table, attribute_column: &str) -> Result<AttributeRows, FormatError> {
    let attr_idx = table.require_column(attribute_column)?;
    let columns = table.headers().iter().enumerate().filter(|(idx, _)| *idx != attr_idx).collect::<Vec<_>>();

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let values =
                columns.iter().map(|(idx, header)| ((*header).clone(), row.values[*idx].clone())).collect();

            (row.values[attr_idx].clone(), AttributeRow { line: row.line, values })
        })
        .collect();

    Ok(AttributeRows {
        source: table.source().to_string(),
        fleet_ids: columns.into_iter().map(|(_, header)| header.clone()).collect(),
        rows,
    })
}

/// Reads fleet attributes from the attribute indexed table: cost is cast to float, capacities to
/// integer.
pub fn read_fleet_table(table: &Table, attribute_column: &str) -> Result<FleetTable, FormatError> {
    let attributes = transpose_attributes(table, attribute_column)?;

    let cost = attributes.cast::<Float>(COST_ATTRIBUTE)?;
    let min_capacity = attributes.cast::<i64>(MIN_CAPACITY_ATTRIBUTE)?;
    let max_capacity = attributes.cast::<i64>(MAX_CAPACITY_ATTRIBUTE)?;
    let green_capacity = attributes.cast::<i64>(GREEN_CAPACITY_ATTRIBUTE)?;

    Ok(FleetTable::new(
        attributes
            .fleet_ids
            .iter()
            .map(|fleet_id| {
                (
                    fleet_id.clone(),
                    FleetAttributes {
                        cost: cost[fleet_id],
                        min_capacity: min_capacity[fleet_id],
                        max_capacity: max_capacity[fleet_id],
                        green_capacity: green_capacity[fleet_id],
                    },
                )
            })
            .collect(),
    ))
}
