#[cfg(test)]
#[path = "../../tests/unit/common/key_indexer_test.rs"]
mod key_indexer_test;

use super::{CellValue, Table};
use crate::format::*;
use fleet_core::prelude::*;
use rustc_hash::FxHashMap;

/// A table indexed by the postcode column with all other columns cast to numeric kind.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyIndex<T> {
    /// A name of the source.
    pub source: String,
    /// Postcodes in order of their first occurrence.
    pub keys: Vec<Postcode>,
    /// Value columns in source order.
    pub columns: Vec<FleetId>,
    /// Values keyed by postcode and then by column.
    pub values: GeoTable<T>,
    /// Postcodes which were met more than once: the last row wins.
    pub duplicates: Vec<Postcode>,
}

/// Indexes table rows by the `key_column`: its value is parsed as postcode, all other columns are
/// parsed with `T` kind and multiplied by `scale`.
pub fn index_by_key<T: CellValue>(table: &Table, key_column: &str, scale: Float) -> Result<KeyIndex<T>, FormatError> {
    let key_idx = table.require_column(key_column)?;
    let columns = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != key_idx)
        .map(|(idx, header)| (idx, header.clone()))
        .collect::<Vec<_>>();

    let mut index = KeyIndex {
        source: table.source().to_string(),
        keys: Vec::with_capacity(table.len()),
        columns: columns.iter().map(|(_, header)| header.clone()).collect(),
        values: FxHashMap::default(),
        duplicates: vec![],
    };

    for row in table.rows() {
        let raw_key = row.values[key_idx].as_str();
        let postcode = Postcode::parse_cell(raw_key)
            .ok_or_else(|| create_parse_error(table.source(), row.line, key_column, raw_key, Postcode::KIND))?;

        let values = columns
            .iter()
            .map(|(idx, header)| {
                let raw = row.values[*idx].as_str();
                T::parse_cell(raw)
                    .map(|value| (header.clone(), value.scale(scale)))
                    .ok_or_else(|| create_parse_error(table.source(), row.line, header, raw, T::KIND))
            })
            .collect::<Result<FxHashMap<_, _>, _>>()?;

        if index.values.insert(postcode, values).is_some() {
            index.duplicates.push(postcode);
        } else {
            index.keys.push(postcode);
        }
    }

    Ok(index)
}
