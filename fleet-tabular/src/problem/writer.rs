#[cfg(test)]
#[path = "../../tests/unit/problem/writer_test.rs"]
mod writer_test;

use super::*;
use crate::common::*;
use csv::WriterBuilder;
use fleet_core::prelude::*;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes problem as a directory of tables which can be read back with the same configuration.
pub fn write_problem<P: AsRef<Path>>(
    problem: &ProblemInstance,
    path: P,
    config: &ReaderConfig,
) -> GenericResult<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path)?;

    let writers = ProblemSources::from_files(&config.files).map(false, |name| {
        File::create(path.join(&name))
            .map(BufWriter::new)
            .map_err(|err| GenericError::from(format!("cannot create '{}': {err}", path.join(&name).display())))
    });

    write_sources(
        problem,
        ProblemSources {
            availability: writers.availability?,
            demand: writers.demand?,
            fleets: writers.fleets?,
            productivity: writers.productivity?,
            deviation: writers.deviation?,
        },
        config,
    )
}

/// Writes problem tables into given writers.
pub fn write_sources<W: Write>(
    problem: &ProblemInstance,
    writers: ProblemSources<W>,
    config: &ReaderConfig,
) -> GenericResult<()> {
    let delimiter = config.delimiter_byte().map_err(|err| err.to_string())?;
    let key_column = config.key_column.as_str();
    let scale = problem.deviation_scale();

    write_geo_table(writers.availability, delimiter, key_column, problem, problem.availability(), |value| {
        value.to_string()
    })?;
    write_geo_table(writers.demand, delimiter, key_column, problem, problem.demand(), |value| value.to_string())?;
    write_fleet_table(writers.fleets, delimiter, config.attribute_column.as_str(), problem.fleets())?;
    write_geo_table(writers.productivity, delimiter, key_column, problem, problem.productivity(), |value| {
        value.to_string()
    })?;
    write_geo_table(writers.deviation, delimiter, key_column, problem, problem.deviation(), |value| {
        if scale == 0. { "0".to_string() } else { (value / scale).to_string() }
    })?;

    Ok(())
}

fn write_geo_table<W: Write, T>(
    writer: W,
    delimiter: u8,
    key_column: &str,
    problem: &ProblemInstance,
    table: &GeoTable<T>,
    format_fn: impl Fn(&T) -> String,
) -> GenericResult<()> {
    let columns = get_columns(problem.fleet_ids(), table);
    let postcodes = get_postcodes(problem.postcodes(), table);

    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    writer
        .write_record(std::iter::once(key_column).chain(columns.iter().map(String::as_str)))
        .map_err(|err| err.to_string())?;

    for postcode in postcodes {
        let values = &table[&postcode];
        let record = std::iter::once(postcode.to_string())
            .chain(columns.iter().map(|column| values.get(column).map_or_else(String::new, &format_fn)));
        writer.write_record(record).map_err(|err| err.to_string())?;
    }

    writer.flush()?;

    Ok(())
}

fn write_fleet_table<W: Write>(
    writer: W,
    delimiter: u8,
    attribute_column: &str,
    fleets: &FleetTable,
) -> GenericResult<()> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    writer
        .write_record(std::iter::once(attribute_column).chain(fleets.ids().iter().map(String::as_str)))
        .map_err(|err| err.to_string())?;

    let rows: [(&str, fn(&FleetAttributes) -> String); 4] = [
        (COST_ATTRIBUTE, |attrs| attrs.cost.to_string()),
        (MIN_CAPACITY_ATTRIBUTE, |attrs| attrs.min_capacity.to_string()),
        (MAX_CAPACITY_ATTRIBUTE, |attrs| attrs.max_capacity.to_string()),
        (GREEN_CAPACITY_ATTRIBUTE, |attrs| attrs.green_capacity.to_string()),
    ];

    for (attribute, format_fn) in rows {
        let record = std::iter::once(attribute.to_string()).chain(fleets.iter().map(|(_, attrs)| format_fn(attrs)));
        writer.write_record(record).map_err(|err| err.to_string())?;
    }

    writer.flush()?;

    Ok(())
}

/// Returns known fleet columns first in fleet order, then any other columns sorted by name.
fn get_columns<T>(fleet_ids: &[FleetId], table: &GeoTable<T>) -> Vec<FleetId> {
    let all = table.values().flat_map(|values| values.keys()).collect::<FxHashSet<_>>();

    let mut extra =
        all.iter().filter(|column| !fleet_ids.contains(column)).map(|column| column.to_string()).collect::<Vec<_>>();
    extra.sort();

    fleet_ids.iter().filter(|id| all.contains(id)).cloned().chain(extra).collect()
}

/// Returns problem postcodes present in the table, then postcodes known only by the table, sorted.
fn get_postcodes<T>(postcodes: &[Postcode], table: &GeoTable<T>) -> Vec<Postcode> {
    let known = postcodes.iter().collect::<FxHashSet<_>>();

    let mut extra = table.keys().filter(|postcode| !known.contains(postcode)).cloned().collect::<Vec<_>>();
    extra.sort();

    postcodes.iter().filter(|postcode| table.contains_key(*postcode)).cloned().chain(extra).collect()
}
