use crate::models::*;
use crate::utils::Float;
use rustc_hash::FxHashMap;

pub type GeoRow<T> = (Postcode, Vec<(&'static str, T)>);

pub fn create_geo_table<T: Clone>(rows: &[GeoRow<T>]) -> GeoTable<T> {
    rows.iter()
        .map(|(postcode, values)| {
            (*postcode, values.iter().map(|(id, value)| (id.to_string(), value.clone())).collect::<FxHashMap<_, _>>())
        })
        .collect()
}

pub fn create_fleet(cost: Float, min_capacity: i64, max_capacity: i64, green_capacity: i64) -> FleetAttributes {
    FleetAttributes { cost, min_capacity, max_capacity, green_capacity }
}

pub fn create_fleet_table(fleets: &[(&str, FleetAttributes)]) -> FleetTable {
    FleetTable::new(fleets.iter().map(|(id, attrs)| (id.to_string(), attrs.clone())).collect())
}

/// Creates a problem with two postcodes (1000, 2000) and two fleets (VAN, TRUCK).
pub fn create_test_problem() -> ProblemInstance {
    ProblemInstance::new(
        vec![1000, 2000],
        create_fleet_table(&[("VAN", create_fleet(0.5, 10, 100, 20)), ("TRUCK", create_fleet(0.8, 0, 500, 50))]),
        GeoTables {
            availability: create_geo_table(&[
                (1000, vec![("VAN", 1), ("TRUCK", 0)]),
                (2000, vec![("VAN", 1), ("TRUCK", 1)]),
            ]),
            demand: create_geo_table(&[
                (1000, vec![("VAN", 12), ("TRUCK", 5)]),
                (2000, vec![("VAN", 3), ("TRUCK", 40)]),
            ]),
            productivity: create_geo_table(&[
                (1000, vec![("VAN", 10.), ("TRUCK", 20.)]),
                (2000, vec![("VAN", 12.5), ("TRUCK", 25.)]),
            ]),
            deviation: create_geo_table(&[
                (1000, vec![("VAN", 0.1), ("TRUCK", 0.)]),
                (2000, vec![("VAN", 0.2), ("TRUCK", 0.3)]),
            ]),
        },
        0.5,
    )
}

pub fn create_problem_with_tables(fleets: FleetTable, tables: GeoTables) -> ProblemInstance {
    let mut postcodes = tables.availability.keys().cloned().collect::<Vec<_>>();
    postcodes.sort();

    ProblemInstance::new(postcodes, fleets, tables, 1.)
}
