//! Tabular crate contains logic to read a fleet assignment problem from a directory of delimited
//! text files and to write it back.
//!
//! # Layout
//!
//! - **FleetAreaConstraints.csv**: `Postcode` + one integer availability flag per fleet
//! - **Demand.csv**: `Postcode` + one integer demand column per fleet or demand category
//! - **Fleets.csv**: `Attr` column with `cost`, `mincapacity`, `maxcapacity`, `greencapacity`
//!   rows + one column per fleet
//! - **ParcelsPerH.csv**: `Postcode` + one float productivity column per fleet
//! - **Delayed.csv**: `Postcode` + one float deviation column per fleet, scaled on read
//!
//! File names, key columns, delimiter and scale factor can be changed with [`problem::ReaderConfig`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/features/round_trip_test.rs"]
mod round_trip_test;

pub use fleet_core as core;

pub mod common;
pub mod format;
pub mod problem;
