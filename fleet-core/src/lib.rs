//! A core crate contains the model of the fleet assignment problem: a set of postcodes (delivery
//! areas) which have to be served by a set of fleets (vehicle types) under capacity, cost and
//! productivity attributes.
//!
//! The crate is intentionally free of any input format logic: see `fleet-tabular` crate for the
//! way to assemble a [`models::ProblemInstance`] from delimited text files.
//!
//! # Model
//!
//! Each postcode is described by:
//! - **availability**: whether a fleet is allowed to serve the postcode
//! - **demand**: amount of parcels per fleet (or demand category)
//! - **productivity**: parcels per hour delivered by a fleet in the postcode
//! - **deviation**: standard deviation of the productivity, derived from historical delays
//!
//! Each fleet is described by its per-parcel cost, min/max capacity and green capacity (capacity
//! which can be used without marginal cost).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod utils;
pub mod validation;
