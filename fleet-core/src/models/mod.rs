//! A collection of models which describe the fleet assignment problem.

mod fleet;
pub use self::fleet::*;

mod problem;
pub use self::problem::*;

mod stochastic;
pub use self::stochastic::*;

use rustc_hash::FxHashMap;

/// An identifier of a delivery area.
pub type Postcode = i64;

/// An identifier of a fleet (vehicle type).
pub type FleetId = String;

/// Values keyed by postcode and then by fleet id (or demand category).
pub type GeoTable<T> = FxHashMap<Postcode, FxHashMap<FleetId, T>>;
