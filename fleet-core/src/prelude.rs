//! This module reimports commonly used types.

pub use crate::models::FleetAttributes;
pub use crate::models::FleetId;
pub use crate::models::FleetTable;
pub use crate::models::GeoTable;
pub use crate::models::GeoTables;
pub use crate::models::LogNormalParams;
pub use crate::models::Postcode;
pub use crate::models::ProblemInstance;

pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;

pub use crate::validation::validate_problem;
