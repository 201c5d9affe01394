//! A crate with helper functionality used by fleet assignment command line interface.
//!
//! It loads a problem from a directory of tables, inspects it, checks domain expectations and
//! writes it back. Assignment algorithms consume the loaded [`core::models::ProblemInstance`]
//! and are not part of this crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

pub use fleet_core as core;
pub use fleet_tabular as tabular;

pub mod extensions;
