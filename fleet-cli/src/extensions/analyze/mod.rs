//! Contains functionality to analyze loaded problem.

mod summary;
pub use self::summary::*;
