//! Contains functionality to read fleet assignment problem from a directory of tables and write
//! it back.

mod config;
pub use self::config::*;

mod reader;
pub use self::reader::*;

mod sources;
pub use self::sources::*;

mod writer;
pub use self::writer::*;
