//! Contains common table reading and normalization functionality.

mod attribute_transposer;
pub use self::attribute_transposer::*;

mod cell;
pub use self::cell::*;

mod key_indexer;
pub use self::key_indexer::*;

mod table_reader;
pub use self::table_reader::*;
