//! Input layer
//!
//! Turns a delimited-text file into the flat `Record`s the engine consumes.
//! Dates stay unparsed here; validating them is the engine's job.

pub(crate) mod loader;
pub(crate) mod reader;

pub(crate) use loader::load_records;
pub(crate) use reader::CsvOptions;
