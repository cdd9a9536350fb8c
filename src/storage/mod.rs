//! Record storage backends
//!
//! - `engine`: the storage trait every backend implements
//! - `file`: one CSV file per table in a data directory
//! - `memory`: in-memory tables, mainly for tests

pub mod engine;
pub mod file;
pub mod memory;
