//! flatdb - A tiny table store over flat CSV files
//!
//! This crate provides:
//! - A JSON schema naming the tables and their columns
//! - A whitespace-token command parser (INSERT / SELECT / DELETE)
//! - A table engine doing whole-file scans and rewrites
//! - Pluggable storage backends (CSV files on disk, in-memory)
//! - An interactive read-eval-print loop

pub mod error;
pub mod repl;
pub mod sql;
pub mod storage;
