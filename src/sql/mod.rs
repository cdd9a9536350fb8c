//! Command processing module
//!
//! This module provides:
//! - `parser`: command tokenizer and parser
//! - `types`: record type and matching rule
//! - `schema`: table-name to column-list schema
//! - `executor`: statement execution and result sets
//! - `engine`: schema-checked table engine and command session

pub mod parser;
pub mod types;
pub mod schema;
pub mod executor;
pub mod engine;
