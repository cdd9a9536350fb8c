use std::fmt::Display;

use crate::{
    error::Result,
    sql::{
        engine::Engine,
        executor::{
            mutation::{Delete, Insert},
            query::Scan,
            schema::{Help, ShowTables},
        },
        parser::ast::{Dialect, Statement},
        types::{Fields, Record},
    },
};

mod mutation;
mod query;
mod schema;

/// Statement executor trait
pub trait Executor<E: Engine> {
    fn execute(self: Box<Self>, engine: &mut E) -> Result<ResultSet>;
}

/// Builds an executor from a parsed statement
///
/// The `'static` bound is required for the boxed trait object.
impl<E: Engine + 'static> dyn Executor<E> {
    pub fn build(stmt: Statement, dialect: Dialect) -> Box<dyn Executor<E>> {
        match stmt {
            Statement::Insert { table_name, values } => Insert::new(table_name, values),
            Statement::Select { table_name, filter } => Scan::new(table_name, filter),
            Statement::Delete { table_name, filter } => Delete::new(table_name, filter),
            Statement::Tables => ShowTables::new(),
            Statement::Help => Help::new(dialect),
        }
    }
}

/// Execution result set
#[derive(Debug, PartialEq)]
pub enum ResultSet {
    Insert { table_name: String },
    Scan {
        records: Vec<Record>,
        filter: Option<String>,
    },
    Delete { count: usize },
    /// Table name and columns, in name order
    Tables { tables: Vec<(String, Vec<String>)> },
    Help { text: String },
}

/// Console rendering, one line per record or status message
impl Display for ResultSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSet::Insert { table_name } => write!(f, "record inserted into {}", table_name),
            ResultSet::Scan {
                records,
                filter: Some(filter),
            } if records.is_empty() => write!(f, "no matching records: {}", filter),
            ResultSet::Scan { records, .. } => {
                let lines = records
                    .iter()
                    .map(|r| Fields(r).to_string())
                    .collect::<Vec<_>>();
                write!(f, "{}", lines.join("\n"))
            }
            ResultSet::Delete { count: 0 } => write!(f, "no records deleted"),
            ResultSet::Delete { count: 1 } => write!(f, "1 record deleted"),
            ResultSet::Delete { count } => write!(f, "{} records deleted", count),
            ResultSet::Tables { tables } if tables.is_empty() => write!(f, "no tables"),
            ResultSet::Tables { tables } => {
                let lines = tables
                    .iter()
                    .map(|(name, columns)| format!("{} ({})", name, columns.join(", ")))
                    .collect::<Vec<_>>();
                write!(f, "{}", lines.join("\n"))
            }
            ResultSet::Help { text } => write!(f, "{}", text),
        }
    }
}
