use crate::error::Result;

use super::{
    executor::{Executor, ResultSet},
    parser::{Parser, ast::Dialect},
    schema::Schema,
    types::Record,
};

mod table;

pub use table::TableEngine;

/// Table engine trait (schema-checked table operations)
///
/// Every operation first checks the table name against the schema and fails
/// with `Error::TableNotFound` before touching storage.
pub trait Engine {
    fn schema(&self) -> &Schema;

    /// Appends one record, creating the table's storage on first insert
    fn insert(&mut self, table_name: &str, record: Record) -> Result<()>;

    /// Full scan, keeping records with a field containing `filter` if given
    fn scan(&mut self, table_name: &str, filter: Option<&str>) -> Result<Vec<Record>>;

    /// Removes records with a field containing `filter`, returns how many
    fn delete(&mut self, table_name: &str, filter: &str) -> Result<usize>;
}

/// Command session: parses lines and runs them against an engine
pub struct Session<E: Engine> {
    engine: E,
    dialect: Dialect,
}

impl<E: Engine + 'static> Session<E> {
    pub fn new(engine: E, dialect: Dialect) -> Self {
        Self { engine, dialect }
    }

    /// Executes one command line
    pub fn execute(&mut self, line: &str) -> Result<ResultSet> {
        let stmt = Parser::new(line, self.dialect).parse()?;
        <dyn Executor<E>>::build(stmt, self.dialect).execute(&mut self.engine)
    }
}
