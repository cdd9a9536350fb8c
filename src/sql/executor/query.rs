use crate::{error::Result, sql::{engine::Engine, executor::ResultSet}};

use super::Executor;

/// Table scan executor, SELECT ALL when `filter` is None
pub struct Scan {
    table_name: String,
    filter: Option<String>,
}

impl Scan {
    pub fn new(table_name: String, filter: Option<String>) -> Box<Self> {
        Box::new(Self { table_name, filter })
    }
}

impl<E: Engine> Executor<E> for Scan {
    fn execute(self: Box<Self>, engine: &mut E) -> Result<ResultSet> {
        let records = engine.scan(&self.table_name, self.filter.as_deref())?;
        Ok(ResultSet::Scan {
            records,
            filter: self.filter,
        })
    }
}
