use tracing::debug;

use crate::{error::Result, sql::{engine::Engine, executor::ResultSet}};

use super::Executor;

/// INSERT executor
pub struct Insert {
    table_name: String,
    values: Vec<String>,
}

impl Insert {
    pub fn new(table_name: String, values: Vec<String>) -> Box<Self> {
        Box::new(Self { table_name, values })
    }
}

impl<E: Engine> Executor<E> for Insert {
    fn execute(self: Box<Self>, engine: &mut E) -> Result<ResultSet> {
        engine.insert(&self.table_name, self.values)?;
        debug!(table = %self.table_name, "insert done");
        Ok(ResultSet::Insert {
            table_name: self.table_name,
        })
    }
}

/// DELETE executor
pub struct Delete {
    table_name: String,
    filter: String,
}

impl Delete {
    pub fn new(table_name: String, filter: String) -> Box<Self> {
        Box::new(Self { table_name, filter })
    }
}

impl<E: Engine> Executor<E> for Delete {
    fn execute(self: Box<Self>, engine: &mut E) -> Result<ResultSet> {
        let count = engine.delete(&self.table_name, &self.filter)?;
        debug!(table = %self.table_name, filter = %self.filter, count, "delete done");
        Ok(ResultSet::Delete { count })
    }
}
