use std::collections::BTreeMap;

use crate::{
    error::{Error, Result},
    sql::types::Record,
    storage::engine::Engine,
};

/// In-memory storage engine
#[derive(Debug, Default)]
pub struct MemoryEngine {
    data: BTreeMap<String, Vec<Record>>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self { data: BTreeMap::new() }
    }

    fn must_get(&mut self, table: &str) -> Result<&mut Vec<Record>> {
        self.data
            .get_mut(table)
            .ok_or(Error::Io(format!("table {} has no storage", table)))
    }
}

/// Implements storage Engine trait (whole-table operations)
impl Engine for MemoryEngine {
    fn append(&mut self, table: &str, record: &Record) -> Result<()> {
        self.data
            .entry(table.to_string())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    fn read_all(&mut self, table: &str) -> Result<Vec<Record>> {
        Ok(self.must_get(table)?.clone())
    }

    fn rewrite(&mut self, table: &str, records: &[Record]) -> Result<()> {
        *self.must_get(table)? = records.to_vec();
        Ok(())
    }
}
