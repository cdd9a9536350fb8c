use tracing::debug;

use crate::{
    error::Result,
    sql::{schema::Schema, types::{self, Record}},
    storage::engine::Engine as StorageEngine,
};

use super::Engine;

/// Storage backed table engine
///
/// Owns the immutable schema and uses it only to check table existence;
/// column lists are never compared with record contents.
pub struct TableEngine<S: StorageEngine> {
    schema: Schema,
    store: S,
}

impl<S: StorageEngine> TableEngine<S> {
    pub fn new(schema: Schema, store: S) -> Self {
        Self { schema, store }
    }

    pub fn storage(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: StorageEngine> Engine for TableEngine<S> {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn insert(&mut self, table_name: &str, record: Record) -> Result<()> {
        let columns = self.schema.must_get_table(table_name)?;
        if columns.len() != record.len() {
            debug!(
                table = table_name,
                columns = columns.len(),
                fields = record.len(),
                "record arity differs from schema"
            );
        }
        self.store.append(table_name, &record)
    }

    fn scan(&mut self, table_name: &str, filter: Option<&str>) -> Result<Vec<Record>> {
        self.schema.must_get_table(table_name)?;
        let records = self.store.read_all(table_name)?;
        Ok(match filter {
            Some(filter) => records
                .into_iter()
                .filter(|r| types::matches(r, filter))
                .collect(),
            None => records,
        })
    }

    fn delete(&mut self, table_name: &str, filter: &str) -> Result<usize> {
        self.schema.must_get_table(table_name)?;
        self.store
            .retain(table_name, |r| !types::matches(r, filter))
    }
}
