use crate::{error::Result, sql::types::Record};

/// Abstract storage engine interface (whole-table operations)
///
/// Different from sql::engine::Engine which checks tables against the schema.
/// A table that was never written to does not exist: reading or rewriting it
/// is an error, appending creates it.
pub trait Engine {
    /// Appends one record at the end of the table, creating the table if absent
    fn append(&mut self, table: &str, record: &Record) -> Result<()>;

    /// Reads every record of the table, in storage order
    fn read_all(&mut self, table: &str) -> Result<Vec<Record>>;

    /// Replaces the whole content of an existing table
    fn rewrite(&mut self, table: &str, records: &[Record]) -> Result<()>;

    /// Keeps only the records for which `keep` returns true
    ///
    /// Returns how many records were removed. Nothing is written when no
    /// record is removed.
    fn retain<F>(&mut self, table: &str, mut keep: F) -> Result<usize>
    where
        F: FnMut(&Record) -> bool,
    {
        let records = self.read_all(table)?;
        let total = records.len();
        let kept: Vec<Record> = records.into_iter().filter(|r| keep(r)).collect();
        let removed = total - kept.len();
        if removed > 0 {
            self.rewrite(table, &kept)?;
        }
        Ok(removed)
    }
}
