// One CSV file per table, with advisory locks and copy-then-rename rewrites.
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{
    error::{Error, Result},
    sql::types::Record,
    storage::engine::Engine,
};

/// On-disk storage engine: table `t` lives in `<dir>/t.csv`
///
/// Files have no header row, `\n` line endings and minimal quoting. Records
/// of different lengths may share a file.
#[derive(Debug)]
pub struct FileEngine {
    dir: PathBuf,
}

impl FileEngine {
    /// Opens a data directory, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| io_error(&dir, err))?;
        Ok(Self { dir })
    }

    /// Path of the CSV file backing `table`
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", table))
    }

    fn lock_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.csv.lock", table))
    }

    /// Returns the table path, error if the file doesn't exist
    fn existing_path(&self, table: &str) -> Result<PathBuf> {
        let path = self.table_path(table);
        fs::metadata(&path).map_err(|err| io_error(&path, err))?;
        Ok(path)
    }

    /// Takes the table's advisory lock; released on drop
    fn lock(&self, table: &str, exclusive: bool) -> Result<TableLock> {
        let path = self.lock_path(table);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|err| io_error(&path, err))?;
        let locked = if exclusive {
            FileExt::lock_exclusive(&file)
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|err| io_error(&path, err))?;
        Ok(TableLock { file })
    }

    /// Writes `records` to a temporary file next to `path`, then renames it
    /// over `path`. The original stays untouched until the rename.
    fn replace(&self, path: &Path, records: &[Record]) -> Result<()> {
        let permissions = fs::metadata(path)
            .map_err(|err| io_error(path, err))?
            .permissions();
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|err| io_error(&self.dir, err))?;
        write_records(tmp.as_file_mut(), records)?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;
        Ok(())
    }
}

/// Implements storage Engine trait (whole-table operations)
impl Engine for FileEngine {
    fn append(&mut self, table: &str, record: &Record) -> Result<()> {
        let _lock = self.lock(table, true)?;
        let path = self.table_path(table);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|err| io_error(&path, err))?;
        write_records(file, std::slice::from_ref(record))?;
        debug!(table, fields = record.len(), "appended record to {}", path.display());
        Ok(())
    }

    fn read_all(&mut self, table: &str) -> Result<Vec<Record>> {
        let path = self.existing_path(table)?;
        let _lock = self.lock(table, false)?;
        let file = File::open(&path).map_err(|err| io_error(&path, err))?;
        let records = read_records(file)?;
        debug!(table, records = records.len(), "read {}", path.display());
        Ok(records)
    }

    fn rewrite(&mut self, table: &str, records: &[Record]) -> Result<()> {
        let path = self.existing_path(table)?;
        let _lock = self.lock(table, true)?;
        self.replace(&path, records)?;
        debug!(table, records = records.len(), "rewrote {}", path.display());
        Ok(())
    }

    /// Read, filter and rewrite under one exclusive lock
    fn retain<F>(&mut self, table: &str, mut keep: F) -> Result<usize>
    where
        F: FnMut(&Record) -> bool,
    {
        let path = self.existing_path(table)?;
        let _lock = self.lock(table, true)?;
        let file = File::open(&path).map_err(|err| io_error(&path, err))?;
        let records = read_records(file)?;
        let total = records.len();
        let kept: Vec<Record> = records.into_iter().filter(|r| keep(r)).collect();
        let removed = total - kept.len();
        if removed > 0 {
            self.replace(&path, &kept)?;
        }
        debug!(table, removed, kept = kept.len(), "filtered {}", path.display());
        Ok(removed)
    }
}

struct TableLock {
    file: File,
}

impl Drop for TableLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    Error::Io(format!("{}: {}", path.display(), err))
}

fn read_records<R: Read>(rdr: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);
    let mut records = Vec::new();
    for row in reader.records() {
        records.push(row?.iter().map(String::from).collect());
    }
    Ok(records)
}

fn write_records<W: Write>(wtr: W, records: &[Record]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(wtr);
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}
