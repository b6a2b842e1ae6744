//! Flat-file storage of [`Entry`] records.
//!
//! The file starts with the [`HEADER`] row followed by one record per line.
//! It is the single source of truth: every operation reads it again.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{Entry, HEADER, LedgerError, ResultLedger};

/// Default location of the ledger file.
pub const DEFAULT_PATH: &str = "sample_finance_data_2024.csv";

#[derive(Clone, Debug)]
pub struct Ledger {
    path: PathBuf,
    atomic_writes: bool,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with only the header row when it does not exist.
    ///
    /// Returns `true` if the file was created.
    pub fn init(&self) -> ResultLedger<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        self.rewrite(&[])?;
        tracing::debug!("created ledger file {}", self.path.display());
        Ok(true)
    }

    /// Return every entry in file order.
    ///
    /// Fails only when the file is missing or unreadable, the header is
    /// wrong, or a row has the wrong column count. Unrecognised `Type` and
    /// `Amount` values are kept as read.
    ///
    /// Positions in the returned vector are the indexes used by [`get`] and
    /// [`update`].
    ///
    /// [`get`]: Ledger::get
    /// [`update`]: Ledger::update
    pub fn list_all(&self) -> ResultLedger<Vec<Entry>> {
        let file = self.open()?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|err| self.malformed(err))?;
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(LedgerError::Storage(format!(
                "{}: expected header \"{}\", found \"{}\"",
                self.path.display(),
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        reader
            .deserialize::<Entry>()
            .map(|row| row.map_err(|err| self.malformed(err)))
            .collect()
    }

    /// Return the entry at `index`.
    pub fn get(&self, index: usize) -> ResultLedger<Entry> {
        let mut entries = self.list_all()?;
        let len = entries.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        Ok(entries.swap_remove(index))
    }

    /// Write `entry` as the last line of the file.
    ///
    /// Nothing is validated and duplicates are accepted. The file must
    /// already exist (see [`init`](Ledger::init)).
    pub fn append(&self, entry: &Entry) -> ResultLedger<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| self.unavailable(err))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(entry)?;
        writer.flush()?;
        Ok(())
    }

    /// Replace the entry at `index` and rewrite the whole file.
    ///
    /// The file is left untouched when `index` is out of range.
    pub fn update(&self, index: usize, entry: Entry) -> ResultLedger<()> {
        let mut entries = self.list_all()?;
        let len = entries.len();
        let slot = entries
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;
        *slot = entry;
        self.rewrite(&entries)
    }

    fn open(&self) -> ResultLedger<File> {
        File::open(&self.path).map_err(|err| self.unavailable(err))
    }

    fn unavailable(&self, err: io::Error) -> LedgerError {
        match err.kind() {
            io::ErrorKind::NotFound => {
                LedgerError::Storage(format!("{} not found", self.path.display()))
            }
            _ => LedgerError::Storage(format!("{}: {err}", self.path.display())),
        }
    }

    fn malformed(&self, err: csv::Error) -> LedgerError {
        LedgerError::Storage(format!("{} is malformed: {err}", self.path.display()))
    }

    fn encode(entries: &[Entry]) -> ResultLedger<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer
            .into_inner()
            .map_err(|err| LedgerError::Storage(format!("failed to encode ledger: {err}")))
    }

    fn rewrite(&self, entries: &[Entry]) -> ResultLedger<()> {
        let buffer = Self::encode(entries)?;
        if self.atomic_writes {
            self.replace(&buffer)?;
        } else {
            // A failure in the middle of this write leaves a truncated file.
            fs::write(&self.path, &buffer)?;
        }
        tracing::debug!(
            "rewrote {} with {} entries",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }

    /// Write to a sibling temporary file, then rename it over the ledger.
    fn replace(&self, buffer: &[u8]) -> ResultLedger<()> {
        let mut temp_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(buffer)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        fs::rename(&temp_path, &self.path).map_err(|err| {
            let _ = fs::remove_file(&temp_path);
            LedgerError::Storage(format!("failed to replace {}: {err}", self.path.display()))
        })
    }
}

#[derive(Debug)]
pub struct LedgerBuilder {
    path: PathBuf,
    atomic_writes: bool,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            atomic_writes: false,
        }
    }
}

impl LedgerBuilder {
    /// Pass the ledger file location
    pub fn path(mut self, path: impl Into<PathBuf>) -> LedgerBuilder {
        self.path = path.into();
        self
    }

    /// Rewrite through a temporary file and rename instead of writing in place
    pub fn atomic_writes(mut self, atomic_writes: bool) -> LedgerBuilder {
        self.atomic_writes = atomic_writes;
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            path: self.path,
            atomic_writes: self.atomic_writes,
        }
    }
}
