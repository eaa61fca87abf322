//! Persistent storage for the access counter

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::trace;

/// Error from a counter store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("Counter store I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stored value is not two bytes long
    #[error("Corrupt counter store: expected 2 bytes, found {0}")]
    Corrupt(usize),
}

/// Storage that keeps the counter across power cycles
pub trait CounterStore {
    /// Read the stored value; a store that was never written holds 0
    fn load(&mut self) -> Result<u16, StoreError>;

    /// Durably store `value`
    fn commit(&mut self, value: u16) -> Result<(), StoreError>;
}

/// Volatile store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: u16,
    commits: usize,
}

impl MemoryStore {
    /// Create a store pre-loaded with `value`
    pub const fn new(value: u16) -> Self {
        Self { value, commits: 0 }
    }

    /// Last committed value
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Number of commits so far
    pub const fn commits(&self) -> usize {
        self.commits
    }
}

impl CounterStore for MemoryStore {
    fn load(&mut self) -> Result<u16, StoreError> {
        Ok(self.value)
    }

    fn commit(&mut self, value: u16) -> Result<(), StoreError> {
        self.value = value;
        self.commits += 1;
        Ok(())
    }
}

/// Store keeping the counter as two big-endian bytes in a file
///
/// A missing file reads as a freshly provisioned device.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CounterStore for FileStore {
    fn load(&mut self) -> Result<u16, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let value: [u8; 2] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| StoreError::Corrupt(bytes.len()))?;
        Ok(u16::from_be_bytes(value))
    }

    fn commit(&mut self, value: u16) -> Result<(), StoreError> {
        trace!(path = %self.path.display(), value, "Committing counter");
        fs::write(&self.path, value.to_be_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new(7);
        assert_eq!(store.load().unwrap(), 7);
        store.commit(8).unwrap();
        assert_eq!(store.value(), 8);
        assert_eq!(store.commits(), 1);
    }

    #[test]
    fn test_file_store_missing_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("counter"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_file_store_persists_big_endian() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter");

        FileStore::new(&path).commit(0x0102).unwrap();
        assert_eq!(fs::read(&path).unwrap(), [0x01, 0x02]);
        assert_eq!(FileStore::new(&path).load().unwrap(), 0x0102);
    }

    #[test]
    fn test_file_store_corrupt() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        io::Write::write_all(&mut file, &[1, 2, 3]).unwrap();

        let mut store = FileStore::new(file.path());
        assert!(matches!(store.load(), Err(StoreError::Corrupt(3))));
    }
}
