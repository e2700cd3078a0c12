//! Cart slots
//!
//! A slot is a named location holding one serialised value. The cart writes
//! its whole state to the [`CART_KEY`] slot after every change.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Key the cart state is stored under.
pub const CART_KEY: &str = "cart";

/// Slot read/write failures.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Underlying file access failed.
    #[error("slot i/o failed: {0}")]
    Io(#[from] io::Error),

    /// Stored value is not valid cart JSON, or state could not be encoded.
    #[error("slot contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable key-value storage for serialised cart state.
pub trait CartSlot: std::fmt::Debug {
    /// Read the value under `key`, `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the slot exists but cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the value cannot be written.
    fn store(&mut self, key: &str, value: &str) -> Result<(), SlotError>;
}

/// Process-local slot. Contents vanish with the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    values: FxHashMap<String, String>,
}

impl MemorySlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `value` under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slot = Self::new();
        slot.values.insert(key.into(), value.into());
        slot
    }

    /// Raw stored value, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl CartSlot for MemorySlot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.values.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        self.values.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartSlot for FileSlot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_slot_round_trips() -> TestResult {
        let mut slot = MemorySlot::new();

        assert_eq!(slot.load(CART_KEY)?, None);

        slot.store(CART_KEY, "{}")?;

        assert_eq!(slot.load(CART_KEY)?.as_deref(), Some("{}"));

        Ok(())
    }

    #[test]
    fn file_slot_missing_file_is_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        let slot = FileSlot::new(dir.path().join("nested"));

        assert_eq!(slot.load(CART_KEY)?, None);

        Ok(())
    }

    #[test]
    fn file_slot_creates_directory_and_overwrites() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut slot = FileSlot::new(dir.path().join("state"));

        slot.store(CART_KEY, "first")?;
        slot.store(CART_KEY, "second")?;

        assert_eq!(slot.load(CART_KEY)?.as_deref(), Some("second"));
        assert!(dir.path().join("state").join("cart.json").exists());

        Ok(())
    }
}
