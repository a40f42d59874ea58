use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jobscraper_engine::{AtomicFileWriter, SlotStorage, StoreError};

/// The persistent key-value slot for the template collection: one JSON file,
/// rewritten atomically on every mutation. A missing file reads as empty.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SlotStorage for FileSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Storage(format!(
                "read {}: {err}",
                self.path.display()
            ))),
        }
    }

    fn write(&self, raw: &str) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let name = self
            .path
            .file_name()
            .ok_or_else(|| StoreError::Storage("template path has no file name".to_string()))?
            .to_string_lossy();

        AtomicFileWriter::new(dir.to_path_buf())
            .write(&name, raw)
            .map(|_| ())
            .map_err(|err| StoreError::Storage(format!("write {}: {err}", self.path.display())))
    }
}
