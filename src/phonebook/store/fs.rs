use super::DataStore;
use crate::error::{BookError, Result};
use crate::record::ExportedRecord;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Book stored as one JSON array file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<ExportedRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no book file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(BookError::Io)?;
        let records: Vec<ExportedRecord> =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        info!(path = %self.path.display(), entries = records.len(), "read book file");
        Ok(records)
    }

    fn save(&mut self, records: &[ExportedRecord]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(records).map_err(BookError::Serialization)?;
        fs::write(&self.path, content).map_err(BookError::Io)?;
        info!(path = %self.path.display(), entries = records.len(), "wrote book file");
        Ok(())
    }
}
