use super::BlobStore;
use crate::error::{DocwatchError, Result};
use std::fs;
use std::path::PathBuf;

pub const DOCUMENTS_FILENAME: &str = "documents_v1.json";

/// A single JSON file inside the data directory.
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(DOCUMENTS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DocwatchError::Io)?;
        }
        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self) -> Result<Option<String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(DocwatchError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.path(), blob).map_err(DocwatchError::Io)?;
        Ok(())
    }
}
