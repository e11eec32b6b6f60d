use super::BlobStore;
use crate::error::Result;

/// Keeps the blob in memory. Counts writes so tests can assert that no-op
/// operations left storage untouched.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blob: Option<String>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing blob, as if a previous session had written it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            writes: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
