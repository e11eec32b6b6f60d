//! # Storage Layer
//!
//! Persistence is deliberately dumb: one keyed blob holding the whole ordered
//! sequence of documents as JSON. Every mutation rewrites the blob in full.
//!
//! Two pieces live here:
//!
//! - [`BlobStore`]: the read/write contract for that single blob.
//!   - [`fs::FileBlobStore`]: production, a JSON file in the data directory
//!   - [`memory::MemoryBlobStore`]: tests, no filesystem
//!
//! - [`DocumentStore`]: owns the in-memory sequence plus a backend, validates
//!   input and persists after each change. Every UI client goes through one of
//!   these rather than touching the blob directly.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── documents_v1.json   # JSON array of documents, in insertion order
//! └── config.json         # DocwatchConfig
//! ```
//!
//! A missing or unreadable blob is an empty store, never an error.

use crate::error::Result;
use crate::model::{Document, DocumentDraft};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Where the serialized document sequence lives.
pub trait BlobStore {
    /// The current blob, or `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the blob entirely.
    fn write(&mut self, blob: &str) -> Result<()>;
}

/// Reads the persisted sequence. Never fails: missing, unreadable or corrupt
/// data all come back as an empty sequence.
pub fn load_documents<B: BlobStore>(backend: &B) -> Vec<Document> {
    read_documents(backend).0
}

/// The persisted sequence, plus whether any entry was missing its id and had
/// one generated during this read.
fn read_documents<B: BlobStore>(backend: &B) -> (Vec<Document>, bool) {
    let raw = match backend.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no persisted documents, starting empty");
            return (Vec::new(), false);
        }
        Err(e) => {
            warn!(error = %e, "could not read persisted documents, starting empty");
            return (Vec::new(), false);
        }
    };

    let parsed = serde_json::from_str::<Vec<serde_json::Value>>(&raw).and_then(|entries| {
        let missing_ids = entries.iter().any(|entry| entry.get("id").is_none());
        let documents = serde_json::from_value::<Vec<Document>>(serde_json::Value::Array(entries))?;
        Ok((documents, missing_ids))
    });

    match parsed {
        Ok((documents, missing_ids)) => {
            debug!(count = documents.len(), missing_ids, "loaded documents");
            (documents, missing_ids)
        }
        Err(e) => {
            warn!(error = %e, "persisted documents are unparseable, starting empty");
            (Vec::new(), false)
        }
    }
}

/// Serializes the full sequence and overwrites the blob with it.
pub fn save_documents<B: BlobStore>(backend: &mut B, documents: &[Document]) -> Result<()> {
    let blob = serde_json::to_string_pretty(documents)?;
    backend.write(&blob)?;
    debug!(count = documents.len(), "saved documents");
    Ok(())
}

/// The ordered document collection and the backend it is persisted to.
pub struct DocumentStore<B: BlobStore> {
    documents: Vec<Document>,
    backend: B,
}

impl<B: BlobStore> DocumentStore<B> {
    /// Loads whatever the backend holds.
    ///
    /// Documents saved without an id get one here, and the sequence is written
    /// back straight away so the id is the same on the next open.
    pub fn open(backend: B) -> Self {
        let (documents, missing_ids) = read_documents(&backend);
        let mut store = Self { documents, backend };
        if missing_ids {
            match store.persist() {
                Ok(()) => info!(count = store.len(), "assigned ids to stored documents"),
                Err(e) => warn!(error = %e, "could not save generated document ids"),
            }
        }
        store
    }

    /// Documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Document> {
        self.documents.iter().find(|d| &d.id == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validates and appends a new document, then persists.
    pub fn add(&mut self, draft: &DocumentDraft) -> Result<Document> {
        let fields = draft.validate()?;
        let document = Document::new(fields);
        self.documents.push(document.clone());
        self.persist()?;
        Ok(document)
    }

    /// Validates the replacement, then swaps it in place.
    ///
    /// An unknown id is a no-op: `Ok(None)`, nothing persisted. Validation runs
    /// first, so bad input is reported even for an unknown id.
    pub fn update(&mut self, id: &Uuid, draft: &DocumentDraft) -> Result<Option<Document>> {
        let fields = draft.validate()?;
        let Some(document) = self.documents.iter_mut().find(|d| &d.id == id) else {
            debug!(%id, "update of unknown document ignored");
            return Ok(None);
        };
        document.replace(fields);
        let updated = document.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Removes a document. An unknown id is a no-op: `Ok(None)`, nothing persisted.
    pub fn remove(&mut self, id: &Uuid) -> Result<Option<Document>> {
        let Some(position) = self.documents.iter().position(|d| &d.id == id) else {
            debug!(%id, "removal of unknown document ignored");
            return Ok(None);
        };
        let removed = self.documents.remove(position);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Drops every document. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.documents.len();
        self.documents.clear();
        self.persist()?;
        Ok(count)
    }

    fn persist(&mut self) -> Result<()> {
        save_documents(&mut self.backend, &self.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryBlobStore;
    use super::*;
    use crate::error::DocwatchError;

    fn passport() -> DocumentDraft {
        DocumentDraft::new("Passport", "2026-05-10", "30")
    }

    #[test]
    fn add_appends_and_persists() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        store.add(&passport()).unwrap();
        store
            .add(&DocumentDraft::new("Visa", "2026-01-01", "10"))
            .unwrap();

        let names: Vec<_> = store.documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Passport", "Visa"]);

        let reloaded = load_documents(store.backend());
        assert_eq!(reloaded, store.documents());
    }

    #[test]
    fn add_rejects_invalid_input_without_persisting() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        let err = store
            .add(&DocumentDraft::new("", "2026-05-10", "30"))
            .unwrap_err();
        assert!(matches!(err, DocwatchError::EmptyName));

        let err = store
            .add(&DocumentDraft::new("Passport", "2026-05-10", "-1"))
            .unwrap_err();
        assert!(matches!(err, DocwatchError::InvalidAlertLeadDays(_)));

        let err = store
            .add(&DocumentDraft::new("Passport", "2026-05-10", "2.5"))
            .unwrap_err();
        assert!(matches!(err, DocwatchError::InvalidAlertLeadDays(_)));

        assert!(store.is_empty());
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        let first = store.add(&passport()).unwrap();
        store
            .add(&DocumentDraft::new("Visa", "2026-01-01", "10"))
            .unwrap();

        let updated = store
            .update(&first.id, &DocumentDraft::new("Passport", "2036-05-10", "60"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(store.documents()[0].alert_lead_days, 60);
        assert_eq!(store.documents()[1].name, "Visa");
        assert_eq!(load_documents(store.backend())[0].alert_lead_days, 60);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        store.add(&passport()).unwrap();
        let blob_before = store.backend().read().unwrap();
        let writes_before = store.backend().writes();

        let missing = Uuid::new_v4();
        assert!(store.update(&missing, &passport()).unwrap().is_none());
        assert!(store.remove(&missing).unwrap().is_none());

        assert_eq!(store.backend().writes(), writes_before);
        assert_eq!(store.backend().read().unwrap(), blob_before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_validates_before_lookup() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        let err = store
            .update(&Uuid::new_v4(), &DocumentDraft::new("X", "", "1"))
            .unwrap_err();
        assert!(matches!(err, DocwatchError::MissingExpiration));
    }

    #[test]
    fn remove_deletes_and_persists() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        let doc = store.add(&passport()).unwrap();
        let removed = store.remove(&doc.id).unwrap().unwrap();
        assert_eq!(removed.id, doc.id);
        assert!(store.is_empty());
        assert!(load_documents(store.backend()).is_empty());
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        store.add(&passport()).unwrap();
        store.add(&passport()).unwrap();
        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.is_empty());
        assert!(load_documents(store.backend()).is_empty());
    }

    #[test]
    fn corrupt_blob_loads_as_empty() {
        let store = DocumentStore::open(MemoryBlobStore::with_blob("{not json"));
        assert!(store.is_empty());

        let store = DocumentStore::open(MemoryBlobStore::with_blob(r#"{"name":"x"}"#));
        assert!(store.is_empty());
    }

    #[test]
    fn legacy_blob_without_ids_loads() {
        let blob = r#"[{"name":"Passport","expiration":"2026-05-10","alertLeadDays":30}]"#;
        let store = DocumentStore::open(MemoryBlobStore::with_blob(blob));
        assert_eq!(store.len(), 1);
        assert_eq!(store.documents()[0].name, "Passport");
    }

    #[test]
    fn generated_ids_survive_reopening() {
        let blob = r#"[{"name":"Passport","expiration":"2026-05-10","alertLeadDays":30},
                       {"name":"Visa","expiration":"2026-09-01","alertLeadDays":10}]"#;
        let first = DocumentStore::open(MemoryBlobStore::with_blob(blob));
        assert_eq!(first.backend().writes(), 1);

        let rewritten = first.backend().read().unwrap().unwrap();
        let second = DocumentStore::open(MemoryBlobStore::with_blob(rewritten));
        let ids = |store: &DocumentStore<MemoryBlobStore>| -> Vec<Uuid> {
            store.documents().iter().map(|d| d.id).collect()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(second.backend().writes(), 0);
    }

    #[test]
    fn blobs_with_ids_are_not_rewritten_on_open() {
        let mut store = DocumentStore::open(MemoryBlobStore::new());
        store.add(&passport()).unwrap();
        let blob = store.backend().read().unwrap().unwrap();

        let reopened = DocumentStore::open(MemoryBlobStore::with_blob(blob));
        assert_eq!(reopened.backend().writes(), 0);
        assert_eq!(reopened.documents(), store.documents());
    }
}
