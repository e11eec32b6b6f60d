//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every docwatch operation, whatever the UI.
//!
//! It:
//! - owns the [`DocumentStore`] (there is no ambient, module-level document list)
//! - parses selectors (`3`, `2-4`, id prefixes) before dispatching
//! - supplies the reference date, re-derived on every call
//! - returns structured `Result<CmdResult>` values, never strings for a terminal
//!
//! Business rules live in `commands/*.rs`; nothing here writes to stdout.
//!
//! `DocwatchApi<B: BlobStore>` is generic over the persistence backend:
//! `FileBlobStore` in production, `MemoryBlobStore` in tests.

use crate::commands;
use crate::config::DocwatchConfig;
use crate::dates;
use crate::error::{DocwatchError, Result};
use crate::index::{parse_selectors, DocumentSelector};
use crate::model::{Document, DocumentDraft};
use crate::store::{BlobStore, DocumentStore};
use crate::view::SortKey;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub struct DocwatchApi<B: BlobStore> {
    store: DocumentStore<B>,
    config: DocwatchConfig,
    data_dir: PathBuf,
}

impl<B: BlobStore> DocwatchApi<B> {
    pub fn new(backend: B, config: DocwatchConfig, data_dir: PathBuf) -> Self {
        Self {
            store: DocumentStore::open(backend),
            config,
            data_dir,
        }
    }

    pub fn add_document(
        &mut self,
        name: &str,
        expiration: &str,
        alert_lead_days: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let alert_lead_days = alert_lead_days
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_alert_days.to_string());
        let draft = DocumentDraft::new(name, expiration, alert_lead_days);
        commands::add::run(&mut self.store, &draft, dates::today())
    }

    pub fn list_documents(
        &self,
        filter_text: Option<&str>,
        sort_key: Option<SortKey>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(
            &self.store,
            self.config.default_sort,
            filter_text.unwrap_or_default(),
            sort_key.unwrap_or(self.config.default_sort),
            dates::today(),
        )
    }

    pub fn alerts(&self) -> Result<commands::CmdResult> {
        commands::alerts::run(&self.store, self.config.default_sort, dates::today())
    }

    pub fn update_document(
        &mut self,
        selector: &str,
        patch: &commands::DocumentPatch,
    ) -> Result<commands::CmdResult> {
        let selector = parse_single(selector)?;
        commands::update::run(
            &mut self.store,
            self.config.default_sort,
            dates::today(),
            &selector,
            patch,
        )
    }

    pub fn remove_documents<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors).map_err(DocwatchError::Api)?;
        commands::remove::run(
            &mut self.store,
            self.config.default_sort,
            dates::today(),
            &selectors,
        )
    }

    pub fn export_documents<I: AsRef<str>>(
        &self,
        selectors: &[I],
        out_dir: &Path,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors).map_err(DocwatchError::Api)?;
        self.export(&ExportTarget::Documents(selectors), out_dir)
    }

    pub fn export_all(&self, out_dir: &Path) -> Result<commands::CmdResult> {
        self.export(&ExportTarget::All, out_dir)
    }

    fn export(&self, target: &ExportTarget, out_dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(
            &self.store,
            self.config.default_sort,
            dates::today(),
            target,
            out_dir,
            Utc::now(),
        )
    }

    pub fn clear(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, confirmed)
    }

    /// Config changes are written to disk and take effect for this instance too.
    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn documents(&self) -> &[Document] {
        self.store.documents()
    }

    pub fn current_config(&self) -> &DocwatchConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn parse_single(input: &str) -> Result<DocumentSelector> {
    let mut selectors = parse_selectors(&[input]).map_err(DocwatchError::Api)?;
    if selectors.len() != 1 {
        return Err(DocwatchError::Api(format!(
            "Expected a single document, got {}",
            input
        )));
    }
    Ok(selectors.remove(0))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportTarget;
pub use commands::{CmdMessage, CmdResult, DocumentPatch, MessageLevel};
