use crate::calendar::{export_calendar, export_filename, export_reminders};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DocwatchError, Result};
use crate::index::DocumentSelector;
use crate::store::{BlobStore, DocumentStore};
use crate::view::SortKey;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::helpers::{canonical_listing, resolve_selectors};

pub const ALL_DOCUMENTS_FILENAME: &str = "docwatch-reminders.ics";

#[derive(Debug, Clone)]
pub enum ExportTarget {
    /// One `.ics` file per selected document.
    Documents(Vec<DocumentSelector>),
    /// A single calendar with reminders for every document.
    All,
}

pub fn run<B: BlobStore>(
    store: &DocumentStore<B>,
    sort_key: SortKey,
    today: NaiveDate,
    target: &ExportTarget,
    out_dir: &Path,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    if store.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No documents to export."));
        return Ok(res);
    }

    match target {
        ExportTarget::All => {
            let documents: Vec<_> = canonical_listing(store, sort_key, today)
                .into_iter()
                .map(|dd| dd.document)
                .collect();
            let payload = export_calendar(&documents, now)?;
            let path = write_payload(out_dir, ALL_DOCUMENTS_FILENAME, &payload)?;

            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Exported reminders for {} documents to {}",
                documents.len(),
                path.display()
            )));
            Ok(result.with_exported_paths(vec![path]))
        }
        ExportTarget::Documents(selectors) => {
            let (resolved, warnings) = resolve_selectors(store, sort_key, today, selectors)?;
            let mut result = CmdResult::default();
            result.messages.extend(warnings);
            let mut taken = HashSet::new();

            for (_, id) in resolved {
                let Some(document) = store.get(&id) else {
                    continue;
                };
                let payload = export_reminders(document, now)?;
                let filename = unique_filename(&mut taken, &export_filename(&document.name));
                let path = write_payload(out_dir, &filename, &payload)?;
                result.add_message(CmdMessage::success(format!(
                    "Exported {} to {}",
                    document.name,
                    path.display()
                )));
                result.exported_paths.push(path);
            }

            Ok(result)
        }
    }
}

/// Documents whose names slug the same (`Passport`, `passport`) get
/// `-2`, `-3`... so one export never overwrites its own files.
fn unique_filename(taken: &mut HashSet<String>, filename: &str) -> String {
    let stem = filename.strip_suffix(".ics").unwrap_or(filename);
    let mut candidate = filename.to_string();
    let mut n = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}-{}.ics", stem, n);
        n += 1;
    }
    candidate
}

fn write_payload(out_dir: &Path, filename: &str, payload: &str) -> Result<PathBuf> {
    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(DocwatchError::Io)?;
    }
    let path = out_dir.join(filename);
    fs::write(&path, payload).map_err(DocwatchError::Io)?;
    info!(path = %path.display(), "calendar written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn writes_one_file_per_document() {
        let temp = TempDir::new().unwrap();
        let fixture = StoreFixture::new()
            .with_document("My Passport", "2026-05-10", 30)
            .with_document("Visa", "2026-09-01", 10);

        let result = run(
            &fixture.store,
            SortKey::ExpirationAsc,
            today(),
            &ExportTarget::Documents(vec![DocumentSelector::Index(1)]),
            temp.path(),
            now(),
        )
        .unwrap();

        let path = temp.path().join("my-passport.ics");
        assert_eq!(result.exported_paths, vec![path.clone()]);
        let payload = fs::read_to_string(path).unwrap();
        assert!(payload.contains("DTSTART;VALUE=DATE:20260410\r\n"));
        assert!(payload.contains("DTSTART;VALUE=DATE:20260510\r\n"));
    }

    #[test]
    fn same_slug_documents_get_separate_files() {
        let temp = TempDir::new().unwrap();
        let fixture = StoreFixture::new()
            .with_document("Passport", "2026-05-10", 30)
            .with_document("passport", "2026-06-10", 30)
            .with_document("PASSPORT", "2026-07-10", 30);

        let result = run(
            &fixture.store,
            SortKey::ExpirationAsc,
            today(),
            &ExportTarget::Documents(vec![
                DocumentSelector::Index(1),
                DocumentSelector::Index(2),
                DocumentSelector::Index(3),
            ]),
            temp.path(),
            now(),
        )
        .unwrap();

        assert_eq!(
            result.exported_paths,
            vec![
                temp.path().join("passport.ics"),
                temp.path().join("passport-2.ics"),
                temp.path().join("passport-3.ics"),
            ]
        );
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 3);
        let second = fs::read_to_string(temp.path().join("passport-2.ics")).unwrap();
        assert!(second.contains("DTSTART;VALUE=DATE:20260610\r\n"));
    }

    #[test]
    fn unique_filename_skips_taken_names() {
        let mut taken = HashSet::new();
        assert_eq!(unique_filename(&mut taken, "visa.ics"), "visa.ics");
        assert_eq!(unique_filename(&mut taken, "visa.ics"), "visa-2.ics");
        taken.insert("visa-3.ics".to_string());
        assert_eq!(unique_filename(&mut taken, "visa.ics"), "visa-4.ics");
    }

    #[test]
    fn exports_everything_into_one_calendar() {
        let temp = TempDir::new().unwrap();
        let fixture = StoreFixture::new()
            .with_document("Passport", "2026-05-10", 30)
            .with_document("Visa", "2026-09-01", 10);

        let result = run(
            &fixture.store,
            SortKey::ExpirationAsc,
            today(),
            &ExportTarget::All,
            &temp.path().join("out"),
            now(),
        )
        .unwrap();

        let payload = fs::read_to_string(&result.exported_paths[0]).unwrap();
        assert_eq!(payload.matches("BEGIN:VEVENT").count(), 4);
        assert!(result.exported_paths[0].ends_with(ALL_DOCUMENTS_FILENAME));
    }

    #[test]
    fn empty_store_exports_nothing() {
        let temp = TempDir::new().unwrap();
        let fixture = StoreFixture::new();
        let result = run(
            &fixture.store,
            SortKey::ExpirationAsc,
            today(),
            &ExportTarget::All,
            temp.path(),
            now(),
        )
        .unwrap();
        assert!(result.exported_paths.is_empty());
        assert!(!temp.path().join(ALL_DOCUMENTS_FILENAME).exists());
    }
}
