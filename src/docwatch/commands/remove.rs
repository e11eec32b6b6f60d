use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DocumentSelector;
use crate::store::{BlobStore, DocumentStore};
use crate::view::SortKey;
use chrono::NaiveDate;
use tracing::info;

use super::helpers::resolve_selectors;

pub fn run<B: BlobStore>(
    store: &mut DocumentStore<B>,
    sort_key: SortKey,
    today: NaiveDate,
    selectors: &[DocumentSelector],
) -> Result<CmdResult> {
    let (resolved, warnings) = resolve_selectors(store, sort_key, today, selectors)?;
    let mut result = CmdResult::default();
    result.messages.extend(warnings);

    for (selector, id) in resolved {
        if let Some(removed) = store.remove(&id)? {
            info!(%id, name = %removed.name, "document removed");
            result.add_message(CmdMessage::success(format!(
                "Document removed ({}): {}",
                selector, removed.name
            )));
            result.affected_documents.push(removed);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 20).unwrap()
    }

    #[test]
    fn removes_by_canonical_index() {
        let mut fixture = StoreFixture::new()
            .with_document("Visa", "2026-09-01", 30)
            .with_document("Passport", "2026-05-10", 30);

        let result = run(
            &mut fixture.store,
            SortKey::ExpirationAsc,
            today(),
            &[DocumentSelector::Index(1)],
        )
        .unwrap();

        assert_eq!(result.affected_documents[0].name, "Passport");
        assert_eq!(fixture.store.len(), 1);
        assert_eq!(fixture.store.documents()[0].name, "Visa");
    }

    #[test]
    fn several_indexes_resolve_against_one_snapshot() {
        let mut fixture = StoreFixture::new()
            .with_document("A", "2026-06-01", 1)
            .with_document("B", "2026-07-01", 1)
            .with_document("C", "2026-08-01", 1);

        run(
            &mut fixture.store,
            SortKey::ExpirationAsc,
            today(),
            &[DocumentSelector::Index(1), DocumentSelector::Index(2)],
        )
        .unwrap();

        let names: Vec<_> = fixture.store.documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["C"]);
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut fixture = StoreFixture::new().with_document("Passport", "2026-05-10", 30);
        let blob = fixture.store.backend().writes();

        let result = run(
            &mut fixture.store,
            SortKey::ExpirationAsc,
            today(),
            &[DocumentSelector::Index(2)],
        )
        .unwrap();

        assert!(result.affected_documents.is_empty());
        assert_eq!(fixture.store.len(), 1);
        assert_eq!(fixture.store.backend().writes(), blob);
    }
}
