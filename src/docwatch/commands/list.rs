use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BlobStore, DocumentStore};
use crate::view::{self, SortKey};
use chrono::NaiveDate;

use super::helpers::{canonical_listing, with_canonical_numbers};

/// Lists documents matching `filter_text`, ordered by `view_sort`.
///
/// Rows keep the numbers they have in the canonical listing (`canonical_sort`,
/// unfiltered) so they can be passed straight to edit/remove/export.
pub fn run<B: BlobStore>(
    store: &DocumentStore<B>,
    canonical_sort: SortKey,
    filter_text: &str,
    view_sort: SortKey,
    today: NaiveDate,
) -> Result<CmdResult> {
    let canonical = canonical_listing(store, canonical_sort, today);
    let projected = view::project(store.documents(), filter_text, view_sort);
    let listed = with_canonical_numbers(&canonical, projected);
    Ok(CmdResult::default().with_listed_documents(listed))
}
