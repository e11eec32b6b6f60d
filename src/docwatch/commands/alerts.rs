use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BlobStore, DocumentStore};
use crate::view::{self, SortKey};
use chrono::NaiveDate;

use super::helpers::{canonical_listing, with_canonical_numbers};

pub fn run<B: BlobStore>(
    store: &DocumentStore<B>,
    canonical_sort: SortKey,
    today: NaiveDate,
) -> Result<CmdResult> {
    let canonical = canonical_listing(store, canonical_sort, today);
    let urgent = view::alerts(store.documents(), today);
    let listed = with_canonical_numbers(&canonical, urgent);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No alerts right now. All documents are OK."));
    }
    Ok(result.with_listed_documents(listed))
}
