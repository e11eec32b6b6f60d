use crate::commands::{CmdMessage, CmdResult, DocumentPatch};
use crate::error::Result;
use crate::index::DocumentSelector;
use crate::store::{BlobStore, DocumentStore};
use crate::view::SortKey;
use chrono::NaiveDate;
use tracing::info;

use super::helpers::resolve_selectors;

/// Edits one document: its current values overlaid with the patch, validated
/// as a whole, then swapped in.
pub fn run<B: BlobStore>(
    store: &mut DocumentStore<B>,
    sort_key: SortKey,
    today: NaiveDate,
    selector: &DocumentSelector,
    patch: &DocumentPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    let (resolved, warnings) =
        resolve_selectors(store, sort_key, today, std::slice::from_ref(selector))?;
    result.messages.extend(warnings);

    for (selector, id) in resolved {
        let Some(current) = store.get(&id) else {
            continue;
        };

        let mut draft = current.to_draft();
        if let Some(name) = &patch.name {
            draft.name = name.clone();
        }
        if let Some(expiration) = &patch.expiration {
            draft.expiration = expiration.clone();
        }
        if let Some(days) = &patch.alert_lead_days {
            draft.alert_lead_days = days.clone();
        }

        if let Some(updated) = store.update(&id, &draft)? {
            info!(%id, name = %updated.name, "document updated");
            result.add_message(CmdMessage::success(format!(
                "Document updated ({}): {}",
                selector, updated.name
            )));
            result.affected_documents.push(updated);
        }
    }

    Ok(result)
}
