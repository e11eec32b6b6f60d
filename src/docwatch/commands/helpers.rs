use crate::commands::CmdMessage;
use crate::error::{DocwatchError, Result};
use crate::index::{index_documents, resolve, DisplayDocument, DocumentSelector, Resolution};
use crate::model::Document;
use crate::store::{BlobStore, DocumentStore};
use crate::view::SortKey;
use chrono::NaiveDate;
use uuid::Uuid;

pub fn canonical_listing<B: BlobStore>(
    store: &DocumentStore<B>,
    sort_key: SortKey,
    today: NaiveDate,
) -> Vec<DisplayDocument> {
    index_documents(store.documents(), sort_key, today)
}

/// Pairs each document of a derived view with its canonical listing entry.
pub fn with_canonical_numbers(
    canonical: &[DisplayDocument],
    view: Vec<Document>,
) -> Vec<DisplayDocument> {
    view.into_iter()
        .filter_map(|doc| canonical.iter().find(|dd| dd.document.id == doc.id).cloned())
        .collect()
}

/// Resolves selectors to ids, up front.
///
/// Selectors that match nothing become warnings, not errors: the operation on
/// them is a no-op. A prefix that matches several documents is an error, since
/// guessing which one was meant could edit or remove the wrong document.
/// Duplicates (e.g. `2 1-3`) are collapsed.
pub fn resolve_selectors<B: BlobStore>(
    store: &DocumentStore<B>,
    sort_key: SortKey,
    today: NaiveDate,
    selectors: &[DocumentSelector],
) -> Result<(Vec<(DocumentSelector, Uuid)>, Vec<CmdMessage>)> {
    let listing = canonical_listing(store, sort_key, today);
    let mut resolved: Vec<(DocumentSelector, Uuid)> = Vec::new();
    let mut warnings = Vec::new();

    for selector in selectors {
        match resolve(&listing, selector) {
            Resolution::Found(id) => {
                if !resolved.iter().any(|(_, seen)| *seen == id) {
                    resolved.push((selector.clone(), id));
                }
            }
            Resolution::Missing => {
                warnings.push(CmdMessage::warning(format!(
                    "No document matches {}",
                    selector
                )));
            }
            Resolution::Ambiguous(count) => {
                return Err(DocwatchError::Api(format!(
                    "{} matches {} documents, use more of the id",
                    selector, count
                )));
            }
        }
    }

    Ok((resolved, warnings))
}
