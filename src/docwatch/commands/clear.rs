use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BlobStore, DocumentStore};
use tracing::info;

/// Removes every document. Callers ask for confirmation first; `confirmed ==
/// false` leaves the store untouched.
pub fn run<B: BlobStore>(store: &mut DocumentStore<B>, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::info("No documents to remove."));
        return Ok(result);
    }

    if !confirmed {
        result.add_message(CmdMessage::info("Aborted, nothing removed."));
        return Ok(result);
    }

    let removed = store.clear()?;
    info!(count = removed, "all documents removed");
    result.add_message(CmdMessage::success(format!(
        "All documents removed ({}).",
        removed
    )));
    Ok(result)
}
