use crate::commands::{CmdMessage, CmdResult};
use crate::dates::day_count;
use crate::error::Result;
use crate::model::DocumentDraft;
use crate::status::Status;
use crate::store::{BlobStore, DocumentStore};
use chrono::NaiveDate;
use tracing::info;

pub fn run<B: BlobStore>(
    store: &mut DocumentStore<B>,
    draft: &DocumentDraft,
    today: NaiveDate,
) -> Result<CmdResult> {
    let document = store.add(draft)?;
    info!(id = %document.id, name = %document.name, "document added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document added: {} (expires {})",
        document.name,
        document.expiration_iso()
    )));

    let report = document.status_on(today);
    match report.status {
        Status::Expired => result.add_message(CmdMessage::warning(format!(
            "{} already expired {} ago",
            document.name,
            day_count(report.remaining_days.unsigned_abs())
        ))),
        Status::Alert if report.remaining_days == 0 => result.add_message(CmdMessage::warning(
            format!("{} expires today", document.name),
        )),
        Status::Alert => result.add_message(CmdMessage::warning(format!(
            "{} expires in {}",
            document.name,
            day_count(report.remaining_days.unsigned_abs())
        ))),
        Status::Ok => {}
    }

    result.affected_documents.push(document);
    Ok(result)
}
