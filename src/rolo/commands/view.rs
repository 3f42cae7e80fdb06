use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

/// Look up a single record by id. Read-only; a missing id gets an info
/// message so the caller can tell the user, without treating it as an
/// error.
pub fn run<S: DataStore>(book: &RecordStore<S>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find(id) {
        Some(record) => result.listed_records.push(record.clone()),
        None => result.add_message(CmdMessage::info(format!("No user with id {}.", id))),
    }
    Ok(result)
}
