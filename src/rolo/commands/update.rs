use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordPatch;
use crate::records::RecordStore;
use crate::store::DataStore;

/// Merge `patch` over the record with the given id. A missing id is a
/// silent no-op: the result carries no message and no affected record,
/// matching the store's contract.
pub fn run<S: DataStore>(
    book: &mut RecordStore<S>,
    id: u64,
    patch: &RecordPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if book.update(id, patch)? {
        result.add_message(CmdMessage::success("User updated successfully!"));
        if let Some(record) = book.find(id) {
            result.affected_records.push(record.clone());
        }
    }
    Ok(result)
}
