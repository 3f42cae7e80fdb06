use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

/// Remove the record with the given id. A missing id leaves the
/// sequence unchanged (it is still persisted) and reports nothing.
pub fn run<S: DataStore>(book: &mut RecordStore<S>, id: u64) -> Result<CmdResult> {
    let removed = book.find(id).cloned();
    let mut result = CmdResult::default();
    if book.delete(id)? {
        result.add_message(CmdMessage::success("User deleted successfully!"));
        if let Some(record) = removed {
            result.affected_records.push(record);
        }
    }
    Ok(result)
}
