use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordDraft;
use crate::records::RecordStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &mut RecordStore<S>, draft: RecordDraft) -> Result<CmdResult> {
    let record = book.create(draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("User created successfully!"));
    result.affected_records.push(record);
    Ok(result)
}
