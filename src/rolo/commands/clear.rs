use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &mut RecordStore<S>) -> Result<CmdResult> {
    book.clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All data cleared!"));
    Ok(result)
}
