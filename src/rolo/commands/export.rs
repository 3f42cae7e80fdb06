use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::records::RecordStore;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Write the current sequence as pretty-printed JSON to `path`. An
/// empty sequence exports as `[]`.
pub fn run<S: DataStore>(book: &RecordStore<S>, path: &Path) -> Result<CmdResult> {
    let payload = book.export_json()?;
    fs::write(path, payload).map_err(RoloError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    Ok(result)
}
