use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::records::RecordStore;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Import a JSON file, replacing the whole sequence. The two payload
/// failure modes are reported separately and leave the store untouched:
/// valid JSON that is not an array, and a payload that does not parse
/// at all.
pub fn run<S: DataStore>(book: &mut RecordStore<S>, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !path.is_file() {
        result.add_message(CmdMessage::warning(format!(
            "Path not found: {}",
            path.display()
        )));
        return Ok(result);
    }

    let payload = fs::read_to_string(path).map_err(RoloError::Io)?;
    match book.import_json(&payload) {
        Ok(count) => {
            result.add_message(CmdMessage::success("Data imported successfully!"));
            result.add_message(CmdMessage::info(format!(
                "Imported {} record{} from {}",
                count,
                if count == 1 { "" } else { "s" },
                path.display()
            )));
        }
        Err(RoloError::InvalidFormat) => {
            result.add_message(CmdMessage::error("Invalid data format!"));
        }
        Err(RoloError::Serialization(_)) => {
            result.add_message(CmdMessage::error("Error importing data!"));
        }
        Err(other) => return Err(other),
    }
    Ok(result)
}
