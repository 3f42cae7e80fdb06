use crate::commands::CmdResult;
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &RecordStore<S>, term: &str) -> Result<CmdResult> {
    let matches = book.filter(term).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_records(matches))
}
