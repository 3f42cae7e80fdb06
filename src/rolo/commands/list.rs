use crate::commands::CmdResult;
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &RecordStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(book.records().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_all_records_in_insertion_order() {
        let book = RecordStore::open(InMemoryStore::new()).unwrap();
        let result = run(&book).unwrap();
        let ids: Vec<u64> = result.listed_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let book = RecordStore::open_with(InMemoryStore::new(), Vec::new()).unwrap();
        let result = run(&book).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
