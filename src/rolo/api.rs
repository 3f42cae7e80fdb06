//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all rolo operations, regardless of the UI
//! driving it.
//!
//! The facade dispatches to the matching command function and returns
//! structured `Result<CmdResult>` values. It holds no business logic
//! (that lives in `commands/*.rs`) and does no I/O formatting (that is
//! the CLI's job).
//!
//! ## Generic Over DataStore
//!
//! `RoloApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RoloApi<FileStore>`
//! - Testing: `RoloApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Record, RecordDraft, RecordPatch};
use crate::records::RecordStore;
use crate::store::DataStore;
use std::path::Path;

pub struct RoloApi<S: DataStore> {
    book: RecordStore<S>,
}

impl<S: DataStore> RoloApi<S> {
    /// Open against a backend, seeding the demonstration records on
    /// first run.
    pub fn open(store: S) -> Result<Self> {
        Ok(Self {
            book: RecordStore::open(store)?,
        })
    }

    /// Open with an explicit first-run seed (empty to start blank).
    pub fn open_with(store: S, seed: Vec<Record>) -> Result<Self> {
        Ok(Self {
            book: RecordStore::open_with(store, seed)?,
        })
    }

    pub fn create_record(&mut self, draft: RecordDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.book, draft)
    }

    pub fn update_record(&mut self, id: u64, patch: &RecordPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.book, id, patch)
    }

    pub fn delete_record(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, id)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn search_records(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, term)
    }

    pub fn view_record(&self, id: u64) -> Result<commands::CmdResult> {
        commands::view::run(&self.book, id)
    }

    pub fn import_records(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.book, path)
    }

    pub fn export_records(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.book, path)
    }

    pub fn clear_records(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.book)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn facade_dispatches_crud_round_trip() {
        let mut api = RoloApi::open_with(InMemoryStore::new(), Vec::new()).unwrap();

        let created = api
            .create_record(RecordDraft::new("Ada", "ada@example.com", "555", "London"))
            .unwrap();
        let id = created.affected_records[0].id;

        let patch = RecordPatch {
            city: Some("Cambridge".to_string()),
            ..Default::default()
        };
        api.update_record(id, &patch).unwrap();
        let viewed = api.view_record(id).unwrap();
        assert_eq!(viewed.listed_records[0].city, "Cambridge");

        api.delete_record(id).unwrap();
        assert!(api.list_records().unwrap().listed_records.is_empty());
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut a = RoloApi::open_with(InMemoryStore::new(), Vec::new()).unwrap();
        let b = RoloApi::open_with(InMemoryStore::new(), Vec::new()).unwrap();

        a.create_record(RecordDraft::new("Ada", "a@example.com", "1", "X"))
            .unwrap();
        assert_eq!(a.list_records().unwrap().listed_records.len(), 1);
        assert!(b.list_records().unwrap().listed_records.is_empty());
    }
}
