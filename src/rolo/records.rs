//! The record store: the authoritative in-memory sequence of [`Record`]s
//! plus its synchronization with a [`DataStore`] backend.
//!
//! Every mutating operation rewrites the full serialized sequence under
//! the `"users"` key before returning, so the persisted blob always
//! reflects the in-memory state. Read operations (`find`, `filter`)
//! never touch the backend.

use crate::error::{Result, RoloError};
use crate::model::{Record, RecordDraft, RecordPatch};
use crate::store::DataStore;

/// Storage key holding the JSON-encoded array of records.
pub const USERS_KEY: &str = "users";

#[derive(Debug)]
pub struct RecordStore<S: DataStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: DataStore> RecordStore<S> {
    /// Open the store, loading the sequence from the backend. An absent
    /// key is first-run, not a failure: the store starts from `seed`,
    /// which stays in memory until the first mutation persists it.
    pub fn open_with(store: S, seed: Vec<Record>) -> Result<Self> {
        let records = match store.get(USERS_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(RoloError::Serialization)?,
            None => seed,
        };
        Ok(Self { store, records })
    }

    /// Open with the standard three-record demonstration seed.
    pub fn open(store: S) -> Result<Self> {
        Self::open_with(store, crate::model::sample_records())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Allocate a new id, append the record, persist, return it.
    ///
    /// Ids are `max(existing, 0) + 1`: monotonic with respect to the
    /// current maximum only. Deleting the highest-id record frees its
    /// successor value for reuse, but a new id never collides with a
    /// surviving one.
    pub fn create(&mut self, draft: RecordDraft) -> Result<Record> {
        let record = draft.into_record(self.next_id());
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Merge `patch` over the record with the given id. Returns whether
    /// a record was found; a miss is a no-op and does not persist.
    pub fn update(&mut self, id: u64, patch: &RecordPatch) -> Result<bool> {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                patch.apply_to(record);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with the given id, keeping the relative order
    /// of the rest. Persists even when nothing matched (idempotent
    /// no-op). Returns whether a record was removed.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// Linear scan by id. Read-only.
    pub fn find(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Case-insensitive substring match against name, email and city;
    /// verbatim substring match against phone. Returns matches in
    /// original order. Read-only.
    pub fn filter(&self, term: &str) -> Vec<&Record> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.email.to_lowercase().contains(&needle)
                    || r.city.to_lowercase().contains(&needle)
                    || r.phone.contains(term)
            })
            .collect()
    }

    /// Wholesale replacement of the sequence. No per-record validation.
    pub fn replace_all(&mut self, records: Vec<Record>) -> Result<()> {
        self.records = records;
        self.persist()
    }

    /// Empty the sequence and persist.
    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.persist()
    }

    /// Parse a JSON payload and replace the sequence with it.
    ///
    /// Distinguishes the two failure modes the caller must report
    /// separately: a payload that is not valid JSON fails with
    /// [`RoloError::Serialization`]; valid JSON that is not an array
    /// fails with [`RoloError::InvalidFormat`]. The sequence is
    /// untouched on either failure. Returns the number of imported
    /// records.
    pub fn import_json(&mut self, payload: &str) -> Result<usize> {
        let value: serde_json::Value =
            serde_json::from_str(payload).map_err(RoloError::Serialization)?;
        if !value.is_array() {
            return Err(RoloError::InvalidFormat);
        }
        let records: Vec<Record> =
            serde_json::from_value(value).map_err(RoloError::Serialization)?;
        let count = records.len();
        self.replace_all(records)?;
        Ok(count)
    }

    /// Pretty-printed JSON (2-space indent) of the current sequence.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.records).map_err(RoloError::Serialization)
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.records).map_err(RoloError::Serialization)?;
        self.store.set(USERS_KEY, &blob)
    }
}
