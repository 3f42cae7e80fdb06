use super::DataStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a key, as if a previous session had written it.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl DataStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Persist `count` records under the given key, ids 1..=count.
        pub fn with_records(mut self, key: &str, count: usize) -> Self {
            let records: Vec<Record> = (1..=count as u64)
                .map(|i| Record {
                    id: i,
                    name: format!("Test User {}", i),
                    email: format!("user{}@example.com", i),
                    phone: format!("+1 (555) 000-{:04}", i),
                    city: format!("City {}", i),
                })
                .collect();
            let blob = serde_json::to_string(&records).unwrap();
            self.store.set(key, &blob).unwrap();
            self
        }

        /// Persist a raw blob under the given key, bypassing
        /// serialization. Useful for malformed-payload tests.
        pub fn with_raw(mut self, key: &str, blob: &str) -> Self {
            self.store.set(key, blob).unwrap();
            self
        }
    }
}
