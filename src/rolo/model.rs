use serde::{Deserialize, Serialize};

/// One managed user record. The id is allocated by the store, never by
/// the caller.
///
/// Fields are defaulted on deserialization: imported payloads are not
/// shape-checked beyond being a sequence, so partial objects load with
/// empty fields rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

/// The four text fields of a record without an id, as collected from
/// user input for creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

impl RecordDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            city: city.into(),
        }
    }

    pub fn into_record(self, id: u64) -> Record {
        Record {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            city: self.city,
        }
    }
}

/// A partial update. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.city.is_none()
    }

    /// Merge this patch over an existing record, preserving unspecified
    /// fields and the id.
    pub fn apply_to(&self, record: &mut Record) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            record.phone = phone.clone();
        }
        if let Some(city) = &self.city {
            record.city = city.clone();
        }
    }
}

/// Demonstration records used when the storage is empty on first run.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            city: "New York".to_string(),
        },
        Record {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            city: "Los Angeles".to_string(),
        },
        Record {
            id: 3,
            name: "Mike Johnson".to_string(),
            email: "mike.johnson@example.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            city: "Chicago".to_string(),
        },
    ]
}
