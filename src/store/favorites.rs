use crate::store::records::PoemRecord;
use crate::store::{load_records, save_records, KeyValueStore, StoreError};

const KEY: &str = "favorite_poems";

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    Added,
    /// A record with the exact same poem text already exists.
    AlreadySaved,
}

/// Saved poems, deduplicated by exact poem text.
pub struct Favorites {
    store: Box<dyn KeyValueStore>,
}

impl Favorites {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<PoemRecord>, StoreError> {
        load_records(self.store.as_ref(), KEY)
    }

    /// Append a record unless an identical poem text is already saved.
    pub fn save(&self, record: PoemRecord) -> Result<SaveResult, StoreError> {
        let mut records = self.list()?;
        if records.iter().any(|r| r.poem == record.poem) {
            return Ok(SaveResult::AlreadySaved);
        }
        records.push(record);
        save_records(self.store.as_ref(), KEY, &records)?;
        Ok(SaveResult::Added)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        save_records::<PoemRecord>(self.store.as_ref(), KEY, &[])
    }
}
