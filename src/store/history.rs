use crate::store::records::PoemRecord;
use crate::store::{load_records, save_records, KeyValueStore, StoreError};

const KEY: &str = "saved_poems";

/// Recently generated poems, newest first, bounded.
pub struct History {
    store: Box<dyn KeyValueStore>,
    limit: usize,
}

impl History {
    pub fn new(store: Box<dyn KeyValueStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Stored poems, newest first.
    pub fn list(&self) -> Result<Vec<PoemRecord>, StoreError> {
        load_records(self.store.as_ref(), KEY)
    }

    /// Prepend a record, dropping the oldest entries past the limit.
    pub fn record(&self, record: PoemRecord) -> Result<(), StoreError> {
        let mut records = self.list()?;
        records.insert(0, record);
        records.truncate(self.limit);
        save_records(self.store.as_ref(), KEY, &records)
    }
}
