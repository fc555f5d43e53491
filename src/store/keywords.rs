use crate::store::{load_records, save_records, KeyValueStore, StoreError};

/// Maximum keywords carried into one generation request.
pub const MAX_KEYWORDS: usize = 3;

/// Result of an add attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordUpdate {
    Added,
    Duplicate,
    LimitReached,
}

/// Per-region saved keyword lists, reloaded when a region is revisited.
pub struct KeywordBook {
    store: Box<dyn KeyValueStore>,
}

impl KeywordBook {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key_for(region_code: &str) -> String {
        format!("keywords_{}", region_code)
    }

    pub fn list(&self, region_code: &str) -> Result<Vec<String>, StoreError> {
        load_records(self.store.as_ref(), &Self::key_for(region_code))
    }

    /// Add a keyword to a region's list. Duplicates and additions past
    /// the limit are rejected, mirroring the input screen's rules.
    pub fn add(&self, region_code: &str, keyword: &str) -> Result<KeywordUpdate, StoreError> {
        let keyword = keyword.trim();
        let mut keywords = self.list(region_code)?;
        if keywords.iter().any(|k| k == keyword) {
            return Ok(KeywordUpdate::Duplicate);
        }
        if keywords.len() >= MAX_KEYWORDS {
            return Ok(KeywordUpdate::LimitReached);
        }
        keywords.push(keyword.to_string());
        save_records(self.store.as_ref(), &Self::key_for(region_code), &keywords)?;
        Ok(KeywordUpdate::Added)
    }

    /// Remove a keyword; returns whether it was present.
    pub fn remove(&self, region_code: &str, keyword: &str) -> Result<bool, StoreError> {
        let mut keywords = self.list(region_code)?;
        let before = keywords.len();
        keywords.retain(|k| k != keyword);
        if keywords.len() == before {
            return Ok(false);
        }
        save_records(self.store.as_ref(), &Self::key_for(region_code), &keywords)?;
        Ok(true)
    }
}
