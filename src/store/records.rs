use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored poem, as kept in favorites and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemRecord {
    pub id: String,
    pub poem: String,
    pub region: String,
    pub keywords: Vec<String>,
    /// ISO-8601 local timestamp, seconds precision.
    pub timestamp: String,
}

impl PoemRecord {
    pub fn new(poem: String, region: String, keywords: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            poem,
            region,
            keywords,
            timestamp: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}
