use chrono::{DateTime, Utc};

/// A persisted signup, exactly as it lives in the data file. Records are append
/// only: nothing in the service ever mutates or deletes one.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignupRecord {
    pub email: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}
