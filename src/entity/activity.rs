use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One append-only audit record. `action` is a free-text tag such as
/// LOGIN, ADD_VEHICLE or REQUEST_DELETE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub user_id: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}

impl ActivityEntry {
    pub fn new(user_id: &str, action: &str, details: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            action: action.to_string(),
            timestamp: Utc::now(),
            details,
        }
    }
}
