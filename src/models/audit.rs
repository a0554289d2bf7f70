use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub session_id: Option<String>,
    pub action: String,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    // Create audit log entry with structured JSON payload
    pub fn new<T: Serialize>(session_id: Option<&str>, action: &str, payload: &T) -> Self {
        AuditLogEntry {
            id: Uuid::new_v4(),
            session_id: session_id.map(String::from),
            action: action.to_string(),
            payload: serde_json::to_string(payload).unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}
