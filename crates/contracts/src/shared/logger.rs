use serde::{Deserialize, Serialize};

/// A single system log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub source: String, // "client" or "server"
    pub category: String,
    pub message: String,
}

/// Body of `POST /api/logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String,
    pub category: String,
    pub message: String,
}

impl CreateLogRequest {
    pub fn client(category: &str, message: impl Into<String>) -> Self {
        Self {
            source: "client".to_string(),
            category: category.to_string(),
            message: message.into(),
        }
    }
}
