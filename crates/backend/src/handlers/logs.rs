use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::{CreateLogRequest, LogEntry};

use crate::shared::logger;

/// POST /api/logs
pub async fn create(Json(req): Json<CreateLogRequest>) -> Result<Json<LogEntry>, StatusCode> {
    match logger::repository::log_event(&req.source, &req.category, &req.message).await {
        Ok(entry) => Ok(Json(entry)),
        Err(e) => {
            tracing::warn!("Failed to store client log: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
