use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_quote_request::QuoteRequestDto;
use serde_json::json;

use crate::domain::a002_quote_request::service::{self, QuoteRequestError};

/// POST /api/quote_requests
pub async fn create(
    Json(dto): Json<QuoteRequestDto>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    match service::create(dto).await {
        Ok(id) => Ok(Json(json!({ "id": id.value().to_string() }))),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!("Failed to store quote request: {}", e);
            }
            Err((status, e.to_string()))
        }
    }
}

pub fn status_for(error: &QuoteRequestError) -> StatusCode {
    match error {
        QuoteRequestError::Validation(_) => StatusCode::BAD_REQUEST,
        QuoteRequestError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&QuoteRequestError::Validation("Name is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&QuoteRequestError::Storage(anyhow::anyhow!("disk full"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
