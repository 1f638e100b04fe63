use crate::shared::api_utils::api_url;
use contracts::domain::a002_quote_request::QuoteRequestDto;
use gloo_net::http::Request;
use serde::Deserialize;

/// Destination of submitted quote requests
#[allow(async_fn_in_trait)]
pub trait QuoteStore {
    /// Store one request. `Err` carries a human readable reason.
    async fn create(&self, dto: &QuoteRequestDto) -> Result<(), String>;
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

/// Posts quote requests to the backend
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpQuoteStore;

impl QuoteStore for HttpQuoteStore {
    async fn create(&self, dto: &QuoteRequestDto) -> Result<(), String> {
        let response = Request::post(&api_url("/api/quote_requests"))
            .json(dto)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {}: {}", response.status(), body));
        }

        match response.json::<CreatedResponse>().await {
            Ok(created) => log::info!("quote request stored: {}", created.id),
            Err(e) => log::debug!("quote request stored, unreadable response: {}", e),
        }
        Ok(())
    }
}
