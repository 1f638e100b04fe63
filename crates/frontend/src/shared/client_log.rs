//! Client-side events forwarded to the backend `system_log`

use super::api_utils::api_url;
use contracts::shared::logger::CreateLogRequest;
use gloo_net::http::Request;

pub async fn send(entry: &CreateLogRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/logs"))
        .json(entry)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Log to the console and forward to the backend without waiting
pub fn report(category: &'static str, message: String) {
    log::warn!("[{}] {}", category, message);
    let entry = CreateLogRequest::client(category, message);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = send(&entry).await {
            log::debug!("client log not delivered: {}", e);
        }
    });
}
