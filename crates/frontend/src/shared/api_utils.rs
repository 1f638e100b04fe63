//! Helpers for building backend URLs

/// Port the backend listens on (`[server] port` in config.toml)
pub const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend, derived from the current page location.
///
/// Returns an empty string outside a browser, which turns every API path
/// into a same-origin relative URL.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full URL for an API path such as `/api/quote_requests`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_for() {
        assert_eq!(base_for("https:", "shop.example.com"), "https://shop.example.com:3000");
    }
}
