pub mod repository;

use repository::log_event_internal;

/// Record a server-side event in `system_log`.
///
/// ```ignore
/// logger::log("startup", "Server started");
/// logger::log("quote_request", "Quote request stored");
/// ```
pub fn log(category: &str, message: &str) {
    log_event_internal("server", category, message);
}
