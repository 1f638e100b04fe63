use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::request_logger::request_logger;

pub fn configure_routes(static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown paths fall through to the SPA so client-side routes resolve
    let index = format!("{}/index.html", static_dir);
    let spa = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/quote_requests",
            post(handlers::a002_quote_request::create),
        )
        .route("/api/logs", post(handlers::logs::create))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
