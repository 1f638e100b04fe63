pub mod config;
pub mod data;
pub mod logger;
pub mod request_logger;
pub mod tracing;
