pub mod a002_quote_request;
pub mod logs;
