pub mod a002_quote_request;
