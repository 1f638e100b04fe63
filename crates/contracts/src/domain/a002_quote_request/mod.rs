pub mod aggregate;
pub mod fields;

pub use aggregate::{QuoteRequest, QuoteRequestDto, QuoteRequestId};
pub use fields::{FieldName, QuoteFields, REQUIRED_FIELDS_NOTICE};
