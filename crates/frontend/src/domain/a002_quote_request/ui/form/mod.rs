//! Quote request form
//!
//! MVVM layout:
//! - model.rs: `QuoteStore` seam and the HTTP implementation
//! - wizard.rs: pure state machine (steps, gate, submission)
//! - view_model.rs: signals + commands
//! - view.rs: Leptos components
//! - query.rs: `/contact` query string and pre-fill

mod model;
mod query;
mod view;
mod view_model;
pub mod wizard;

pub use model::{HttpQuoteStore, QuoteStore};
pub use query::ContactQuery;
pub use view::QuoteForm;
pub use view_model::QuoteFormVm;
