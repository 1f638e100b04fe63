pub mod contact_page;
pub mod form;

pub use contact_page::ContactPage;
