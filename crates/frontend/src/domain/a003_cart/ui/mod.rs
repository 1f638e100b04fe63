mod page;

pub use page::CartPage;
